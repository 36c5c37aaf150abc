use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

type LedgerTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the browser's screen. Raw mode and the alternate screen last until
/// [`TerminalManager::restore`] or drop, whichever comes first.
pub struct TerminalManager {
    terminal: LedgerTerminal,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(anyhow::Error::new(e).context("Failed to enter the alternate screen"));
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, restored: false })
    }

    pub fn terminal_mut(&mut self) -> &mut LedgerTerminal {
        &mut self.terminal
    }

    /// Hand the screen back to the shell
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        leave_screen(&mut self.terminal).context("Failed to restore the terminal")
    }
}

fn leave_screen(terminal: &mut LedgerTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if !self.restored {
            let _ = leave_screen(&mut self.terminal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_hands_back_screen() {
        // No TTY under CI, so only check when setup succeeds
        if let Ok(manager) = TerminalManager::new() {
            assert!(manager.restore().is_ok());
        }
    }
}

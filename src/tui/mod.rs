// Interactive terminal browser for a filtered view
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::export::ExportScope;
use crate::view::FilteredView;

/// Run the interactive browser until the user quits
pub fn run_interactive(view: FilteredView, export_dir: PathBuf, scope: ExportScope) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(view, export_dir, scope);

    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    res
}

//! Browser state and event handling.
//!
//! The `App` owns the [`FilteredView`] being browsed and runs the main event loop via
//! `run()`. It manages:
//!
//! - **Paging**: arrow/page keys, Home/End, and digit jumps move the pager cursor
//! - **Export**: `j` / `c` write the configured export scope to the export directory
//! - **Status messages**: Transient feedback for exports and invalid page jumps
//! - **Dirty state tracking**: Redraw only when state changes

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::export::{ExportFormat, ExportScope, write_export};
use crate::utils::format_path_with_tilde;
use crate::view::FilteredView;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    view: FilteredView,
    export_dir: PathBuf,
    export_scope: ExportScope,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(view: FilteredView, export_dir: PathBuf, export_scope: ExportScope) -> Self {
        Self {
            view,
            export_dir,
            export_scope,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        if self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let scope = self.export_scope.to_string();
                terminal.draw(|f| {
                    let state = RenderState {
                        status_message: self.status_message.as_ref(),
                        export_scope: &scope,
                    };
                    render_ui(f, &self.view, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        let len = self.view.len();
        let moved = match action {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::NextPage => self.view.pager_mut().next(len),
            Action::PreviousPage => self.view.pager_mut().previous(len),
            Action::FirstPage => self.view.pager_mut().first(len),
            Action::LastPage => self.view.pager_mut().last(len),
            Action::JumpToPage(page) => match self.view.select_page(page) {
                Ok(()) => true,
                Err(e) => {
                    self.set_status(e.to_string(), MessageType::Error, STATUS_ERROR_DURATION_MS);
                    false
                }
            },
            Action::ExportJson => {
                self.export(ExportFormat::Json);
                false
            }
            Action::ExportCsv => {
                self.export(ExportFormat::Csv);
                false
            }
            Action::None => false,
        };

        if moved {
            self.needs_redraw = true;
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let records = self.export_scope.select(&self.view);
        match write_export(&self.export_dir, format, records) {
            Ok(path) => {
                let text = format!(
                    "✓ Exported {} records to {}",
                    records.len(),
                    format_path_with_tilde(&path)
                );
                self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => {
                self.set_status(format!("✗ {}", e), MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
        }
    }
}

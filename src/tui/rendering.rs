use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::{FIELD_COUNT, FIELD_NAMES, Record};
use crate::utils::sanitize_cell;
use crate::view::FilteredView;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything besides the view that the status line needs
pub struct RenderState<'a> {
    pub status_message: Option<&'a StatusMessage>,
    pub export_scope: &'a str,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, view: &FilteredView, state: &RenderState) {
    let total_pages = view.total_pages();
    let layout = AppLayout::new(frame.area(), total_pages > 1);

    render_table(frame, layout.table_area, view.page_records(), view);
    if let Some(area) = layout.page_bar_area {
        render_page_bar(frame, area, view.current_page(), total_pages);
    }
    render_status_bar(frame, layout.status_area, view, state);
}

fn render_table(frame: &mut Frame, area: Rect, records: &[Record], view: &FilteredView) {
    let header = Row::new(FIELD_NAMES.iter().map(|name| Cell::from(*name)))
        .style(Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            Row::new(record.values().map(|value| Cell::from(sanitize_cell(value))))
                .style(Style::default().fg(MUTED))
        })
        .collect();

    let title = format!(" {} to {} ", view.range().from, view.range().to);
    let widths = [Constraint::Ratio(1, FIELD_COUNT as u32); FIELD_COUNT];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(title),
    );

    frame.render_widget(table, area);
}

/// "‹ Prev  1 [2] 3  Next ›" with the current page highlighted
fn render_page_bar(frame: &mut Frame, area: Rect, current_page: usize, total_pages: usize) {
    let enabled = Style::default().fg(BRIGHT);
    let disabled = Style::default().fg(MUTED);

    let mut spans = vec![Span::styled(
        " ‹ Prev ",
        if current_page > 1 { enabled } else { disabled },
    )];
    for page in 1..=total_pages {
        let style = if page == current_page {
            Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            disabled
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }
    spans.push(Span::styled(
        " Next › ",
        if current_page < total_pages { enabled } else { disabled },
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, view: &FilteredView, state: &RenderState) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(BAR_BG))
    } else if view.is_empty() {
        (
            " No filtered data available. | q: quit ".to_string(),
            Style::default().fg(BRIGHT).bg(BAR_BG),
        )
    } else {
        let mut parts = vec![
            format!("{} records", view.len()),
            format!("page {}/{}", view.current_page(), view.total_pages()),
        ];
        if !view.discarded().is_empty() {
            parts.push(format!("{} undated skipped", view.discarded().len()));
        }
        parts.push(format!("j/c: export {} as JSON/CSV", state.export_scope));
        parts.push("←/→: page".to_string());
        parts.push("q: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Browser layout: record table, optional page bar, status line
pub struct AppLayout {
    pub table_area: Rect,
    pub page_bar_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    /// The page bar row is only reserved when there is more than one page
    pub fn new(area: Rect, show_page_bar: bool) -> Self {
        let page_bar_height = if show_page_bar { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(page_bar_height),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            table_area: chunks[0],
            page_bar_area: show_page_bar.then_some(chunks[1]),
            status_area: chunks[2],
        }
    }
}

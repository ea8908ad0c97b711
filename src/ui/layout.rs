use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        tab_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

pub struct PackingLayout {
    pub header: Rect,
    pub form: Rect,
    pub list: Rect,
    pub stats: Rect,
}

pub fn packing_layout(area: Rect) -> PackingLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Add item form
            Constraint::Min(3),    // Item list
            Constraint::Length(3), // Stats
        ])
        .split(area);

    PackingLayout {
        header: chunks[0],
        form: chunks[1],
        list: chunks[2],
        stats: chunks[3],
    }
}

pub struct SplitLayout {
    pub friends: Rect,
    pub add_friend: Rect,
    pub bill_form: Rect,
}

pub fn split_layout(area: Rect, add_form_open: bool) -> SplitLayout {
    // Left: friends above the add form | right: split form
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(45), Constraint::Min(30)])
        .split(area);

    let add_height = if add_form_open { 8 } else { 3 };
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(add_height)])
        .split(h_chunks[0]);

    SplitLayout {
        friends: left[0],
        add_friend: left[1],
        bill_form: h_chunks[1],
    }
}

/// Rectangle of `width` x `height` centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 12 栏网格：左侧占 `left` 栏，右侧占剩余
pub fn split_columns(area: Rect, left: u32) -> (Rect, Rect) {
    let left = left.min(12);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(left, 12), Constraint::Ratio(12 - left, 12)])
        .split(area);
    (chunks[0], chunks[1])
}

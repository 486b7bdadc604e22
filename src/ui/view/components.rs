//! 通用 UI 组件
//!
//! 按钮、输入框等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// [组件] 居中的按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(color)));
    frame.render_widget(button, area);
}

/// [组件] 带有标题、焦点样式和错误提示的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    error: Option<&str>,
) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut block = Block::default().title(title).borders(Borders::ALL);
    block = match error {
        Some(message) => block
            .border_style(Style::default().fg(Color::Red))
            .title_bottom(Line::styled(message.to_string(), Style::default().fg(Color::Red))),
        None => block.border_style(style),
    };

    // 焦点处显示光标占位
    let text = if is_focused {
        format!("{value}▏")
    } else {
        value.to_string()
    };

    let input = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(input, area);
}

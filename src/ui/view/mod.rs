//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::form::{FieldName, PostForm};
use super::state::App;
use crate::models::Post;
use components::{render_button, render_input_widget};
use layouts::split_columns;

/// 单篇文章卡片的显示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub title: String,
    pub byline: String,
    pub body: String,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            byline: post.byline(),
            body: post.body.clone(),
        }
    }
}

/// 按服务端顺序生成卡片
pub fn post_cards(posts: &[Post]) -> Vec<PostCard> {
    posts.iter().map(PostCard::from).collect()
}

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 标题
            Constraint::Min(10),   // 主体
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_hero(frame, chunks[0]);

    let (list_area, side_area) = split_columns(chunks[1], 8);
    render_posts(frame, app, list_area);
    render_side_panel(frame, &app.form, side_area);

    render_help(frame, app, chunks[2]);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::styled(
            "Crypto Blog",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Explore the latest in cryptocurrency news and insights",
            Style::default().fg(Color::Gray),
        ),
    ]);
    let hero = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hero, area);
}

fn card_item(card: PostCard, selected: bool) -> ListItem<'static> {
    let title_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(Span::styled(card.title, title_style)),
        Line::styled(card.byline, Style::default().fg(Color::DarkGray)),
    ];
    lines.extend(card.body.lines().map(|line| Line::from(line.to_string())));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn render_posts(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = post_cards(&app.posts)
        .into_iter()
        .enumerate()
        .map(|(i, card)| card_item(card, i == app.selected_index))
        .collect();

    let title = if app.is_loading() {
        format!("Posts ({}) · loading…", app.posts.len())
    } else {
        format!("Posts ({})", app.posts.len())
    };

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_symbol("▌ ");

    let mut state = ListState::default();
    if !app.posts.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_side_panel(frame: &mut Frame, form: &PostForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 按钮
            Constraint::Length(3), // Title
            Constraint::Length(6), // Body
            Constraint::Length(3), // Author
            Constraint::Length(3), // 提交
            Constraint::Min(0),
        ])
        .split(area);

    let label = if form.visible { "Hide Form" } else { "Create New Post" };
    render_button(frame, chunks[0], label, Color::Blue);

    if !form.visible {
        return;
    }

    for (name, area) in FieldName::ALL.into_iter().zip(&chunks[1..4]) {
        render_input_widget(
            frame,
            *area,
            name.label(),
            form.value(name),
            form.focus == name,
            form.error(name),
        );
    }
    render_button(frame, chunks[4], "Submit Post", Color::Blue);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.form.visible {
        "[Tab] 下一项  [Enter] 提交 (正文中换行)  [Ctrl+S] 提交  [Esc] 收起表单"
    } else {
        "[n] 发帖  [r] 刷新  [j/k] 浏览  [q] 退出"
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

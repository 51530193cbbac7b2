//! 用户管理页面视图

use container_panel_core::utils::datetime;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use crate::model::App;

/// 渲染用户管理页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.users.users.is_empty() {
        render_empty(frame, area);
    } else {
        render_list(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            "  No users yet",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled(
            "  Alt+a: Add a user",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = ratatui::widgets::Paragraph::new(content);
    frame.render_widget(paragraph, area);
}

/// 渲染用户列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .users
        .users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == app.users.selected;

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let dim_style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(&user.username, style),
                Span::raw(" "),
                Span::styled(format!("<{}>", user.email), dim_style),
                Span::styled(
                    format!("  since {}", datetime::format_display(&user.created_at)),
                    dim_style,
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.users.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 首页布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Min(1),    // 统计区域
        ])
        .split(area);

    // 欢迎信息
    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to Container Panel",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Manage tenant containers and panel users",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    let welcome_widget = Paragraph::new(welcome);
    frame.render_widget(welcome_widget, layout[0]);

    // 统计信息
    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(layout[1]);

    // 容器统计
    let total = app.containers.containers.len();
    let running = app
        .containers
        .containers
        .iter()
        .filter(|c| c.is_running())
        .count();

    let containers_block = Block::default()
        .title(" Containers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let containers_content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {total}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  containers, {running} running"),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(containers_block);

    frame.render_widget(containers_content, stats_layout[0]);

    // 用户统计
    let users_block = Block::default()
        .title(" Users ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let users_content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.users.users.len()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  panel users",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(users_block);

    frame.render_widget(users_content, stats_layout[1]);
}

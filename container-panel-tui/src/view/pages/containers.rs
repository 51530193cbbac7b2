//! 容器列表页面视图
//!
//! 顶部为过滤输入条，下方为容器表格。表格只渲染当前可见行
//! （由过滤查询决定），选中行高亮。

use container_panel_core::types::ContainerStatus;
use container_panel_core::utils::datetime;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染容器列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 过滤输入条
            Constraint::Min(1),    // 表格
        ])
        .split(area);

    render_filter_bar(app, frame, layout[0]);

    if app.containers.containers.is_empty() {
        render_empty(frame, layout[1], "No containers yet");
    } else if app.containers.visible.is_empty() {
        let message = format!(
            "No containers match \"{}\"",
            app.containers.filter_query.trim()
        );
        render_empty(frame, layout[1], &message);
    } else {
        render_table(app, frame, layout[1]);
    }
}

/// 渲染过滤输入条
fn render_filter_bar(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.containers;
    let counts = format!("{}/{}", state.match_count(), state.containers.len());

    let line = if state.filter_active {
        Line::from(vec![
            Span::styled("  Filter: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}▎", state.filter_query),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("  {counts}"), Style::default().fg(Color::DarkGray)),
        ])
    } else if state.filter_query.trim().is_empty() {
        Line::from(Span::styled(
            "  Press / to filter",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("  Filter: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.filter_query.clone(),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {counts}  (/ to edit)"),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {message}"),
            Style::default().fg(Color::Gray),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染容器表格
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.containers;

    let header = Row::new(vec![
        Cell::from("User"),
        Cell::from("Name"),
        Cell::from("Image"),
        Cell::from("Status"),
        Cell::from("Port"),
        Cell::from("Created"),
    ])
    .style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .visible
        .iter()
        .enumerate()
        .filter_map(|(vi, &ci)| state.containers.get(ci).map(|container| (vi, container)))
        .map(|(vi, container)| {
            let is_selected = vi == state.selected;

            let (status_icon, status_color) = match container.status {
                ContainerStatus::Running => ("●", c.success),
                ContainerStatus::Stopped => ("○", c.warning),
                ContainerStatus::Error => ("✗", c.error),
            };

            let base_style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let status_style = if is_selected {
                Style::default().fg(status_color).bg(Color::Cyan)
            } else {
                Style::default().fg(status_color)
            };

            let dim_style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(c.muted)
            };

            Row::new(vec![
                Cell::from(truncate_cell(&container.user, 12)).style(base_style),
                Cell::from(truncate_cell(&container.name, 16)).style(base_style),
                Cell::from(truncate_cell(&container.image, 18)).style(dim_style),
                Cell::from(Line::from(vec![
                    Span::styled(status_icon, status_style),
                    Span::styled(format!(" {}", container.status.as_str()), base_style),
                ])),
                Cell::from(container.port.to_string()).style(base_style),
                Cell::from(datetime::format_display(&container.created_at)).style(dim_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Min(18),
        ],
    )
    .header(header)
    .column_spacing(2);

    frame.render_widget(table, area);
}

/// 按显示宽度截断单元格文本，超宽时以 … 结尾
fn truncate_cell(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use container_panel_core::validation::Field;

use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::colors;

/// 表单字段的静态描述
struct FormField {
    field: Field,
    placeholder: &'static str,
    is_secret: bool,
}

/// 新建用户表单的字段定义
const NEW_USER_FIELDS: [FormField; 3] = [
    FormField {
        field: Field::Username,
        placeholder: "3-50 characters, a-z 0-9 _ -",
        is_secret: false,
    },
    FormField {
        field: Field::Email,
        placeholder: "user@example.com",
        is_secret: false,
    },
    FormField {
        field: Field::Password,
        placeholder: "At least 6 characters",
        is_secret: true,
    },
];

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::NewUser { .. } => render_new_user(frame, modal),
        Modal::ConfirmAction { .. } => render_confirm_action(frame, modal),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染新建用户表单弹窗
fn render_new_user(frame: &mut Frame, modal: &Modal) {
    let Modal::NewUser {
        username,
        email,
        password,
        focus,
        show_password,
        errors,
    } = modal
    else {
        return;
    };

    let c = colors();
    let values = [username, email, password];

    // 计算弹窗高度：每个字段 3 行（标签 + 值 + 空行），错误标记各加 1 行，
    // 另有提示行(2) + 边框(2)
    let error_lines = errors.iter().flatten().count() as u16;
    let height = (NEW_USER_FIELDS.len() as u16) * 3 + error_lines + 2 + 2;
    let area = centered_rect(50, height, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    // 弹窗边框
    let block = Block::default()
        .title(" New User ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    // 内容区域
    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let mut lines = Vec::new();

    for (i, field) in NEW_USER_FIELDS.iter().enumerate() {
        let field_focused = *focus == i;
        let value = values[i].as_str();

        // === 标签行 ===
        let mut label_spans = vec![Span::styled(
            field.field.label(),
            Style::default().fg(Color::Gray),
        )];
        if field.is_secret && field_focused {
            label_spans.push(Span::styled(
                " (Alt+v toggles visibility)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(label_spans));

        // === 值行 ===
        // 密码字段默认以 • 遮蔽，切换可见后显示明文
        let display_value = if field.is_secret && !show_password && !value.is_empty() {
            "•".repeat(value.chars().count().min(20))
        } else {
            value.to_string()
        };

        let value_display = if value.is_empty() && !field_focused {
            format!("  {}", field.placeholder)
        } else if field_focused {
            format!("  {display_value}▎")
        } else {
            format!("  {display_value}")
        };

        let value_style = if value.is_empty() && !field_focused {
            Style::default().fg(Color::DarkGray)
        } else if field_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::styled(value_display, value_style));

        // === 错误标记 ===
        if let Some(err) = &errors[i] {
            lines.push(Line::styled(
                format!("  ⚠ {err}"),
                Style::default().fg(Color::Red),
            ));
        }

        lines.push(Line::from(""));
    }

    // === 操作提示 ===
    lines.push(Line::from(vec![
        Span::styled("  Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Next | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Submit | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染确认操作对话框
fn render_confirm_action(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmAction {
        action,
        target_name,
        focus,
        ..
    } = modal
    else {
        return;
    };

    let c = colors();
    let area = centered_rect(44, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", action.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", action.prompt()),
            Style::default().fg(Color::White),
        ),
        Line::styled(
            format!("  \"{target_name}\""),
            Style::default().fg(Color::Yellow),
        ),
        Line::styled(
            "  This operation cannot be undone.",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(action.confirm_label(), confirm_style),
        ]),
        Line::from(""),
        Line::styled(
            "  Tab switches, Enter/Space activates",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(55, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let lines = vec![
        Line::styled("Global shortcuts", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tab    ", Style::default().fg(Color::Yellow)),
            Span::styled("Switch panel", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  ↑↓/jk  ", Style::default().fg(Color::Yellow)),
            Span::styled("Move Up/Down", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Enter  ", Style::default().fg(Color::Yellow)),
            Span::styled("Confirm", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Esc    ", Style::default().fg(Color::Yellow)),
            Span::styled("Back/Cancel", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Alt+q  ", Style::default().fg(Color::Yellow)),
            Span::styled("Quit", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::styled("Operation shortcuts", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  /      ", Style::default().fg(Color::Yellow)),
            Span::styled("Filter containers", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Alt+a  ", Style::default().fg(Color::Yellow)),
            Span::styled("Add user", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Alt+s  ", Style::default().fg(Color::Yellow)),
            Span::styled("Stop container", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Alt+d  ", Style::default().fg(Color::Yellow)),
            Span::styled("Delete", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Alt+c  ", Style::default().fg(Color::Yellow)),
            Span::styled("Copy address", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

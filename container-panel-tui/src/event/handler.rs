//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                                  // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 始终可以退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 过滤输入激活时，按键进入查询文本
    if filter_captures_input(app) {
        return handle_filter_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::HELP.matches(&key) || (key.modifiers.is_empty() && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // Alt+q: 退出
    if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('q') {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 过滤输入是否捕获按键（容器页、内容面板、过滤激活）
fn filter_captures_input(app: &App) -> bool {
    app.focus.is_content()
        && app.current_page == Page::Containers
        && app.containers.filter_active
}

/// 处理过滤输入激活时的按键
fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Esc 或 Enter: 退出过滤输入（查询保留）
        KeyCode::Esc | KeyCode::Enter => AppMessage::Content(ContentMessage::FilterEnd),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Content(ContentMessage::FilterBackspace),

        // 字符输入（每次编辑都重新计算可见行）
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Content(ContentMessage::FilterInput(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 通用操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    // 容器页面专用快捷键
    if app.current_page == Page::Containers {
        if DefaultKeymap::ACTION_STOP.matches(&key) {
            return AppMessage::Content(ContentMessage::Stop);
        }
        if DefaultKeymap::ACTION_COPY.matches(&key) {
            return AppMessage::Content(ContentMessage::CopyEndpoint);
        }
        if DefaultKeymap::FILTER.matches(&key) {
            return AppMessage::Content(ContentMessage::FilterStart);
        }
    }

    handle_list_keys(key)
}

/// 处理列表类页面的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // Home: 跳到第一项
        KeyCode::Home => {
            AppMessage::Content(ContentMessage::SelectFirst)
        }
        // End: 跳到最后一项
        KeyCode::End => {
            AppMessage::Content(ContentMessage::SelectLast)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    use crate::model::state::Modal;

    // Esc 始终可以关闭弹窗
    if key.modifiers.is_empty() && key.code == KeyCode::Esc {
        return AppMessage::Modal(ModalMessage::Close);
    }

    // 根据弹窗类型处理按键
    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::NewUser { .. } => handle_new_user_keys(key),
        Modal::ConfirmAction { .. } => handle_confirm_action_keys(key),
        Modal::Help => {
            // 帮助弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理新建用户表单弹窗的按键
fn handle_new_user_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),

        // Shift+Tab 或 ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),

        // Enter: 提交表单
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),

        // 字符输入
        KeyCode::Char(ch) => {
            // Alt+v 切换密码可见性
            if key.modifiers.contains(KeyModifiers::ALT) && ch == 'v' {
                AppMessage::Modal(ModalMessage::TogglePassword)
            } else if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                // 普通字符输入（表单字段中，空格也是输入）
                AppMessage::Modal(ModalMessage::Input(ch))
            } else {
                AppMessage::Noop
            }
        }

        _ => AppMessage::Noop,
    }
}

/// 处理确认操作对话框的按键
fn handle_confirm_action_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换按钮焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleButtonFocus)
        }

        // Enter 或 空格: 激活焦点按钮（恰好触发一次）
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Char(' ') if key.modifiers.is_empty() => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

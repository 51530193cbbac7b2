//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息

use crate::message::ContentMessage;
use crate::model::{App, DestructiveAction, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
        }
        ContentMessage::SelectFirst => {
            handle_select_first(app);
        }
        ContentMessage::SelectLast => {
            handle_select_last(app);
        }

        // ========== 增删操作 ==========
        ContentMessage::Add => {
            handle_add(app);
        }
        ContentMessage::Delete => {
            handle_delete(app);
        }

        // ========== 容器操作 ==========
        ContentMessage::Stop => {
            handle_stop(app);
        }
        ContentMessage::CopyEndpoint => {
            handle_copy_endpoint(app);
        }

        // ========== 表格过滤 ==========
        ContentMessage::FilterStart => {
            if app.current_page == Page::Containers {
                app.containers.filter_active = true;
            }
        }
        ContentMessage::FilterInput(ch) => {
            app.containers.push_filter_char(ch);
        }
        ContentMessage::FilterBackspace => {
            app.containers.pop_filter_char();
        }
        ContentMessage::FilterEnd => {
            app.containers.filter_active = false;
        }
    }
}

// ========== 列表导航处理 ==========

fn handle_select_previous(app: &mut App) {
    match &app.current_page {
        Page::Containers => {
            app.containers.select_previous();
        }
        Page::Users => {
            app.users.select_previous();
        }
        Page::Home => {}
    }
}

fn handle_select_next(app: &mut App) {
    match &app.current_page {
        Page::Containers => {
            app.containers.select_next();
        }
        Page::Users => {
            app.users.select_next();
        }
        Page::Home => {}
    }
}

fn handle_select_first(app: &mut App) {
    match &app.current_page {
        Page::Containers => {
            app.containers.select_first();
        }
        Page::Users => {
            app.users.select_first();
        }
        Page::Home => {}
    }
}

fn handle_select_last(app: &mut App) {
    match &app.current_page {
        Page::Containers => {
            app.containers.select_last();
        }
        Page::Users => {
            app.users.select_last();
        }
        Page::Home => {}
    }
}

// ========== 增删操作处理 ==========

/// 添加新项目（用户页面：打开新建用户表单）
fn handle_add(app: &mut App) {
    if app.current_page == Page::Users {
        app.modal.show_new_user();
    }
}

/// 删除当前选中项（打开确认对话框）
fn handle_delete(app: &mut App) {
    match &app.current_page {
        Page::Containers => {
            if let Some(container) = app.containers.selected_container() {
                app.modal.show_confirm(
                    DestructiveAction::DeleteContainer,
                    &container.name,
                    &container.id,
                );
            }
        }
        Page::Users => {
            if let Some(user) = app.users.selected_user() {
                app.modal
                    .show_confirm(DestructiveAction::DeleteUser, &user.username, &user.id);
            }
        }
        Page::Home => {}
    }
}

// ========== 容器操作处理 ==========

/// 停止当前选中的容器（打开确认对话框）
fn handle_stop(app: &mut App) {
    let Some((id, name, running)) = app
        .containers
        .selected_container()
        .map(|c| (c.id.clone(), c.name.clone(), c.is_running()))
    else {
        return;
    };

    if running {
        app.modal
            .show_confirm(DestructiveAction::StopContainer, &name, &id);
    } else {
        app.set_status(format!("Container \"{name}\" is not running"));
    }
}

/// 复制当前选中容器的访问地址到剪贴板
///
/// 成功时在状态栏通知；失败时仅记录日志，不打断页面。
fn handle_copy_endpoint(app: &mut App) {
    let Some(endpoint) = app
        .containers
        .selected_container()
        .map(|c| c.endpoint())
    else {
        return;
    };

    match app.clipboard.copy(&endpoint) {
        Ok(()) => {
            app.set_status("Copied to clipboard!");
        }
        Err(err) => {
            log::warn!("Failed to copy to clipboard: {err}");
        }
    }
}

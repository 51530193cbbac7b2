#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Update 层流程测试
//!
//! 通过消息驱动 `update()`，不触碰真实终端；剪贴板注入 Mock 实现。

use std::sync::{Arc, Mutex};

use container_panel_core::types::{Container, ContainerStatus};
use container_panel_core::{Clipboard, CoreError, CoreResult};

use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, FocusPanel, Page};
use crate::update::update;

// ===== Mock Implementations =====

/// 可配置的 Mock 剪贴板
struct MockClipboard {
    fail: bool,
    copied: Mutex<Vec<String>>,
}

impl MockClipboard {
    fn ok() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            copied: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            copied: Mutex::new(Vec::new()),
        })
    }

    fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Clipboard for MockClipboard {
    fn copy(&self, text: &str) -> CoreResult<()> {
        if self.fail {
            return Err(CoreError::Clipboard("access denied".to_string()));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

// ===== Helpers =====

/// 规格样例的两行容器表
fn sample_containers() -> Vec<Container> {
    vec![
        Container::new("alice", "web1", "nginx:1.27", ContainerStatus::Running, 8080),
        Container::new("bob", "db1", "postgres:16", ContainerStatus::Stopped, 5432),
    ]
}

/// 构造位于容器页面的测试应用（两行样例数据）
fn containers_app(clipboard: Arc<MockClipboard>) -> App {
    let mut app = App::with_clipboard(clipboard);
    app.containers.set_containers(sample_containers());
    app.current_page = Page::Containers;
    app.focus = FocusPanel::Content;
    app
}

/// 构造位于用户页面的测试应用
fn users_app() -> App {
    let mut app = App::with_clipboard(MockClipboard::ok());
    app.current_page = Page::Users;
    app.focus = FocusPanel::Content;
    app
}

/// 逐字符输入过滤查询
fn type_filter(app: &mut App, text: &str) {
    for ch in text.chars() {
        update(app, AppMessage::Content(ContentMessage::FilterInput(ch)));
    }
}

/// 逐字符输入表单字段
fn type_field(app: &mut App, text: &str) {
    for ch in text.chars() {
        update(app, AppMessage::Modal(ModalMessage::Input(ch)));
    }
}

/// 打开新建用户表单并填入三个字段
fn fill_new_user(app: &mut App, username: &str, email: &str, password: &str) {
    update(app, AppMessage::Content(ContentMessage::Add));
    type_field(app, username);
    update(app, AppMessage::Modal(ModalMessage::NextField));
    type_field(app, email);
    update(app, AppMessage::Modal(ModalMessage::NextField));
    type_field(app, password);
}

// ===== 过滤 =====

#[test]
fn filter_matches_status_query() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::FilterStart));
    type_filter(&mut app, "running");

    assert_eq!(app.containers.visible, vec![0]);
}

#[test]
fn filter_matches_port_query() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::FilterStart));
    type_filter(&mut app, "8080");

    assert_eq!(app.containers.visible, vec![0]);
}

#[test]
fn empty_query_shows_all_rows() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::FilterStart));

    assert_eq!(app.containers.visible, vec![0, 1]);
}

#[test]
fn unmatched_query_hides_all_rows() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::FilterStart));
    type_filter(&mut app, "zzz");

    assert!(app.containers.visible.is_empty());
}

#[test]
fn filter_recomputes_on_every_keystroke() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::FilterStart));

    // "d" 只匹配 db1，退格后全部可见
    type_filter(&mut app, "d");
    assert_eq!(app.containers.visible, vec![1]);

    update(&mut app, AppMessage::Content(ContentMessage::FilterBackspace));
    assert_eq!(app.containers.visible, vec![0, 1]);
}

#[test]
fn filter_end_keeps_query() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::FilterStart));
    type_filter(&mut app, "db");
    update(&mut app, AppMessage::Content(ContentMessage::FilterEnd));

    assert!(!app.containers.filter_active);
    assert_eq!(app.containers.filter_query, "db");
    assert_eq!(app.containers.visible, vec![1]);
}

#[test]
fn selection_is_clamped_when_visible_set_shrinks() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::SelectLast));
    assert_eq!(app.containers.selected, 1);

    update(&mut app, AppMessage::Content(ContentMessage::FilterStart));
    type_filter(&mut app, "web1");

    assert_eq!(app.containers.visible, vec![0]);
    assert_eq!(app.containers.selected, 0);
}

// ===== 确认对话框 =====

#[test]
fn stop_requires_confirmation() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::Stop));

    assert!(matches!(
        app.modal.active,
        Some(Modal::ConfirmAction { .. })
    ));
    // 弹窗打开时容器未被改动
    assert_eq!(app.containers.containers[0].status, ContainerStatus::Running);
}

#[test]
fn negative_confirmation_leaves_fleet_untouched() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::Stop));

    // 默认焦点在取消按钮上，Enter 等于取消
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    assert!(app.modal.active.is_none());
    assert_eq!(app.containers.containers[0].status, ContainerStatus::Running);
}

#[test]
fn affirmative_confirmation_stops_container() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::Stop));

    update(&mut app, AppMessage::Modal(ModalMessage::ToggleButtonFocus));
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    assert!(app.modal.active.is_none());
    assert_eq!(app.containers.containers[0].status, ContainerStatus::Stopped);
    assert_eq!(
        app.status_message.as_deref(),
        Some("Stopped container: \"web1\"")
    );
}

#[test]
fn confirm_fires_exactly_once() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::Delete));
    update(&mut app, AppMessage::Modal(ModalMessage::ToggleButtonFocus));
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    assert_eq!(app.containers.containers.len(), 1);

    // 弹窗已关闭，重复的确认消息不再产生效果
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
    assert_eq!(app.containers.containers.len(), 1);
}

#[test]
fn delete_container_removes_row() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::Delete));
    update(&mut app, AppMessage::Modal(ModalMessage::ToggleButtonFocus));
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    assert_eq!(app.containers.containers.len(), 1);
    assert_eq!(app.containers.containers[0].name, "db1");
    assert_eq!(app.containers.visible, vec![0]);
}

#[test]
fn stop_on_stopped_container_shows_status_without_dialog() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
    update(&mut app, AppMessage::Content(ContentMessage::Stop));

    assert!(app.modal.active.is_none());
    assert_eq!(
        app.status_message.as_deref(),
        Some("Container \"db1\" is not running")
    );
}

#[test]
fn escape_cancels_confirmation() {
    let mut app = containers_app(MockClipboard::ok());
    update(&mut app, AppMessage::Content(ContentMessage::Delete));
    update(&mut app, AppMessage::GoBack);

    assert!(app.modal.active.is_none());
    assert_eq!(app.containers.containers.len(), 2);
}

// ===== 新建用户表单 =====

#[test]
fn invalid_submit_blocks_and_marks_every_field() {
    let mut app = users_app();
    let before = app.users.users.len();

    fill_new_user(&mut app, "ab", "not-an-email", "12345");
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    let Some(Modal::NewUser { focus, errors, .. }) = &app.modal.active else {
        panic!("form should stay open on invalid submit");
    };

    // 错误是累积的：三个字段全部被标记
    assert!(errors.iter().all(Option::is_some));
    // 焦点回到第一个违规字段
    assert_eq!(*focus, 0);
    assert_eq!(app.users.users.len(), before);
}

#[test]
fn error_mark_clears_when_field_receives_focus() {
    let mut app = users_app();
    fill_new_user(&mut app, "ab", "not-an-email", "12345");
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    // 焦点移到邮箱字段：只有它的标记被清除
    update(&mut app, AppMessage::Modal(ModalMessage::NextField));

    let Some(Modal::NewUser { errors, .. }) = &app.modal.active else {
        panic!("form should stay open");
    };
    assert!(errors[0].is_some());
    assert!(errors[1].is_none());
    assert!(errors[2].is_some());
}

#[test]
fn valid_submit_creates_user_and_closes_form() {
    let mut app = users_app();
    let before = app.users.users.len();

    fill_new_user(&mut app, "dave_01", "dave@example.com", "s3cret!");
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    assert!(app.modal.active.is_none());
    assert_eq!(app.users.users.len(), before + 1);
    let created = app.users.users.last().unwrap();
    assert_eq!(created.username, "dave_01");
    assert_eq!(created.email, "dave@example.com");
    assert_eq!(
        app.status_message.as_deref(),
        Some("User \"dave_01\" created")
    );
}

#[test]
fn single_invalid_field_is_the_focused_one() {
    let mut app = users_app();
    fill_new_user(&mut app, "dave_01", "dave@example.com", "short");
    update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    let Some(Modal::NewUser { focus, errors, .. }) = &app.modal.active else {
        panic!("form should stay open");
    };
    assert!(errors[0].is_none());
    assert!(errors[1].is_none());
    assert!(errors[2].is_some());
    assert_eq!(*focus, 2);
}

#[test]
fn password_toggle_twice_restores_masking() {
    let mut app = users_app();
    update(&mut app, AppMessage::Content(ContentMessage::Add));

    update(&mut app, AppMessage::Modal(ModalMessage::TogglePassword));
    let Some(Modal::NewUser { show_password, .. }) = &app.modal.active else {
        panic!("form should be open");
    };
    assert!(*show_password);

    update(&mut app, AppMessage::Modal(ModalMessage::TogglePassword));
    let Some(Modal::NewUser { show_password, .. }) = &app.modal.active else {
        panic!("form should be open");
    };
    assert!(!*show_password);
}

#[test]
fn space_is_input_inside_form_fields() {
    let mut app = users_app();
    update(&mut app, AppMessage::Content(ContentMessage::Add));
    type_field(&mut app, "web user");

    let Some(Modal::NewUser { username, .. }) = &app.modal.active else {
        panic!("form should be open");
    };
    assert_eq!(username, "web user");
}

// ===== 剪贴板 =====

#[test]
fn copy_endpoint_notifies_on_success() {
    let clipboard = MockClipboard::ok();
    let mut app = containers_app(clipboard.clone());

    update(&mut app, AppMessage::Content(ContentMessage::CopyEndpoint));

    assert_eq!(clipboard.copied(), vec!["localhost:8080".to_string()]);
    assert_eq!(app.status_message.as_deref(), Some("Copied to clipboard!"));
}

#[test]
fn copy_failure_leaves_page_state_unchanged() {
    let mut app = containers_app(MockClipboard::failing());

    update(&mut app, AppMessage::Content(ContentMessage::CopyEndpoint));

    // 失败只记录日志：无状态消息，无弹窗，数据未变
    assert!(app.status_message.is_none());
    assert!(app.modal.active.is_none());
    assert_eq!(app.containers.containers.len(), 2);
}

// ===== 导航 =====

#[test]
fn navigation_confirm_switches_page() {
    let mut app = App::with_clipboard(MockClipboard::ok());
    assert_eq!(app.current_page, Page::Home);

    update(
        &mut app,
        AppMessage::Navigation(NavigationMessage::SelectNext),
    );
    update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));

    assert_eq!(app.current_page, Page::Containers);
}

#[test]
fn focus_does_not_toggle_while_modal_open() {
    let mut app = users_app();
    update(&mut app, AppMessage::Content(ContentMessage::Add));

    update(&mut app, AppMessage::ToggleFocus);
    assert_eq!(app.focus, FocusPanel::Content);
}

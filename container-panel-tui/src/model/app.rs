//! 应用主状态结构

use std::sync::Arc;

use container_panel_core::Clipboard;

use super::{ContainersState, FocusPanel, ModalState, NavigationState, Page, UsersState};
use crate::backend::OsClipboard;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 容器页面状态
    pub containers: ContainersState,
    /// 用户页面状态
    pub users: UsersState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 剪贴板能力（可注入，测试时替换为 Mock）
    pub clipboard: Arc<dyn Clipboard>,
}

impl App {
    /// 创建新的应用实例（使用系统剪贴板）
    pub fn new() -> Self {
        Self::with_clipboard(Arc::new(OsClipboard::new()))
    }

    /// 创建应用实例并注入剪贴板实现
    pub fn with_clipboard(clipboard: Arc<dyn Clipboard>) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            containers: ContainersState::new(),
            users: UsersState::new(),
            modal: ModalState::new(),
            clipboard,
        };

        // 开发阶段：加载模拟数据
        app.containers.load_mock_fleet();
        app.users.load_mock_users();

        app
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! 用户页面状态

use chrono::TimeZone;
use chrono::Utc;
use container_panel_core::types::PanelUser;

/// 用户页面状态
#[derive(Debug, Default)]
pub struct UsersState {
    /// 用户列表
    pub users: Vec<PanelUser>,
    /// 当前选中的索引
    pub selected: usize,
}

impl UsersState {
    /// 创建新的用户状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.users.is_empty() && self.selected < self.users.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.users.is_empty() {
            self.selected = self.users.len() - 1;
        }
    }

    /// 获取当前选中的用户
    pub fn selected_user(&self) -> Option<&PanelUser> {
        self.users.get(self.selected)
    }

    /// 添加一个用户（表单提交成功后调用）
    pub fn add_user(&mut self, user: PanelUser) {
        self.users.push(user);
    }

    /// 按 ID 删除用户，返回被删除的用户
    pub fn delete_by_id(&mut self, id: &str) -> Option<PanelUser> {
        let index = self.users.iter().position(|u| u.id == id)?;
        let removed = self.users.remove(index);
        if !self.users.is_empty() && self.selected >= self.users.len() {
            self.selected = self.users.len() - 1;
        }
        Some(removed)
    }

    /// 添加模拟数据（开发测试用）
    pub fn load_mock_users(&mut self) {
        let created = |d: u32, h: u32, m: u32| {
            Utc.with_ymd_and_hms(2026, 7, d, h, m, 0)
                .single()
                .unwrap_or_default()
        };

        self.users = vec![
            PanelUser {
                id: "usr_1".to_string(),
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                created_at: created(25, 10, 0),
            },
            PanelUser {
                id: "usr_2".to_string(),
                username: "bob".to_string(),
                email: "bob@example.org".to_string(),
                created_at: created(26, 16, 40),
            },
            PanelUser {
                id: "usr_3".to_string(),
                username: "carol".to_string(),
                email: "carol@example.net".to_string(),
                created_at: created(27, 11, 15),
            },
        ];
    }
}

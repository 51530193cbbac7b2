//! 弹窗/对话框状态

/// 新建用户表单的字段数：用户名、邮箱、密码
pub const NEW_USER_FIELD_COUNT: usize = 3;

/// 不可撤销的操作类型（需要确认对话框）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    /// 停止容器
    StopContainer,
    /// 删除容器
    DeleteContainer,
    /// 删除用户
    DeleteUser,
}

impl DestructiveAction {
    /// 对话框标题
    pub fn title(self) -> &'static str {
        match self {
            Self::StopContainer => "Confirm Stop",
            Self::DeleteContainer | Self::DeleteUser => "Confirm Deletion",
        }
    }

    /// 操作特定的确认提示
    pub fn prompt(self) -> &'static str {
        match self {
            Self::StopContainer => "Stop this container?",
            Self::DeleteContainer => "Delete this container permanently?",
            Self::DeleteUser => "Delete this user permanently?",
        }
    }

    /// 确认按钮文本
    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::StopContainer => " Stop ",
            Self::DeleteContainer | Self::DeleteUser => " Delete ",
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 新建用户表单
    NewUser {
        /// 用户名
        username: String,
        /// 邮箱
        email: String,
        /// 密码
        password: String,
        /// 当前焦点：0=用户名, 1=邮箱, 2=密码
        focus: usize,
        /// 密码是否可见
        show_password: bool,
        /// 每个字段的错误标记（提交失败时设置，字段获得焦点时清除）
        errors: Vec<Option<String>>,
    },
    /// 确认不可撤销操作
    ConfirmAction {
        /// 操作类型
        action: DestructiveAction,
        /// 目标名称（显示用）
        target_name: String,
        /// 目标 ID
        target_id: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示新建用户表单弹窗
    pub fn show_new_user(&mut self) {
        self.active = Some(Modal::NewUser {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            focus: 0,
            show_password: false,
            errors: vec![None; NEW_USER_FIELD_COUNT],
        });
    }

    /// 显示确认操作弹窗
    pub fn show_confirm(&mut self, action: DestructiveAction, target_name: &str, target_id: &str) {
        self.active = Some(Modal::ConfirmAction {
            action,
            target_name: target_name.to_string(),
            target_id: target_id.to_string(),
            focus: 0,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}

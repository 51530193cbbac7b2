//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 容器列表
    Containers,
    /// 用户管理
    Users,
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Containers => "Containers",
            Page::Users => "Users",
        }
    }
}

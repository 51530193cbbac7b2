//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、增删、过滤等

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 增删操作 ==========
    /// 添加新项目（用户页面：打开新建用户表单）
    Add,
    /// 删除当前选中项（需确认）
    Delete,

    // ========== 容器操作 ==========
    /// 停止当前选中的容器（需确认）
    Stop,
    /// 复制当前选中容器的访问地址到剪贴板
    CopyEndpoint,

    // ========== 表格过滤 ==========
    /// 激活过滤输入
    FilterStart,
    /// 过滤输入字符
    FilterInput(char),
    /// 过滤删除字符（Backspace）
    FilterBackspace,
    /// 退出过滤输入（保留当前查询）
    FilterEnd,
}

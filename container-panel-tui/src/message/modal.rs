//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 确认/提交（Enter，或确认对话框按钮上的空格）
    Confirm,

    /// 在确认对话框中切换按钮焦点
    ToggleButtonFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 切换密码可见性
    TogglePassword,
}

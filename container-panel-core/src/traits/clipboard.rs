//! 剪贴板能力抽象 Trait

use crate::error::CoreResult;

/// 剪贴板能力 Trait
///
/// 平台实现:
/// - 桌面终端: `OsClipboard`（pbcopy / xclip / xsel / clip 子进程）
/// - 测试: Mock 实现，返回预设的成功或失败
///
/// 复制是一次性的：失败不重试，由调用方记录日志。
pub trait Clipboard: Send + Sync {
    /// 将文本写入系统剪贴板
    ///
    /// # Arguments
    /// * `text` - 要复制的文本
    ///
    /// # Returns
    /// * `Ok(())` - 复制成功
    /// * `Err(CoreError::Clipboard)` - 复制失败
    fn copy(&self, text: &str) -> CoreResult<()>;
}

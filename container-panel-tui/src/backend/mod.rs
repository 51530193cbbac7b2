//!
//! src/backend/mod.rs
//! Backend 层：平台能力
//!
//! Backend 层与 UI 完全解耦，提供 container-panel-core 中
//! 能力 Trait 的平台实现。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod clipboard;          // 系统剪贴板（子进程实现）
//!
//!
//! 剪贴板通过 core 的 `Clipboard` Trait 注入到 App 中：
//!     - 生产：OsClipboard（pbcopy / xclip / xsel / clip）
//!     - 测试：Mock 实现，返回预设的成功或失败
//!
//! 复制失败只记录日志（由 update 层处理），不打断页面。

mod clipboard;

pub use clipboard::OsClipboard;

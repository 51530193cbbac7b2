//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod modal;
//!         mod content;
//!         mod navigation;
//!
//!         pub use app::AppMessage;
//!         pub use navigation::NavigationMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             Navigation(NavigationMessage),      // 导航面板子消息，与主消息分离
//!             Content(ContentMessage),            // 内容面板子消息
//!             Modal(ModalMessage),                // 弹窗子消息
//!             GoBack,                             // 返回/关闭
//!             ShowHelp,                           // 显示帮助
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     分别分出
//!         content.rs          专门处理在内容面板中的子消息
//!         modal.rs            专门处理弹窗相关的子消息
//!         navigation.rs       专门处理在导航栏中的子消息
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;

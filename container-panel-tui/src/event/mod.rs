//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，发至以下几个函数处理
//!             Event::Resize(Width , height)       // 终端窗口大小发生变化，重绘终端
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 过滤输入激活时，调用 handle_filter_keys 处理（按键进入查询文本）
//!                 - 全局快捷键，就地处理；
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/event/handler.rs 中定义：
//!
//!         当 app.modal.is_open() 为 true 时，优先处理弹窗键盘事件。
//!         根据弹窗类型分发到具体的处理函数：
//!             - handle_new_user_keys()        新建用户表单
//!             - handle_confirm_action_keys()  确认操作对话框
//!
//!         常用键盘映射：
//!             Esc         → ModalMessage::Close
//!             Tab         → ModalMessage::NextField
//!             Shift+Tab   → ModalMessage::PrevField
//!             Enter       → ModalMessage::Confirm
//!             空格        → ModalMessage::Confirm（仅确认对话框的按钮上）
//!             字符输入     → ModalMessage::Input(c)
//!             Backspace   → ModalMessage::Backspace
//!
//!     按钮激活语义：只处理 KeyEventKind::Press，保证焦点按钮每次按键
//!     恰好触发一次（Enter 与空格等价）。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     值得一提的是，虽说 page.rs 与 state/ 都表示页面状态，但两者有不同：
//!         - Page 是一个简单的枚举，表示当前应用处于哪个“页面”，相当于房间的门牌号，
//!             只负责标识位置，不存储任何业务数据；
//!         - State 是各个页面的业务数据容器，存储着列表、选中项、过滤查询等，
//!             相当于储存了房间的内容。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             // 以及各页面状态：
//!             pub containers: ContainersState,    // 容器页面状态
//!             pub users: UsersState,              // 用户页面状态
//!
//!             pub modal: ModalState,              // 弹窗状态
//!             pub clipboard: Arc<dyn Clipboard>,  // 剪贴板能力（可注入，便于测试）
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new();
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/focus.rs 中定义焦点面板枚举：
//!         - Navigation：左侧导航面板
//!         - Content：右侧内容面板
//!
//!     核心方法：
//!         - toggle()：切换焦点（左 ↔ 右）
//!         - is_navigation()：判断焦点是否在导航栏
//!         - is_content()：判断焦点是否在内容区
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义：
//!
//!         Modal 枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
//!             - NewUser { username, email, password, focus, show_password, errors }
//!             - ConfirmAction { action, target_name, target_id, focus }
//!             - Help
//!
//!         ModalState 容器：管理当前活动的弹窗
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!             - show_xxx() 方法：初始化并显示特定弹窗
//!             - close() 方法：关闭弹窗
//!
//!     数据流：
//!         用户按 Alt+a（在用户页）
//!             ↓
//!         update/content.rs 调用 app.modal.show_new_user()
//!             ↓
//!         ModalState.active = Some(Modal::NewUser { ... })
//!             ↓
//!         view/components/modal.rs 检测到弹窗，渲染弹窗 UI
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{ContainersState, DestructiveAction, Modal, ModalState, UsersState};

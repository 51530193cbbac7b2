//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod containers;
mod modal;
mod users;

pub use containers::ContainersState;
pub use modal::{DestructiveAction, Modal, ModalState, NEW_USER_FIELD_COUNT};
pub use users::UsersState;

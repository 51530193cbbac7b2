//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model 状态，渲染成终端 UI，不做任何状态修改。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 + 导航 + 内容 + 状态栏）
//!         mod theme;          // 颜色与样式
//!         mod components;     // 导航栏、状态栏、弹窗组件
//!         mod pages;          // 各页面渲染
//!
//!         pub use layout::render;

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;

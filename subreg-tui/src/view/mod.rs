//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 / 导航 / 内容 / 状态栏）
//!         mod components;         // 通用组件：导航面板、状态栏、弹窗
//!         mod pages;              // 页面：注册表单、域名列表
//!         pub mod theme;          // 颜色方案
//!
//!
//!     每一帧由主循环调用：
//!
//!         terminal.draw(|frame| view::render(app, frame))?;
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}

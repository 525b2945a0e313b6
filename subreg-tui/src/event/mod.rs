//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     按键分发顺序（handler.rs）：
//!         - 有弹窗打开时，只接受 Esc / Enter / Ctrl+C（关闭弹窗）
//!         - 全局快捷键：Ctrl+C、Alt+q 退出，Alt+h 帮助，Alt+r 重新查询，
//!           Esc 返回导航，Tab 切换面板
//!         - 焦点位于导航面板 → handle_navigation_keys
//!         - 焦点位于注册页   → handle_form_keys（字符键全部作为输入）
//!         - 焦点位于域名页   → handle_list_keys
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

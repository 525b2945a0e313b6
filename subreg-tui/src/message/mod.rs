//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod backend;        // 后台请求完成的消息
//!         mod command;        // Update 返回给主循环的副作用指令
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     消息有两个来源：
//!         · 键盘事件           event/handler.rs 翻译为 AppMessage
//!         · 后台请求完成       backend 通过 channel 送回 BackendMessage，
//!                             主循环包装为 AppMessage::Backend
//!
//!     Update 处理消息后返回 Command：
//!         Command::None                   // 无副作用
//!         Command::SubmitRegistration     // 发送 POST /data
//!         Command::FetchDomains           // 发送 POST /domains
//!

mod app;
mod backend;
mod command;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use command::Command;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;

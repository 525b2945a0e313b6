//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod dashboard;
mod domains;
mod modal;

pub use dashboard::DashboardState;
pub use domains::DomainsState;
pub use modal::{Modal, ModalState};

//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 层只保存数据，不包含渲染或 IO。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 根状态
//!         mod focus;          // 左右面板焦点
//!         mod navigation;     // 左侧导航项
//!         mod page;           // 当前页面
//!         pub mod state;      // 各页面与弹窗状态
//!
//!     App {
//!         should_quit,                    // 决定应用是否应该退出
//!         focus: FocusPanel,              // 当前焦点在哪个面板
//!         navigation: NavigationState,    // [Dashboard, Domains]
//!         current_page: Page,             // 右侧显示哪个页面
//!         status_message,                 // 状态栏消息
//!         dashboard: DashboardState,      // 注册表单（subreg-core 的 RegistrationController）
//!         domains: DomainsState,          // 域名列表（subreg-core 的 DomainListController）
//!         modal: ModalState,              // 帮助 / 错误弹窗
//!     }
//!
//! 表单校验与请求状态机都在 subreg-core 中，Model 层直接持有其控制器，
//! Update 层调用控制器的方法，View 层读取控制器的状态。

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::NavigationState;
pub use page::Page;
pub use state::{DashboardState, DomainsState, Modal, ModalState};

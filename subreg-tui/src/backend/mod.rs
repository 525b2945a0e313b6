//! src/backend/mod.rs
//! Backend 层：与外部世界打交道
//!
//! UI 层（Event / Message / Update / View）是同步的，
//! 所有网络请求都在 Backend 持有的 tokio 运行时中执行。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件 + 环境变量
//!         mod dispatcher;         // 运行时、命令执行、完成消息通道
//!         mod session_store;      // 登录会话（环境变量 / 钥匙串）
//!
//!
//!     请求的一次往返：
//!
//!         update::update(app, msg)  ──▶  Command::SubmitRegistration(request)
//!                                                │
//!                                                ▼
//!         backend.dispatch(command)  ──▶  runtime.spawn(service.submit(..))
//!                                                │
//!                                                ▼ mpsc
//!         backend.try_recv()  ──▶  AppMessage::Backend(RegistrationCompleted(..))
//!

mod config_service;
mod dispatcher;
mod session_store;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use dispatcher::Backend;
pub use session_store::{KeyringSessionStore, ENV_SESSION};

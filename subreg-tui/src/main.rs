//! subreg：子域名注册台的终端界面
//!
//! 启动流程：
//!     1. 读取配置（config.toml + 环境变量），初始化日志
//!     2. 设置语言和主题
//!     3. 读取登录会话（SUBREG_SESSION 或系统钥匙串）
//!     4. 创建 HTTP 客户端和 Backend（tokio 运行时）
//!     5. 初始化终端，运行主循环，恢复终端，关闭 Backend

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;

use subreg_client::{ClientConfig, HttpDashboardClient};

use backend::{Backend, ConfigService, KeyringSessionStore, LocalConfigService, ENV_SESSION};
use util::{init_logging, init_terminal, log_dir, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置和日志
    let config_service = LocalConfigService::from_env()?;
    let config = config_service.load()?.apply_env(|key| std::env::var(key).ok());
    let _log_guard = init_logging(&config.log_level)?;

    tracing::info!(
        "Starting subreg v{} (config: {}, logs: {})",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display(),
        log_dir()?.display()
    );

    let base_domain = config.base_domain()?.to_string();

    // 2. 语言和主题
    let language = config.language();
    i18n::set_language(language);
    tracing::debug!("UI language: {}", language.code());
    view::theme::set_theme(config.theme);

    // 3. 登录会话，读取失败时以未登录身份继续
    let mut startup_error = None;
    let session = match KeyringSessionStore::new().resolve(std::env::var(ENV_SESSION).ok()) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("{e:#}");
            startup_error = Some(format!("{e:#}"));
            None
        }
    };
    if session.is_none() {
        tracing::info!("No session cookie configured, requests are sent without login");
    }

    // 4. 客户端和后台
    let mut client_config = ClientConfig::new(&config.base_url)?;
    if let Some(session) = session {
        client_config = client_config.with_session_cookie(session);
    }
    let client = HttpDashboardClient::new(client_config)?;
    let mut backend = Backend::new(Arc::new(client))?;
    tracing::info!("Backend: {}, base domain: {base_domain}", config.base_url);

    let mut app = model::App::new(base_domain);
    if let Some(message) = startup_error {
        app.modal.show_error(i18n::t().modal.error_title, &message);
    }

    // 5. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    backend.shutdown();

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e:#}");
    } else {
        tracing::info!("Exited");
    }
    result
}

//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入数据目录下按天滚动的文件：
//! `<data_dir>/subreg/subreg.log.YYYY-MM-DD`。
//! `RUST_LOG` 优先于配置文件中的 `log_level`。
//! 库 crate 通过 `log` 门面输出，由 tracing-subscriber 的 `tracing-log` 桥接收集。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "subreg.log";

/// 日志目录
pub fn log_dir() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(dirs::home_dir)
        .context("Cannot determine a directory for log files")?;
    Ok(base.join("subreg"))
}

/// 初始化日志，返回的 guard 必须存活到程序退出
pub fn init_logging(default_level: &str) -> Result<WorkerGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    Ok(guard)
}

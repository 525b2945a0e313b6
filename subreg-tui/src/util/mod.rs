//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志文件的初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志（tracing + 滚动文件）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     启动顺序（src/main.rs）：
//!
//!         let _guard = init_logging(&config.log_level)?;   // 1. 先有日志
//!         let mut terminal = init_terminal()?;            // 2. 进入原始模式 + 备用屏幕
//!         let result = app::run(&mut terminal, ...);      // 3. 主循环
//!         restore_terminal(&mut terminal)?;               // 4. 无论成功失败都恢复
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲和字符回显，每个按键立即送达
//!     · Alternate Screen（备用屏幕）
//!         - 退出后恢复主屏幕原有内容
//!
//!     日志不能写到 stdout / stderr，否则会破坏界面，
//!     所以 init_logging 只写文件。
//!

mod logging;
mod terminal;

pub use logging::{init_logging, log_dir};
pub use terminal::{init_terminal, restore_terminal, Term};

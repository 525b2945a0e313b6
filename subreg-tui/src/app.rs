//! src/app.rs
//! 主循环
//!
//!     ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐
//!     │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │ ──▶ Command
//!     └─────────┘     └─────────┘     └──────────┘     └─────────┘       │
//!          ▲                               ▲                             ▼
//!          │                               │ BackendMessage        ┌──────────┐
//!     ┌─────────┐                          └────────────────────── │ Backend  │
//!     │  View   │ ◀── 读取 Model                                   └──────────┘
//!     └─────────┘
//!
//! 每轮循环：渲染 → 检查退出 → 收取后台完成消息 → 轮询按键（100ms 超时）。
//! 后台消息用 try_recv 收取，不会阻塞界面。

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 按键轮询超时
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取已完成的后台请求
        while let Some(backend_msg) = backend.try_recv() {
            let command = update::update(app, AppMessage::Backend(backend_msg));
            backend.dispatch(command);
        }

        // 4. 轮询事件，转换为消息并更新状态
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            let command = update::update(app, msg);
            backend.dispatch(command);
        }
    }

    Ok(())
}

//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（表单 / 列表）
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台请求完成的处理
//!
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Command {
//!             match msg {
//!                 AppMessage::Content(content_msg) => content::update(app, content_msg),
//!                 AppMessage::Backend(backend_msg) => { backend::update(app, backend_msg); Command::None }
//!                 ...
//!             }
//!         }
//!
//!     Update 本身不做 IO。需要请求后端时返回 Command，
//!     主循环（app.rs）把它交给 Backend 执行，结果再以 AppMessage::Backend 回来。
//!

mod backend;
mod content;
mod modal;
mod navigation;

use crate::message::{AppMessage, Command};
use crate::model::{App, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            return content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else {
                app.focus = FocusPanel::Navigation;
            }
            app.clear_status();
        }

        AppMessage::Refresh => {
            if app.current_page == Page::Domains {
                return content::fetch_domains(app);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }

    Command::None
}

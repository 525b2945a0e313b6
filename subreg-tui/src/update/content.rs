//! 内容面板更新逻辑
//!
//! 注册页把按键交给表单控制器；域名页控制列表选择与查询。
//! 需要网络请求时返回 [`Command`]，由主循环交给 Backend。

use subreg_core::{CoreError, FormField};

use crate::message::{Command, ContentMessage};
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Command {
    match app.current_page {
        Page::Dashboard => update_dashboard(app, msg),
        Page::Domains => update_domains(app, msg),
    }
}

// ========== 注册页 ==========

fn update_dashboard(app: &mut App, msg: ContentMessage) -> Command {
    let state = &mut app.dashboard;
    match msg {
        ContentMessage::SelectPrevious => state.focus_prev(),
        ContentMessage::SelectNext => state.focus_next(),
        ContentMessage::SelectFirst => state.focused = FormField::Prefix,
        ContentMessage::SelectLast => state.focused = FormField::Description,
        ContentMessage::TogglePrev => state.cycle_kind(false),
        ContentMessage::ToggleNext => state.cycle_kind(true),
        ContentMessage::Input(c) => state.input(c),
        ContentMessage::Backspace => state.backspace(),
        ContentMessage::Submit => return submit_registration(app),
    }
    Command::None
}

/// 校验表单并进入 `Pending`
///
/// 校验失败时焦点跳到第一个出错的字段；请求在途时什么都不做。
pub fn submit_registration(app: &mut App) -> Command {
    let state = &mut app.dashboard;
    match state.controller.try_submit() {
        Ok(request) => {
            tracing::debug!("Submitting registration for {}", request.subdomain);
            Command::SubmitRegistration(request)
        }
        Err(CoreError::Validation(errors)) => {
            tracing::debug!("Registration form rejected: {errors}");
            if let Some(first) = errors.iter().next() {
                state.focused = first.field;
            }
            Command::None
        }
        Err(e) => {
            tracing::debug!("Registration not sent: {e}");
            Command::None
        }
    }
}

// ========== 域名页 ==========

fn update_domains(app: &mut App, msg: ContentMessage) -> Command {
    let state = &mut app.domains;
    match msg {
        ContentMessage::SelectPrevious => state.select_previous(),
        ContentMessage::SelectNext => state.select_next(),
        ContentMessage::SelectFirst => state.select_first(),
        ContentMessage::SelectLast => state.select_last(),
        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {
            state.controller.toggle_kind();
            state.select_first();
        }
        ContentMessage::Submit => return fetch_domains(app),
        ContentMessage::Input(_) | ContentMessage::Backspace => {}
    }
    Command::None
}

/// 进入 `Pending` 并请求当前类型的列表
pub fn fetch_domains(app: &mut App) -> Command {
    match app.domains.controller.try_fetch() {
        Ok(kind) => {
            app.clear_status();
            Command::FetchDomains(kind)
        }
        Err(e) => {
            tracing::debug!("Domain fetch not sent: {e}");
            Command::None
        }
    }
}

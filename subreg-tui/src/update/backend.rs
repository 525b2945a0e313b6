//! 后台请求完成后的状态更新

use subreg_core::MutationStatus;

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::App;

/// 把请求结果交给对应页面的控制器
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::RegistrationCompleted(outcome) => {
            if !app.dashboard.controller.complete(outcome) {
                tracing::debug!("Dropped a registration result with no pending submission");
            }
        }

        BackendMessage::DomainsLoaded(outcome) => {
            if app.domains.controller.complete(outcome) {
                app.domains.select_first();
                if app.domains.controller.state.status() == MutationStatus::Success {
                    let count = app.domains.controller.domains().len();
                    app.set_status(format!("{count} {}", t().domains.loaded));
                }
            }
        }
    }
}

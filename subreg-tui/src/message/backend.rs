//! 后台任务完成消息
//!
//! Backend 在 tokio 运行时上执行请求，完成后经 channel 送回主循环。

use subreg_core::{CoreResult, DomainInfo, SubmitResponse};

/// 后台请求结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// `POST /data` 完成
    RegistrationCompleted(CoreResult<SubmitResponse>),
    /// `POST /domains` 完成
    DomainsLoaded(CoreResult<Vec<DomainInfo>>),
}

//! 子域名注册服务

use std::sync::Arc;

use subreg_client::{DashboardApi, SubdomainRequest, SubmitResponse};

use crate::controller::RegistrationController;
use crate::error::CoreResult;

/// 子域名注册服务
#[derive(Clone)]
pub struct RegistrationService {
    api: Arc<dyn DashboardApi>,
}

impl RegistrationService {
    /// 创建注册服务实例
    #[must_use]
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self { api }
    }

    /// 发送一次注册请求（`POST /data`）
    pub async fn submit(&self, request: &SubdomainRequest) -> CoreResult<SubmitResponse> {
        log::info!("Registering {} ({})", request.subdomain, request.kind);
        match self.api.submit(request).await {
            Ok(response) => Ok(response),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Registration of {} rejected: {e}", request.subdomain);
                } else {
                    log::error!("Registration of {} failed: {e}", request.subdomain);
                }
                Err(e.into())
            }
        }
    }

    /// 在控制器上走完整个提交流程
    ///
    /// 校验失败或已有请求在途时直接返回错误，不发请求。
    pub async fn run(&self, controller: &mut RegistrationController) -> CoreResult<()> {
        let request = controller.try_submit()?;
        let outcome = self.submit(&request).await;
        controller.complete(outcome);
        Ok(())
    }
}

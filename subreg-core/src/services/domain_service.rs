//! 域名列表服务

use std::sync::Arc;

use subreg_client::{DashboardApi, DomainInfo, DomainListKind};

use crate::controller::DomainListController;
use crate::error::CoreResult;

/// 域名列表服务
#[derive(Clone)]
pub struct DomainService {
    api: Arc<dyn DashboardApi>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self { api }
    }

    /// 获取指定类型的域名列表（`POST /domains`）
    pub async fn list_domains(&self, kind: DomainListKind) -> CoreResult<Vec<DomainInfo>> {
        match self.api.list_domains(kind).await {
            Ok(domains) => {
                log::debug!("Fetched {} {} domains", domains.len(), kind.as_str());
                Ok(domains)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Listing {} domains rejected: {e}", kind.as_str());
                } else {
                    log::error!("Listing {} domains failed: {e}", kind.as_str());
                }
                Err(e.into())
            }
        }
    }

    /// 在控制器上走完整个查询流程
    pub async fn run(&self, controller: &mut DomainListController) -> CoreResult<()> {
        let kind = controller.try_fetch()?;
        let outcome = self.list_domains(kind).await;
        controller.complete(outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockDashboardApi;
    use crate::{ClientError, CoreError, MutationStatus};

    fn row(name: &str) -> DomainInfo {
        DomainInfo {
            tag: "A".into(),
            name: name.into(),
            date: "2026.10.01".into(),
            target: "192.0.2.10".into(),
        }
    }

    #[tokio::test]
    async fn fetch_fills_table_rows() {
        let api = Arc::new(MockDashboardApi::new());
        api.set_domains(Ok(vec![row("blog.example.com"), row("www.example.com")]))
            .await;
        let service = DomainService::new(api.clone());

        let mut controller = DomainListController::new();
        controller.toggle_kind();
        assert!(service.run(&mut controller).await.is_ok());

        assert_eq!(controller.domains().len(), 2);
        assert_eq!(api.listed_kinds().await, vec![DomainListKind::Changed]);
    }

    #[tokio::test]
    async fn fetch_error_is_rendered() {
        let api = Arc::new(MockDashboardApi::new());
        api.set_domains(Err(ClientError::Http {
            status: 502,
            message: "HTTP 502 Bad Gateway".into(),
        }))
        .await;
        let service = DomainService::new(api);

        let mut controller = DomainListController::new();
        assert!(service.run(&mut controller).await.is_ok());
        assert_eq!(controller.state.status(), MutationStatus::Error);
        assert_eq!(controller.state.error(), Some("HTTP 502 Bad Gateway"));
        assert!(controller.domains().is_empty());
    }

    #[tokio::test]
    async fn only_one_fetch_in_flight() {
        let api = Arc::new(MockDashboardApi::new());
        let service = DomainService::new(api.clone());

        let mut controller = DomainListController::new();
        let _ = controller.try_fetch();
        let result = service.run(&mut controller).await;

        assert_eq!(result, Err(CoreError::SubmissionInFlight));
        assert!(api.listed_kinds().await.is_empty());
    }
}

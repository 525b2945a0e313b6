use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DomainInfo, DomainListKind, SubdomainRequest, SubmitResponse};

/// 仪表盘后端 Trait
///
/// 前端只依赖此 trait；真实实现为 [`HttpDashboardClient`](crate::HttpDashboardClient)，
/// 测试中可替换为 mock。
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// 提交子域名注册请求（`POST /data`）
    async fn submit(&self, request: &SubdomainRequest) -> Result<SubmitResponse>;

    /// 获取域名列表（`POST /domains`）
    async fn list_domains(&self, kind: DomainListKind) -> Result<Vec<DomainInfo>>;
}

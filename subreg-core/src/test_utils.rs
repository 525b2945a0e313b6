//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use subreg_client::{
    ClientError, DashboardApi, DomainInfo, DomainListKind, RecordKind, SubdomainRequest,
    SubmitResponse,
};
use tokio::sync::RwLock;

// ===== MockDashboardApi =====

pub struct MockDashboardApi {
    submit_response: RwLock<Result<SubmitResponse, ClientError>>,
    domains_response: RwLock<Result<Vec<DomainInfo>, ClientError>>,
    submitted: RwLock<Vec<SubdomainRequest>>,
    listed: RwLock<Vec<DomainListKind>>,
    submit_calls: AtomicUsize,
}

impl MockDashboardApi {
    pub fn new() -> Self {
        Self {
            submit_response: RwLock::new(Ok(SubmitResponse {
                message: "successfully sent!".to_string(),
            })),
            domains_response: RwLock::new(Ok(Vec::new())),
            submitted: RwLock::new(Vec::new()),
            listed: RwLock::new(Vec::new()),
            submit_calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_submit_response(&self, response: Result<SubmitResponse, ClientError>) {
        *self.submit_response.write().await = response;
    }

    pub async fn set_domains(&self, response: Result<Vec<DomainInfo>, ClientError>) {
        *self.domains_response.write().await = response;
    }

    /// 已发送的注册请求
    pub async fn submitted(&self) -> Vec<SubdomainRequest> {
        self.submitted.read().await.clone()
    }

    pub async fn listed_kinds(&self) -> Vec<DomainListKind> {
        self.listed.read().await.clone()
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardApi for MockDashboardApi {
    async fn submit(&self, request: &SubdomainRequest) -> subreg_client::Result<SubmitResponse> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submitted.write().await.push(request.clone());
        self.submit_response.read().await.clone()
    }

    async fn list_domains(&self, kind: DomainListKind) -> subreg_client::Result<Vec<DomainInfo>> {
        self.listed.write().await.push(kind);
        self.domains_response.read().await.clone()
    }
}

// ===== 工厂方法 =====

/// 一条合法的 A 记录请求
pub fn sample_request() -> SubdomainRequest {
    SubdomainRequest {
        subdomain: "blog.example.com".to_string(),
        ttl: 10,
        kind: RecordKind::A,
        prefix: "blog".to_string(),
        host: "192.0.2.10".to_string(),
        description: String::new(),
    }
}

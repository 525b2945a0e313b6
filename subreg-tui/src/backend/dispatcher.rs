//! 后台请求调度
//!
//! Backend 持有 tokio 运行时和注册台服务。Update 层返回的 [`Command`]
//! 在运行时中执行，完成后以 [`BackendMessage`] 送回主循环。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use subreg_core::{DashboardApi, DomainService, RegistrationService};

use crate::message::{BackendMessage, Command};

/// 关闭时等待在途请求的最长时间
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// 后台服务
pub struct Backend {
    runtime: Runtime,
    registration: RegistrationService,
    domains: DomainService,
    tx: UnboundedSender<BackendMessage>,
    rx: UnboundedReceiver<BackendMessage>,
}

impl Backend {
    /// 创建运行时和服务实例
    pub fn new(api: Arc<dyn DashboardApi>) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("subreg-backend")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            registration: RegistrationService::new(Arc::clone(&api)),
            domains: DomainService::new(api),
            tx,
            rx,
        })
    }

    /// 执行 Update 层返回的命令
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::None => {}
            Command::SubmitRegistration(request) => {
                let service = self.registration.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = service.submit(&request).await;
                    send(&tx, BackendMessage::RegistrationCompleted(result));
                });
            }
            Command::FetchDomains(kind) => {
                let service = self.domains.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = service.list_domains(kind).await;
                    send(&tx, BackendMessage::DomainsLoaded(result));
                });
            }
        }
    }

    /// 非阻塞地取出一条完成消息
    pub fn try_recv(&mut self) -> Option<BackendMessage> {
        self.rx.try_recv().ok()
    }

    /// 关闭运行时，丢弃未完成的请求
    pub fn shutdown(self) {
        self.runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
    }
}

fn send(tx: &UnboundedSender<BackendMessage>, message: BackendMessage) {
    if tx.send(message).is_err() {
        tracing::debug!("UI loop has exited, dropping backend message");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use subreg_core::{
        ClientError, DomainInfo, DomainListKind, RecordKind, SubdomainRequest, SubmitResponse,
    };

    #[derive(Default)]
    struct StubApi {
        submits: AtomicUsize,
    }

    #[async_trait]
    impl DashboardApi for StubApi {
        async fn submit(
            &self,
            request: &SubdomainRequest,
        ) -> std::result::Result<SubmitResponse, ClientError> {
            self.submits.fetch_add(1, Ordering::SeqCst);
            if request.host.is_empty() {
                return Err(ClientError::Http {
                    status: 400,
                    message: "bad request".into(),
                });
            }
            Ok(SubmitResponse {
                message: format!("{} registered", request.subdomain),
            })
        }

        async fn list_domains(
            &self,
            kind: DomainListKind,
        ) -> std::result::Result<Vec<DomainInfo>, ClientError> {
            Ok(vec![DomainInfo {
                tag: kind.as_str().to_string(),
                name: "example.com".into(),
                ..DomainInfo::default()
            }])
        }
    }

    fn request(host: &str) -> SubdomainRequest {
        SubdomainRequest {
            subdomain: "blog.example.com".into(),
            ttl: 10,
            kind: RecordKind::A,
            prefix: "blog".into(),
            host: host.into(),
            description: String::new(),
        }
    }

    #[test]
    fn submission_result_comes_back_as_message() -> Result<()> {
        let api = Arc::new(StubApi::default());
        let mut backend = Backend::new(api.clone())?;

        backend.dispatch(Command::SubmitRegistration(request("192.0.2.10")));
        let message = tokio_test::block_on(backend.rx.recv());

        assert!(matches!(
            message,
            Some(BackendMessage::RegistrationCompleted(Ok(ref r))) if r.message == "blog.example.com registered"
        ));
        assert_eq!(api.submits.load(Ordering::SeqCst), 1);
        backend.shutdown();
        Ok(())
    }

    #[test]
    fn rejection_is_delivered_as_error() -> Result<()> {
        let mut backend = Backend::new(Arc::new(StubApi::default()))?;

        backend.dispatch(Command::SubmitRegistration(request("")));
        let message = tokio_test::block_on(backend.rx.recv());

        assert!(matches!(
            message,
            Some(BackendMessage::RegistrationCompleted(Err(ref e))) if e.to_string() == "bad request"
        ));
        backend.shutdown();
        Ok(())
    }

    #[test]
    fn domain_fetch_uses_requested_kind() -> Result<()> {
        let mut backend = Backend::new(Arc::new(StubApi::default()))?;

        backend.dispatch(Command::FetchDomains(DomainListKind::Changed));
        let message = tokio_test::block_on(backend.rx.recv());

        assert!(matches!(
            message,
            Some(BackendMessage::DomainsLoaded(Ok(ref rows))) if rows[0].tag == "changed"
        ));
        backend.shutdown();
        Ok(())
    }

    #[test]
    fn none_command_sends_nothing() -> Result<()> {
        let api = Arc::new(StubApi::default());
        let mut backend = Backend::new(api.clone())?;

        backend.dispatch(Command::None);
        assert!(backend.try_recv().is_none());
        assert_eq!(api.submits.load(Ordering::SeqCst), 0);
        backend.shutdown();
        Ok(())
    }
}

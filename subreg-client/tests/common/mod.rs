//! 共享测试工具和辅助函数

#![allow(dead_code)]

use subreg_client::{ClientConfig, HttpDashboardClient, RecordKind, SubdomainRequest};
use wiremock::MockServer;

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// 指向 mock 服务器的客户端
pub fn client_for(server: &MockServer) -> Result<HttpDashboardClient, subreg_client::ClientError> {
    ClientConfig::new(&server.uri()).and_then(HttpDashboardClient::new)
}

/// 带会话 Cookie 的客户端
pub fn signed_in_client_for(
    server: &MockServer,
    cookie: &str,
) -> Result<HttpDashboardClient, subreg_client::ClientError> {
    ClientConfig::new(&server.uri())
        .map(|c| c.with_session_cookie(cookie))
        .and_then(HttpDashboardClient::new)
}

/// 一条合法的 A 记录请求
pub fn sample_request() -> SubdomainRequest {
    SubdomainRequest {
        subdomain: "blog.example.com".to_string(),
        ttl: 10,
        kind: RecordKind::A,
        prefix: "blog".to_string(),
        host: "192.0.2.10".to_string(),
        description: "personal blog".to_string(),
    }
}

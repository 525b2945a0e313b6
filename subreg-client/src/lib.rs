//! # subreg-client
//!
//! Typed client for the subdomain registration dashboard backend.
//!
//! The backend exposes two JSON endpoints:
//!
//! | Endpoint | Body | Response |
//! |----------|------|----------|
//! | `POST /data` | [`SubdomainRequest`] | [`SubmitResponse`] |
//! | `POST /domains` | `{"kind": "listing" \| "changed"}` | `{"domains": [DomainInfo]}` |
//!
//! DNS record creation and registrar access happen behind those endpoints;
//! this crate only fixes the request/response shapes and the failure
//! semantics.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)* — Use rustls.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use subreg_client::{
//!     ClientConfig, DashboardApi, DomainListKind, HttpDashboardClient, RecordKind,
//!     SubdomainRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpDashboardClient::new(ClientConfig::new("http://localhost:3000")?)?;
//!
//!     let request = SubdomainRequest {
//!         subdomain: "blog.example.com".to_string(),
//!         ttl: 10,
//!         kind: RecordKind::A,
//!         prefix: "blog".to_string(),
//!         host: "192.0.2.10".to_string(),
//!         description: "personal blog".to_string(),
//!     };
//!     let response = client.submit(&request).await?;
//!     println!("{}", response.message);
//!
//!     for domain in client.list_domains(DomainListKind::Listing).await? {
//!         println!("{} [{}] {}", domain.name, domain.tag, domain.date);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::Network`] — the request never produced a response
//! - [`ClientError::Http`] — the backend answered with a non-2xx status
//! - [`ClientError::Parse`] — the response body was not the expected JSON
//!
//! There is no retry, timeout or backoff; the error's `Display` output is the
//! message meant for the user.

mod client;
mod error;
mod http_client;
mod traits;
mod types;

pub use client::{ClientConfig, HttpDashboardClient, SESSION_COOKIE_NAME};
pub use error::{ClientError, Result};
pub use traits::DashboardApi;
pub use types::{
    DomainInfo, DomainListKind, DomainsQuery, DomainsResponse, RecordKind, SubdomainRequest,
    SubmitResponse,
};

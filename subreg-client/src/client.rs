//! reqwest implementation of [`DashboardApi`]

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::DashboardApi;
use crate::types::{
    DomainInfo, DomainListKind, DomainsQuery, DomainsResponse, SubdomainRequest, SubmitResponse,
};

/// Name of the login cookie the backend checks on every request.
pub const SESSION_COOKIE_NAME: &str = "user-cookie";

const SUBMIT_PATH: &str = "data";
const DOMAINS_PATH: &str = "domains";
const JSON: &str = "application/json";

/// Connection settings for [`HttpDashboardClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend root, always with a trailing `/` so endpoint paths join under it.
    base_url: Url,
    /// Value of the backend's login cookie, if the user is signed in.
    pub session_cookie: Option<String>,
    pub user_agent: String,
}

impl ClientConfig {
    /// Parses `base_url`; a missing trailing slash is added.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url).map_err(|e| ClientError::InvalidConfig {
            detail: format!("base url `{base_url}`: {e}"),
        })?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig {
                detail: format!("base url `{base_url}` cannot carry a path"),
            });
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            session_cookie: None,
            user_agent: format!("subreg/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    #[must_use]
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// HTTP client for the dashboard backend.
///
/// Construct one at startup and share it (it is cheap to clone and holds a
/// connection pool); dropping the last handle releases the pool.
#[derive(Debug, Clone)]
pub struct HttpDashboardClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDashboardClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|e| ClientError::InvalidConfig {
                detail: format!("user agent: {e}"),
            })?;
        headers.insert(USER_AGENT, user_agent);

        if let Some(cookie) = config.session_cookie.as_deref() {
            let mut value = HeaderValue::from_str(&format!("{SESSION_COOKIE_NAME}={cookie}"))
                .map_err(|e| ClientError::InvalidConfig {
                    detail: format!("session cookie: {e}"),
                })?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                detail: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidConfig {
                detail: format!("endpoint `{path}`: {e}"),
            })
    }

    /// POST a JSON body and parse a JSON response.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let payload = serde_json::to_vec(body).map_err(|e| ClientError::Serialization {
            detail: e.to_string(),
        })?;

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON)
            .body(payload);

        let (status, text) = HttpUtils::execute_request(request, "POST", path).await?;
        HttpUtils::ensure_success(status, &text)?;
        HttpUtils::parse_json(&text)
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardClient {
    async fn submit(&self, request: &SubdomainRequest) -> Result<SubmitResponse> {
        log::info!(
            "Submitting {} record for {}",
            request.kind,
            request.subdomain
        );
        self.post_json(SUBMIT_PATH, request).await
    }

    async fn list_domains(&self, kind: DomainListKind) -> Result<Vec<DomainInfo>> {
        let response: DomainsResponse = self.post_json(DOMAINS_PATH, &DomainsQuery { kind }).await?;
        log::info!(
            "Fetched {} domains ({})",
            response.domains.len(),
            kind.as_str()
        );
        Ok(response.domains)
    }
}

use std::time::Duration;

use reqwest::Proxy;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::OsrmError;

pub const DEFAULT_TIMEOUT_SECS: u8 = 10;

/// Connection settings shared by every call issued through a client.
///
/// Immutable once constructed. Each call builds a fresh connection from it
/// and discards it afterwards, so no state is carried between requests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in whole seconds.
    pub timeout_secs: u8,
    /// Optional HTTP proxy to tunnel requests through.
    pub proxy: Option<ProxyConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ProxyConfig {
    fn to_proxy(&self) -> Result<Proxy, reqwest::Error> {
        let proxy = Proxy::all(format!("http://{}:{}", self.host, self.port))?;

        Ok(match (&self.username, &self.password) {
            (Some(username), Some(password)) => proxy.basic_auth(username, password),
            _ => proxy,
        })
    }
}

/// Headers attached to every request: JSON content negotiation, do-not-track
/// and a deliberately empty user agent. Never an authentication header.
pub(crate) fn request_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.api+json"));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/vnd.api+json"),
    );
    headers.insert("dnt", HeaderValue::from_static("1"));
    headers
}

impl ClientConfig {
    fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_secs))
    }

    pub(crate) fn build_client(&self) -> Result<reqwest::Client, OsrmError> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout())
            .user_agent("")
            .default_headers(request_headers());

        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(proxy.to_proxy().map_err(OsrmError::Transport)?);
        }

        builder.build().map_err(OsrmError::Transport)
    }

    pub(crate) fn build_blocking_client(&self) -> Result<reqwest::blocking::Client, OsrmError> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(self.timeout())
            .user_agent("")
            .default_headers(request_headers());

        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(proxy.to_proxy().map_err(OsrmError::Transport)?);
        }

        builder.build().map_err(OsrmError::Transport)
    }
}

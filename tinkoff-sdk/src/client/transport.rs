//! Signed JSON transport shared by every operation.
//!
//! Each request is signed with the terminal password via [`token::sign`],
//! wrapped into [`SignedRequest`] and POSTed as JSON below the API root.

use reqwest::Client as HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::ClientError;
use crate::config::{TerminalConfig, default_base_url, normalize_base_url};
use crate::objects::{SignedRequest, TokenValues};
use crate::token;

/// Typed HTTP client for the acquiring API.
///
/// Holds no per-call state, so one instance (or its clones) can serve any
/// number of concurrent operations.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_url: Url,
    terminal_key: String,
    password: String,
}

impl Client {
    /// Create a new `Client` for the production API.
    ///
    /// * `terminal_key` – terminal identifier issued by the bank.
    /// * `password` – terminal password, used as token input only.
    pub fn new(terminal_key: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: default_base_url(),
            terminal_key: terminal_key.into(),
            password: password.into(),
        }
    }

    /// Create a new `Client` from a [`TerminalConfig`].
    pub fn from_config(config: &TerminalConfig) -> Self {
        Self::new(config.terminal_key.clone(), config.password.clone())
            .with_base_url(config.base_url.clone())
    }

    /// Send requests below another API root (e.g. a test stand).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: HttpClient) -> Self {
        self.http = client;
        self
    }

    pub fn terminal_key(&self) -> &str {
        &self.terminal_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sign `request` and POST it to `path` below the API root.
    ///
    /// A non-2xx status is turned into [`ClientError::Api`] here, so callers
    /// only ever decode bodies of successful exchanges.
    pub(crate) async fn post_request<T>(
        &self,
        path: &str,
        request: &T,
    ) -> Result<reqwest::Response, ClientError>
    where
        T: TokenValues + Serialize,
    {
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        let signed = SignedRequest {
            base: token::sign(request, &self.terminal_key, &self.password),
            body: request,
        };
        let body = serde_json::to_vec(&signed).map_err(ClientError::Encode)?;

        tracing::debug!(%url, "posting acquiring request");

        let resp = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }
        Ok(resp)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("terminal_key", &self.terminal_key)
            .finish_non_exhaustive()
    }
}

/// Read the whole body of `resp` and decode it as `R`.
///
/// `resp` is consumed here; its connection is released when this returns,
/// whether decoding succeeded or not.
pub(crate) async fn decode_response<R: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<R, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = TerminalConfig::new("TinkoffBankTest", "secret")
            .with_base_url(Url::parse("http://localhost:8080/v2").unwrap());
        let client = Client::from_config(&config);
        assert_eq!(client.terminal_key(), "TinkoffBankTest");
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/v2/");
    }

    #[test]
    fn test_debug_hides_password() {
        let client = Client::new("key", "very-secret");
        let debug = format!("{client:?}");
        assert!(debug.contains("key"));
        assert!(!debug.contains("very-secret"));
    }
}

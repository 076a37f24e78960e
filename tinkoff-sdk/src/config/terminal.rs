//! Terminal credentials.

use std::fmt;

use url::Url;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://securepay.tinkoff.ru/v2/";

/// Credentials and endpoint of one acquiring terminal.
#[derive(Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Terminal identifier issued by the bank.
    pub terminal_key: String,
    /// Terminal password, used only as token input.
    pub password: String,
    /// API root. Operation paths are joined below it.
    pub base_url: Url,
}

impl TerminalConfig {
    /// Create a config pointing at the production API.
    pub fn new(terminal_key: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            terminal_key: terminal_key.into(),
            password: password.into(),
            base_url: default_base_url(),
        }
    }

    /// Point the config at another API root (e.g. a test stand).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

impl fmt::Debug for TerminalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalConfig")
            .field("terminal_key", &self.terminal_key)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

/// The production API root as a parsed URL.
pub fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

/// Make sure `url` ends with `/` so relative paths join below it instead of
/// replacing its last segment.
pub fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

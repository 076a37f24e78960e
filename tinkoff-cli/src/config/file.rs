//! TOML file configuration structures.
//!
//! These structs directly map to the `tinkoff.toml` file format.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Terminal credentials section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Terminal identifier issued by the bank. May be left empty and
    /// supplied through `TINKOFF_TERMINAL_KEY` instead.
    #[serde(default)]
    pub key: String,
    /// Terminal password. May be supplied through `TINKOFF_PASSWORD`.
    #[serde(default)]
    pub password: String,
    /// API root; the production API when omitted.
    pub base_url: Option<Url>,
}

/// Values applied to every request unless given on the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub language: Option<String>,
    pub pay_type: Option<String>,
    pub notification_url: Option<String>,
    pub success_url: Option<String>,
    pub fail_url: Option<String>,
}

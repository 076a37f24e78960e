//! Configuration types for the SDK.
//!
//! These are validated runtime values. Reading them from files or the
//! environment is left to the application (see `tinkoff-cli`).

mod terminal;

pub use terminal::{DEFAULT_BASE_URL, TerminalConfig, default_base_url, normalize_base_url};

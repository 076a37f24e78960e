//! Client SDK for the Tinkoff acquiring API.
//!
//! * [`objects`] – request/response types and the shared envelope.
//! * [`token`] – the request token algorithm.
//! * [`config`] – terminal credentials.
//! * `client` (feature `client`, on by default) – the HTTP client.
//!
//! ```ignore
//! use tinkoff_sdk::client::Client;
//! use tinkoff_sdk::objects::init::InitRequest;
//!
//! let client = Client::new("TinkoffBankTest", "password");
//! let mut request = InitRequest::new("order-42", 19200);
//! request.description = Some("Gift card".to_string());
//! let response = client.init(&request).await?;
//! println!("{}", response.payment_url.unwrap_or_default());
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
pub mod token;

//! Request token algorithm for the acquiring API.
//!
//! Every request carries a `Token` field computed as follows:
//!
//! ```text
//! values   = request.values_for_token() + {TerminalKey, Password}
//! token    = hex(SHA-256(concat(values sorted by key)))
//! ```
//!
//! Nested objects (`DATA`, `Receipt`, `Shops`) never participate. An absent
//! field contributes an empty string, which is the same as leaving it out.

use std::collections::BTreeMap;

use crate::objects::{BaseRequest, TokenValues};

/// Key under which the terminal identifier joins the token input.
pub const TERMINAL_KEY_FIELD: &str = "TerminalKey";

/// Key under which the terminal password joins the token input.
pub const PASSWORD_FIELD: &str = "Password";

/// Compute the token from the canonical values of a request.
pub fn generate_token(
    mut values: BTreeMap<&'static str, String>,
    terminal_key: &str,
    password: &str,
) -> String {
    values.insert(TERMINAL_KEY_FIELD, terminal_key.to_owned());
    values.insert(PASSWORD_FIELD, password.to_owned());

    let concatenated: String = values.into_values().collect();
    let digest = ring::digest::digest(&ring::digest::SHA256, concatenated.as_bytes());
    hex::encode(digest.as_ref())
}

/// Build the credential fields for `request`.
pub fn sign<T: TokenValues>(request: &T, terminal_key: &str, password: &str) -> BaseRequest {
    BaseRequest {
        terminal_key: terminal_key.to_owned(),
        token: generate_token(request.values_for_token(), terminal_key, password),
    }
}

/// Check a token received from the provider (e.g. in a notification)
/// against the values it should cover.
pub fn verify_token(
    values: BTreeMap<&'static str, String>,
    terminal_key: &str,
    password: &str,
    token: &str,
) -> bool {
    let expected = generate_token(values, terminal_key, password);
    ring::constant_time::verify_slices_are_equal(
        expected.as_bytes(),
        token.to_ascii_lowercase().as_bytes(),
    )
    .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::init::InitRequest;

    fn documented_values() -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Amount", "19200".to_string()),
            ("OrderId", "21090".to_string()),
            ("Description", "Подарочная карта на 1000 рублей".to_string()),
        ])
    }

    #[test]
    fn test_documented_example() {
        let token = generate_token(documented_values(), "MerchantTerminalKey", "usaf8fw8fsw21g");
        assert_eq!(
            token,
            "0024a00af7c350a3a67ca168ce06502aa72772456662e38696d48b56ee9c97d9"
        );
    }

    #[test]
    fn test_empty_values_do_not_change_token() {
        let mut values = documented_values();
        values.insert("IP", String::new());
        values.insert("FailURL", String::new());
        let token = generate_token(values, "MerchantTerminalKey", "usaf8fw8fsw21g");
        assert_eq!(
            token,
            "0024a00af7c350a3a67ca168ce06502aa72772456662e38696d48b56ee9c97d9"
        );
    }

    #[test]
    fn test_sign_init_request() {
        let mut request = InitRequest::new("21090", 19200);
        request.description = Some("Подарочная карта на 1000 рублей".to_string());
        request.data.insert("Email".to_string(), "a@test.com".to_string());

        let base = sign(&request, "MerchantTerminalKey", "usaf8fw8fsw21g");
        assert_eq!(base.terminal_key, "MerchantTerminalKey");
        assert_eq!(
            base.token,
            "0024a00af7c350a3a67ca168ce06502aa72772456662e38696d48b56ee9c97d9"
        );
    }

    #[test]
    fn test_password_changes_token() {
        let a = generate_token(documented_values(), "MerchantTerminalKey", "one");
        let b = generate_token(documented_values(), "MerchantTerminalKey", "two");
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_verify_token() {
        let token = "0024A00AF7C350A3A67CA168CE06502AA72772456662E38696D48B56EE9C97D9";
        assert!(verify_token(
            documented_values(),
            "MerchantTerminalKey",
            "usaf8fw8fsw21g",
            token
        ));
        assert!(!verify_token(
            documented_values(),
            "MerchantTerminalKey",
            "wrong",
            token
        ));
    }
}

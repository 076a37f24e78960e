//! Request and response types of the acquiring API.
//!
//! Every response shares [`BaseResponse`], composed through
//! `#[serde(flatten)]` and exposed through [`Envelope`]. Every request is
//! sent wrapped in [`SignedRequest`], which adds the [`BaseRequest`] fields.

pub mod due_date;
pub mod init;
pub mod receipt;
pub mod status;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Canonical field values of a request that participate in its token.
///
/// Keys are the wire names. Absent fields map to an empty string, fields the
/// provider excludes from signing are not present at all.
pub trait TokenValues {
    fn values_for_token(&self) -> BTreeMap<&'static str, String>;
}

/// Fields the client adds to every outgoing request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseRequest {
    #[serde(rename = "TerminalKey")]
    pub terminal_key: String,
    #[serde(rename = "Token")]
    pub token: String,
}

/// An operation body together with its credentials, serialized as one flat
/// JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct SignedRequest<'a, T: Serialize> {
    #[serde(flatten)]
    pub base: BaseRequest,
    #[serde(flatten)]
    pub body: &'a T,
}

/// Envelope shared by every response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseResponse {
    #[serde(rename = "TerminalKey")]
    pub terminal_key: String,
    #[serde(rename = "Success")]
    pub success: bool,
    /// `"0"` on success. Some endpoints send it as a JSON number.
    #[serde(rename = "ErrorCode", deserialize_with = "string_or_number")]
    pub error_code: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Details")]
    pub details: String,
}

impl BaseResponse {
    /// The provider-reported failure, present exactly when `Success` is false.
    pub fn error(&self) -> Option<ProviderError> {
        if self.success {
            return None;
        }
        Some(ProviderError {
            code: self.error_code.clone(),
            message: self.message.clone(),
            details: self.details.clone(),
        })
    }
}

/// Access to the common envelope of a response.
pub trait Envelope {
    fn base(&self) -> &BaseResponse;

    fn is_success(&self) -> bool {
        self.base().success
    }

    fn error(&self) -> Option<ProviderError> {
        self.base().error()
    }
}

impl Envelope for BaseResponse {
    fn base(&self) -> &BaseResponse {
        self
    }
}

/// A request the provider answered with `Success: false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request failed with code {code}: {message} {details}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
    pub details: String,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(i64),
        Missing(()),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
        Code::Missing(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_only_when_not_successful() {
        let ok: BaseResponse =
            serde_json::from_str(r#"{"Success":true,"ErrorCode":"0","TerminalKey":"T"}"#).unwrap();
        assert!(ok.is_success());
        assert!(ok.error().is_none());

        let failed: BaseResponse = serde_json::from_str(
            r#"{"Success":false,"ErrorCode":"204","Message":"Неверный токен","Details":"check password"}"#,
        )
        .unwrap();
        let err = failed.error().unwrap();
        assert_eq!(err.code, "204");
        assert_eq!(
            err.to_string(),
            "request failed with code 204: Неверный токен check password"
        );
    }

    #[test]
    fn test_missing_envelope_fields_are_zero() {
        let base: BaseResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(base, BaseResponse::default());
        assert!(base.error().is_some());
    }

    #[test]
    fn test_error_code_accepts_numbers_and_null() {
        let numeric: BaseResponse =
            serde_json::from_str(r#"{"Success":false,"ErrorCode":9999}"#).unwrap();
        assert_eq!(numeric.error_code, "9999");

        let null: BaseResponse =
            serde_json::from_str(r#"{"Success":false,"ErrorCode":null}"#).unwrap();
        assert_eq!(null.error_code, "");
    }

    #[test]
    fn test_signed_request_is_flat() {
        #[derive(Serialize)]
        struct Body {
            #[serde(rename = "OrderId")]
            order_id: &'static str,
        }

        let body = Body { order_id: "42" };
        let signed = SignedRequest {
            base: BaseRequest {
                terminal_key: "Terminal".to_string(),
                token: "abc".to_string(),
            },
            body: &body,
        };
        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"TerminalKey": "Terminal", "Token": "abc", "OrderId": "42"})
        );
    }
}

//! Payment status and pay type values.
//!
//! These are opaque provider tokens. Compare them for equality, never parse
//! them.

/// Payment created, form not opened yet. The only status `Init` may leave.
pub const STATUS_NEW: &str = "NEW";
pub const STATUS_FORM_SHOWED: &str = "FORM_SHOWED";
pub const STATUS_DEADLINE_EXPIRED: &str = "DEADLINE_EXPIRED";
pub const STATUS_CANCELED: &str = "CANCELED";
pub const STATUS_PREAUTHORIZING: &str = "PREAUTHORIZING";
pub const STATUS_AUTHORIZING: &str = "AUTHORIZING";
pub const STATUS_AUTH_FAIL: &str = "AUTH_FAIL";
pub const STATUS_REJECTED: &str = "REJECTED";
pub const STATUS_3DS_CHECKING: &str = "3DS_CHECKING";
pub const STATUS_3DS_CHECKED: &str = "3DS_CHECKED";
/// Funds are held (two-step payments).
pub const STATUS_AUTHORIZED: &str = "AUTHORIZED";
pub const STATUS_REVERSING: &str = "REVERSING";
pub const STATUS_PARTIAL_REVERSED: &str = "PARTIAL_REVERSED";
pub const STATUS_REVERSED: &str = "REVERSED";
pub const STATUS_CONFIRMING: &str = "CONFIRMING";
/// Funds are captured.
pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_REFUNDING: &str = "REFUNDING";
pub const STATUS_PARTIAL_REFUNDED: &str = "PARTIAL_REFUNDED";
pub const STATUS_REFUNDED: &str = "REFUNDED";
pub const STATUS_UNKNOWN: &str = "UNKNOWN";

/// Single-step payment: authorization and capture together.
pub const PAY_TYPE_ONE_STEP: &str = "O";
/// Two-step payment: authorization now, capture with `Confirm` later.
pub const PAY_TYPE_TWO_STEPS: &str = "T";

/// Whether `value` is one of the known pay types.
pub fn is_known_pay_type(value: &str) -> bool {
    value == PAY_TYPE_ONE_STEP || value == PAY_TYPE_TWO_STEPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_type_values() {
        assert!(is_known_pay_type("O"));
        assert!(is_known_pay_type("T"));
        assert!(!is_known_pay_type("o"));
        assert!(!is_known_pay_type(""));
    }
}

//! Fiscal receipt attached to a payment.
//!
//! Receipts are sent verbatim and never take part in the request token.

use serde::{Deserialize, Serialize};

pub const TAXATION_OSN: &str = "osn";
pub const TAXATION_USN_INCOME: &str = "usn_income";
pub const TAXATION_USN_INCOME_OUTCOME: &str = "usn_income_outcome";
pub const TAXATION_ENVD: &str = "envd";
pub const TAXATION_ESN: &str = "esn";
pub const TAXATION_PATENT: &str = "patent";

pub const TAX_NONE: &str = "none";
pub const TAX_VAT0: &str = "vat0";
pub const TAX_VAT10: &str = "vat10";
pub const TAX_VAT20: &str = "vat20";
pub const TAX_VAT110: &str = "vat110";
pub const TAX_VAT120: &str = "vat120";

/// Receipt sent with `Init`.
///
/// The provider requires at least one of `Email` or `Phone`; that rule is
/// left to the remote side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "EmailCompany", skip_serializing_if = "Option::is_none")]
    pub email_company: Option<String>,
    /// One of the `TAXATION_*` values.
    #[serde(rename = "Taxation")]
    pub taxation: String,
    #[serde(rename = "Items", default)]
    pub items: Vec<ReceiptItem>,
}

/// A single receipt line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReceiptItem {
    #[serde(rename = "Name")]
    pub name: String,
    /// Unit price in minor units.
    #[serde(rename = "Price")]
    pub price: u64,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    /// Line total in minor units.
    #[serde(rename = "Amount")]
    pub amount: u64,
    /// One of the `TAX_*` values.
    #[serde(rename = "Tax")]
    pub tax: String,
    #[serde(rename = "PaymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(rename = "PaymentObject", skip_serializing_if = "Option::is_none")]
    pub payment_object: Option<String>,
    #[serde(rename = "Ean13", skip_serializing_if = "Option::is_none")]
    pub ean13: Option<String>,
    #[serde(rename = "ShopCode", skip_serializing_if = "Option::is_none")]
    pub shop_code: Option<String>,
}

impl Receipt {
    pub fn new(taxation: impl Into<String>) -> Self {
        Self {
            taxation: taxation.into(),
            ..Self::default()
        }
    }

    /// Sum of all line amounts, in minor units.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|item| item.amount).sum()
    }
}

impl ReceiptItem {
    /// A line of `quantity` units at `price`, with `Amount` computed from both.
    pub fn new(name: impl Into<String>, price: u64, quantity: f64, tax: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            amount: (price as f64 * quantity).round() as u64,
            tax: tax.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_wire_names() {
        let mut receipt = Receipt::new(TAXATION_USN_INCOME);
        receipt.email = Some("buyer@example.com".to_string());
        receipt.items.push(ReceiptItem::new("Coffee", 15000, 2.0, TAX_VAT20));

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["Email"], "buyer@example.com");
        assert_eq!(json["Taxation"], "usn_income");
        assert!(json.get("Phone").is_none());
        assert_eq!(json["Items"][0]["Name"], "Coffee");
        assert_eq!(json["Items"][0]["Amount"], 30000);
        assert_eq!(json["Items"][0]["Tax"], "vat20");
        assert!(json["Items"][0].get("Ean13").is_none());
    }

    #[test]
    fn test_empty_items_still_serialized() {
        let receipt = Receipt::new(TAXATION_OSN);
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["Items"], serde_json::json!([]));
    }

    #[test]
    fn test_total_sums_lines() {
        let mut receipt = Receipt::new(TAXATION_OSN);
        receipt.items.push(ReceiptItem::new("A", 1000, 1.5, TAX_NONE));
        receipt.items.push(ReceiptItem::new("B", 250, 4.0, TAX_NONE));
        assert_eq!(receipt.total(), 2500);
    }
}

//! `Init`: create a payment and obtain its payment page URL.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::due_date::DueDate;
use super::receipt::Receipt;
use super::{BaseResponse, Envelope, TokenValues};

/// Value of `Recurrent` that registers the payment as the parent of future
/// recurring charges.
pub const RECURRENT_FLAG: &str = "Y";

/// Request payload for `Init`.
///
/// Optional fields left as `None` are omitted from the payload. `DATA` is
/// always sent, as `{}` when empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InitRequest {
    /// Amount in minor currency units. Zero is omitted.
    #[serde(rename = "Amount", default, skip_serializing_if = "is_zero")]
    pub amount: u64,
    /// Order identifier in the merchant's system.
    #[serde(rename = "OrderId")]
    pub order_id: String,
    /// Buyer's IP address.
    #[serde(rename = "IP", skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Payment form language, `ru` or `en`.
    #[serde(rename = "Language", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// [`RECURRENT_FLAG`] or nothing. See [`InitRequest::set_is_recurrent`].
    #[serde(rename = "Recurrent", skip_serializing_if = "Option::is_none")]
    pub recurrent: Option<String>,
    /// Buyer identifier in the merchant's system, needed for saved cards.
    #[serde(rename = "CustomerKey", skip_serializing_if = "Option::is_none")]
    pub customer_key: Option<String>,
    /// Extra provider-defined parameters.
    #[serde(rename = "DATA", default)]
    pub data: HashMap<String, String>,
    #[serde(rename = "Receipt", skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    /// Expiry of the payment link.
    #[serde(rename = "RedirectDueDate", skip_serializing_if = "Option::is_none")]
    pub redirect_due_date: Option<DueDate>,
    #[serde(rename = "NotificationURL", skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(rename = "SuccessURL", skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(rename = "FailURL", skip_serializing_if = "Option::is_none")]
    pub fail_url: Option<String>,
    /// One of the `PAY_TYPE_*` values; the terminal default applies when
    /// omitted.
    #[serde(rename = "PayType", skip_serializing_if = "Option::is_none")]
    pub pay_type: Option<String>,
    /// Revenue split. `Some(vec![])` is sent as `[]`, `None` is omitted.
    #[serde(rename = "Shops", skip_serializing_if = "Option::is_none")]
    pub shops: Option<Vec<Shop>>,
}

/// Revenue split target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shop {
    /// `Submerchant_ID` obtained at partner registration.
    #[serde(rename = "ShopCode", default, skip_serializing_if = "String::is_empty")]
    pub shop_code: String,
    /// Amount in minor units transferred to `ShopCode`, fee excluded.
    #[serde(rename = "Amount", default, skip_serializing_if = "is_zero")]
    pub amount: u64,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Part of the amount or a percentage kept by the merchant. The format
    /// is provider-defined, so it stays text.
    #[serde(rename = "Fee", skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
}

impl InitRequest {
    pub fn new(order_id: impl Into<String>, amount: u64) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            ..Self::default()
        }
    }

    pub fn set_is_recurrent(&mut self, recurrent: bool) {
        self.recurrent = recurrent.then(|| RECURRENT_FLAG.to_string());
    }

    pub fn is_recurrent(&self) -> bool {
        self.recurrent.as_deref() == Some(RECURRENT_FLAG)
    }
}

impl TokenValues for InitRequest {
    fn values_for_token(&self) -> BTreeMap<&'static str, String> {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut values = BTreeMap::from([
            ("OrderId", self.order_id.clone()),
            ("IP", text(&self.client_ip)),
            ("Description", text(&self.description)),
            ("Language", text(&self.language)),
            ("CustomerKey", text(&self.customer_key)),
            (
                "RedirectDueDate",
                self.redirect_due_date
                    .map(|due| due.to_string())
                    .unwrap_or_default(),
            ),
            ("NotificationURL", text(&self.notification_url)),
            ("SuccessURL", text(&self.success_url)),
            ("FailURL", text(&self.fail_url)),
        ]);
        insert_if_non_zero(&mut values, "Amount", self.amount);
        values
    }
}

/// Response of `Init`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InitResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "Amount", default)]
    pub amount: u64,
    #[serde(rename = "OrderId", default)]
    pub order_id: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    /// Documented as `number(20)`, sent as a string.
    #[serde(rename = "PaymentId", default)]
    pub payment_id: String,
    /// Payment page, valid for 24 hours unless `RedirectDueDate` says
    /// otherwise.
    #[serde(rename = "PaymentURL", default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
}

impl Envelope for InitResponse {
    fn base(&self) -> &BaseResponse {
        &self.base
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

fn insert_if_non_zero(
    values: &mut BTreeMap<&'static str, String>,
    key: &'static str,
    value: u64,
) {
    if value != 0 {
        values.insert(key, value.to_string());
    }
}

//! Building an `Init` request from command-line arguments.

use std::collections::HashMap;

use clap::Args;
use time::{Duration, OffsetDateTime};
use tinkoff_sdk::objects::due_date::DueDate;
use tinkoff_sdk::objects::init::InitRequest;

use crate::config::file::DefaultsConfig;

/// Payment parameters shared by the `init` and `token` subcommands.
#[derive(Args, Debug, Clone)]
pub struct PaymentArgs {
    /// Order identifier in the merchant's system
    #[arg(long)]
    pub order_id: String,

    /// Amount in minor currency units (kopecks)
    #[arg(long, default_value_t = 0)]
    pub amount: u64,

    /// Order description shown on the payment form
    #[arg(long)]
    pub description: Option<String>,

    /// Buyer identifier, required for saved cards and recurring payments
    #[arg(long)]
    pub customer_key: Option<String>,

    /// Buyer's IP address
    #[arg(long)]
    pub client_ip: Option<String>,

    /// Register the payment as parent of recurring charges
    #[arg(long)]
    pub recurrent: bool,

    /// Pay type: "O" (one step) or "T" (two steps)
    #[arg(long)]
    pub pay_type: Option<String>,

    /// Payment link lifetime in minutes
    #[arg(long)]
    pub due_in_minutes: Option<i64>,

    /// Extra DATA parameter, repeatable (KEY=VALUE)
    #[arg(long = "data", value_parser = parse_key_value)]
    pub data: Vec<(String, String)>,
}

/// Build the request, filling unset fields from the config defaults.
pub fn build_init_request(
    args: &PaymentArgs,
    defaults: &DefaultsConfig,
    now: OffsetDateTime,
) -> InitRequest {
    let mut request = InitRequest::new(args.order_id.clone(), args.amount);
    request.description = args.description.clone();
    request.customer_key = args.customer_key.clone();
    request.client_ip = args.client_ip.clone();
    request.language = defaults.language.clone();
    request.pay_type = args.pay_type.clone().or_else(|| defaults.pay_type.clone());
    request.notification_url = defaults.notification_url.clone();
    request.success_url = defaults.success_url.clone();
    request.fail_url = defaults.fail_url.clone();
    request.set_is_recurrent(args.recurrent);
    request.redirect_due_date = args
        .due_in_minutes
        .map(|minutes| DueDate(now + Duration::minutes(minutes)));
    request.data = args.data.iter().cloned().collect::<HashMap<_, _>>();
    request
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    if key.is_empty() {
        return Err(format!("empty key in {raw:?}"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn args() -> PaymentArgs {
        PaymentArgs {
            order_id: "order-1".to_string(),
            amount: 1000,
            description: None,
            customer_key: None,
            client_ip: None,
            recurrent: false,
            pay_type: None,
            due_in_minutes: None,
            data: Vec::new(),
        }
    }

    #[test]
    fn test_defaults_fill_unset_fields() {
        let defaults = DefaultsConfig {
            language: Some("en".to_string()),
            pay_type: Some("T".to_string()),
            success_url: Some("https://shop.example/ok".to_string()),
            ..DefaultsConfig::default()
        };
        let request = build_init_request(&args(), &defaults, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(request.order_id, "order-1");
        assert_eq!(request.amount, 1000);
        assert_eq!(request.language.as_deref(), Some("en"));
        assert_eq!(request.pay_type.as_deref(), Some("T"));
        assert_eq!(request.success_url.as_deref(), Some("https://shop.example/ok"));
        assert!(request.recurrent.is_none());
        assert!(request.redirect_due_date.is_none());
    }

    #[test]
    fn test_arguments_override_defaults() {
        let mut args = args();
        args.pay_type = Some("O".to_string());
        args.recurrent = true;
        args.due_in_minutes = Some(30);
        args.data = vec![("Email".to_string(), "a@b.c".to_string())];

        let defaults = DefaultsConfig {
            pay_type: Some("T".to_string()),
            ..DefaultsConfig::default()
        };
        let now = datetime!(2024-05-01 12:00:00 UTC);
        let request = build_init_request(&args, &defaults, now);
        assert_eq!(request.pay_type.as_deref(), Some("O"));
        assert_eq!(request.recurrent.as_deref(), Some("Y"));
        assert_eq!(
            request.redirect_due_date.unwrap().to_string(),
            "2024-05-01T12:30:00+00:00"
        );
        assert_eq!(request.data["Email"], "a@b.c");
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("Phone=+7 900").unwrap(),
            ("Phone".to_string(), "+7 900".to_string())
        );
        assert_eq!(
            parse_key_value("Empty=").unwrap(),
            ("Empty".to_string(), String::new())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }
}

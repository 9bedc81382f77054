//! Request bodies
//!
//! Shape validation only. Amount sign and precision are business rules and
//! are left to `TransferService` so its error precedence holds.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::transfer::TransferRequest;

/// `/authenticate` body
#[derive(Deserialize, ToSchema)]
pub struct AuthRequest {
    #[schema(example = "Owais")]
    pub name: String,
    #[schema(example = "1234")]
    pub pin_number: String,
}

/// `/bank-transfer` body
///
/// `amount` accepts a JSON number (`2000`, `20.5`) or a string (`"20.50"`).
#[derive(Deserialize, ToSchema)]
pub struct BankTransferRequest {
    #[schema(example = "Owais")]
    pub sender_name: String,
    #[schema(example = "1234")]
    pub sender_pin: String,
    #[schema(example = "Danish")]
    pub recipient_name: String,
    #[schema(value_type = String, example = "2000")]
    pub amount: Decimal,
}

impl From<BankTransferRequest> for TransferRequest {
    fn from(body: BankTransferRequest) -> Self {
        TransferRequest::new(
            body.sender_name,
            body.sender_pin,
            body.recipient_name,
            body.amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_number_or_string() {
        let from_num: BankTransferRequest = serde_json::from_str(
            r#"{"sender_name":"Owais","sender_pin":"1234","recipient_name":"Danish","amount":-5}"#,
        )
        .unwrap();
        assert_eq!(from_num.amount, Decimal::new(-5, 0));

        let from_str: BankTransferRequest = serde_json::from_str(
            r#"{"sender_name":"Owais","sender_pin":"1234","recipient_name":"Danish","amount":"20.50"}"#,
        )
        .unwrap();
        assert_eq!(from_str.amount, Decimal::new(2050, 2));
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = serde_json::from_str::<BankTransferRequest>(
            r#"{"sender_name":"Owais","recipient_name":"Danish","amount":1}"#,
        );
        assert!(result.is_err());
    }
}

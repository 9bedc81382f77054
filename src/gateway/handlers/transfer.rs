//! Transfer handlers

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::super::state::AppState;
use super::super::types::{ApiResult, BankTransferRequest, TransferResponseData, ok};
use crate::transfer::TransferRequest;

/// Transfer funds between two accounts
///
/// POST /bank-transfer
#[utoipa::path(
    post,
    path = "/bank-transfer",
    request_body = BankTransferRequest,
    responses(
        (status = 200, description = "Transfer completed", body = TransferResponseData, content_type = "application/json"),
        (status = 400, description = "Invalid amount or insufficient funds"),
        (status = 401, description = "Invalid sender name or PIN"),
        (status = 404, description = "Recipient not found"),
        (status = 422, description = "Malformed request body")
    ),
    tag = "Transfer"
)]
pub async fn bank_transfer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BankTransferRequest>, JsonRejection>,
) -> ApiResult<TransferResponseData> {
    let Json(body) = payload?;
    let req = TransferRequest::from(body);
    let receipt = state.transfer_service.transfer(&req)?;
    ok(TransferResponseData {
        message: receipt.message,
        sender_new_balance: receipt.sender_balance,
        recipient_new_balance: receipt.recipient_balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::types::error_codes;
    use axum::http::StatusCode;
    use rust_decimal::Decimal;

    fn body(
        pin: &str,
        recipient: &str,
        amount: Decimal,
    ) -> Result<Json<BankTransferRequest>, JsonRejection> {
        Ok(Json(BankTransferRequest {
            sender_name: "Owais".to_string(),
            sender_pin: pin.to_string(),
            recipient_name: recipient.to_string(),
            amount,
        }))
    }

    #[tokio::test]
    async fn test_bank_transfer_ok() {
        let state = AppState::for_test();
        let Json(resp) = bank_transfer(
            State(state.clone()),
            body("1234", "Danish", Decimal::new(2000, 0)),
        )
        .await
        .unwrap();
        let data = resp.data.unwrap();
        assert_eq!(
            data.message,
            "Successfully transferred 2000.00 from Owais to Danish."
        );
        assert_eq!(data.sender_new_balance.to_string(), "8000.00");
        assert_eq!(data.recipient_new_balance.to_string(), "7000.00");
    }

    #[tokio::test]
    async fn test_bank_transfer_status_mapping() {
        let cases = [
            (
                body("0000", "Danish", Decimal::new(1, 0)),
                StatusCode::UNAUTHORIZED,
                error_codes::UNAUTHORIZED,
            ),
            (
                body("1234", "Ghost", Decimal::new(1, 0)),
                StatusCode::NOT_FOUND,
                error_codes::RECIPIENT_NOT_FOUND,
            ),
            (
                body("1234", "Danish", Decimal::new(-5, 0)),
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_AMOUNT,
            ),
            (
                body("1234", "Danish", Decimal::new(99_999, 0)),
                StatusCode::BAD_REQUEST,
                error_codes::INSUFFICIENT_FUNDS,
            ),
        ];

        for (payload, status, code) in cases {
            let state = AppState::for_test();
            let err = bank_transfer(State(state.clone()), payload)
                .await
                .unwrap_err();
            assert_eq!(err.status, status);
            assert_eq!(err.code, code);

            let balances: Vec<String> = state
                .transfer_service
                .store()
                .snapshot_all()
                .iter()
                .map(|s| s.balance.to_string())
                .collect();
            assert_eq!(balances, vec!["5000.00", "10000.00"]);
        }
    }

    #[tokio::test]
    async fn test_bank_transfer_malformed_body() {
        let cases: [&[u8]; 3] = [
            br#"{"sender_name":"Owais","sender_pin":"1234","recipient_name":"Danish"}"#,
            br#"{"sender_name":"Owais","sender_pin":"1234","recipient_name":"Danish","amount":"lots"}"#,
            b"{not json",
        ];

        for raw in cases {
            let state = AppState::for_test();
            let payload = Json::<BankTransferRequest>::from_bytes(raw);
            assert!(payload.is_err());

            let err = bank_transfer(State(state.clone()), payload)
                .await
                .unwrap_err();
            assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(err.code, error_codes::INVALID_PARAMETER);
            let owais = state.transfer_service.store().snapshot("Owais").unwrap();
            assert_eq!(owais.balance.to_string(), "10000.00");
        }
    }
}

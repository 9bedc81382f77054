//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8000/docs`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::{HealthResponse, WelcomeResponse};
use crate::gateway::types::{
    AuthRequest, AuthResponseData, BankTransferRequest, TransferResponseData,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PIN Ledger API",
        version = "1.0.0",
        description = "In-memory account ledger: name/PIN authentication and atomic transfers.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::welcome,
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::authenticate,
        crate::gateway::handlers::transfer::bank_transfer,
    ),
    components(
        schemas(
            HealthResponse,
            WelcomeResponse,
            AuthRequest,
            AuthResponseData,
            BankTransferRequest,
            TransferResponseData,
        )
    ),
    tags(
        (name = "Account", description = "Name/PIN authentication and balance"),
        (name = "Transfer", description = "Fund transfers between accounts"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "PIN Ledger API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("PIN Ledger API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let paths = ApiDoc::openapi().paths;
        assert!(paths.paths.contains_key("/"));
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/authenticate"));
        assert!(paths.paths.contains_key("/bank-transfer"));
    }
}

//! RPC fault documents.
//!
//! A failed operation is answered with a fault document instead of an HTTP
//! error status: "Client" faults are the caller's doing (rejected fields,
//! unknown id), "Server" faults are ours.

use serde::{Deserialize, Serialize};
use tracing::error;

use stockroom::ProductId;
use stockroom_app::products::ProductsServiceError;

/// Which side is responsible for the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum FaultCode {
    Client,
    Server,
}

/// The fault document returned in place of an operation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Fault {
    pub faultcode: FaultCode,
    pub faultstring: String,
}

impl Fault {
    pub(crate) fn client(faultstring: impl Into<String>) -> Self {
        Self {
            faultcode: FaultCode::Client,
            faultstring: faultstring.into(),
        }
    }

    pub(crate) fn server(faultstring: impl Into<String>) -> Self {
        Self {
            faultcode: FaultCode::Server,
            faultstring: faultstring.into(),
        }
    }
}

/// Render a service error as the fault the caller sees.
///
/// The id is included in the not-found message when the operation named one.
pub(crate) fn from_service_error(error: ProductsServiceError, id: Option<ProductId>) -> Fault {
    match error {
        ProductsServiceError::Validation(rejection) => Fault::client(rejection.to_string()),
        ProductsServiceError::NotFound => match id {
            Some(id) => Fault::client(format!("Product ID {id} not found")),
            None => Fault::client("Product not found"),
        },
        ProductsServiceError::Unavailable(source) => {
            error!("product store unavailable: {source}");

            Fault::server("product store unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use stockroom::ValidationError;

    use super::*;

    #[test]
    fn validation_rejections_are_client_faults() {
        let fault = from_service_error(
            ProductsServiceError::Validation(ValidationError::InvalidQuantity),
            Some(ProductId::from_i64(1)),
        );

        assert_eq!(fault.faultcode, FaultCode::Client);
        assert_eq!(fault.faultstring, "quantity must be an integer between 0 and 10000");
    }

    #[test]
    fn not_found_names_the_requested_id() {
        let fault = from_service_error(
            ProductsServiceError::NotFound,
            Some(ProductId::from_i64(7)),
        );

        assert_eq!(fault, Fault::client("Product ID 7 not found"));
    }

    #[test]
    fn fault_codes_serialize_as_bare_strings() {
        let fault = Fault::server("boom");

        assert_eq!(
            serde_json::to_value(&fault).ok(),
            Some(serde_json::json!({
                "faultcode": "Server",
                "faultstring": "boom",
            }))
        );
    }
}

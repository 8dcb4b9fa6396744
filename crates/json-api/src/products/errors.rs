//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Validation(rejection) => {
            StatusError::unprocessable_entity().brief(rejection.to_string())
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Unavailable(source) => {
            error!("product store unavailable: {source}");

            StatusError::internal_server_error()
        }
    }
}

//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockroom::{ProductId, ProductPatch};

use crate::{
    extensions::StateExt,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Update Product Request
///
/// Omitted fields keep their stored values; a supplied blank name is
/// rejected rather than ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    /// Replacement name
    #[serde(default)]
    pub name: Option<String>,

    /// Replacement quantity (`stock` accepted for older clients)
    #[serde(default, alias = "stock")]
    pub quantity: Option<i64>,

    /// Replacement price
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        ProductPatch {
            name: request.name,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "products.update", skip(id, json, depot), err)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.app_state()?;
    let id = ProductId::from_i64(id.into_inner());

    let product = state
        .app
        .products
        .update_product(id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_id = %id, "updated product");

    Ok(Json(product.into()))
}

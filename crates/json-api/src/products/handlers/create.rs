//! Create Product Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockroom::ProductFields;

use crate::{
    extensions::StateExt,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Product name, 1-100 characters after trimming
    pub name: String,

    /// Units in stock, 0-10000 (`stock` accepted for older clients)
    #[serde(alias = "stock")]
    pub quantity: i64,

    /// Unit price, 0-1000000
    pub price: f64,
}

impl From<CreateProductRequest> for ProductFields {
    fn from(request: CreateProductRequest) -> Self {
        ProductFields {
            name: request.name,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.app_state()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .map_err(|error| {
            tracing::error!(%error, "failed to set location header");
            StatusError::internal_server_error()
        })?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockroom::ValidationError;
    use stockroom_app::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::products_service;

    use super::{super::tests::make_product, *};

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|fields| {
                *fields
                    == ProductFields {
                        name: "Laptop".to_owned(),
                        quantity: 10,
                        price: 999.99,
                    }
            })
            .return_once(|_| Ok(make_product(1)));

        products.expect_get_product().never();
        products.expect_list_products().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Laptop", "quantity": 10, "price": 999.99 }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/products/1"));
        assert_eq!(body, ProductResponse::from(make_product(1)));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_accepts_stock_as_quantity_alias() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|fields| fields.quantity == 10)
            .return_once(|_| Ok(make_product(1)));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Laptop", "stock": 10, "price": 999.99 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_validation_failure_returns_422() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| {
                Err(ProductsServiceError::Validation(ValidationError::BlankName))
            });

        products.expect_get_product().never();
        products.expect_list_products().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "   ", "quantity": 10, "price": 999.99 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_body_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Laptop" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

//! RPC envelope and handler.
//!
//! One endpoint, four operations. The request names its operation and
//! carries its parameters; the response is either the operation result or
//! a fault document. Faults ride HTTP 200 — only a malformed envelope is a
//! transport-level error.

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use stockroom::{ProductFields, ProductId, ProductPatch, ProductRecord};

use crate::state::State;

pub(crate) mod faults;

use faults::{Fault, from_service_error};

/// An operation request, tagged by operation name.
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", content = "params")]
pub(crate) enum RpcRequest {
    /// Validate and store a new product; answers with the assigned id.
    CreateProduct {
        name: String,
        #[serde(alias = "stock")]
        quantity: i64,
        price: f64,
    },

    /// Fetch a product by id.
    GetProduct { product_id: i64 },

    /// Merge the supplied fields over the stored product; absent fields
    /// keep their stored values.
    UpdateProduct {
        product_id: i64,
        #[serde(default)]
        name: Option<String>,
        #[serde(default, alias = "stock")]
        quantity: Option<i64>,
        #[serde(default)]
        price: Option<f64>,
    },

    /// Remove a product by id.
    DeleteProduct { product_id: i64 },
}

/// A product as the RPC surface renders it.
#[derive(Debug, Serialize)]
pub(crate) struct ProductInfo {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl From<ProductRecord> for ProductInfo {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id.into_i64(),
            name: record.name,
            quantity: record.quantity,
            price: record.price,
        }
    }
}

/// A successful operation's payload.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum RpcResult {
    Id(i64),
    Product(ProductInfo),
    Message(String),
}

/// The response document: exactly one of result or fault.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum RpcReply {
    Success { result: RpcResult },
    Fault { fault: Fault },
}

impl RpcReply {
    fn success(result: RpcResult) -> Self {
        Self::Success { result }
    }

    fn fault(fault: Fault) -> Self {
        Self::Fault { fault }
    }
}

/// RPC Handler
///
/// Dispatches the four product operations.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<RpcReply>, StatusError> {
    let request: RpcRequest = req
        .parse_json()
        .await
        .map_err(|_ignored| StatusError::bad_request().brief("malformed RPC envelope"))?;

    let state = depot
        .obtain::<Arc<State>>()
        .map_err(|_ignored| StatusError::internal_server_error())?;

    let products = &state.app.products;

    let reply = match request {
        RpcRequest::CreateProduct {
            name,
            quantity,
            price,
        } => {
            let fields = ProductFields {
                name,
                quantity,
                price,
            };

            match products.create_product(fields).await {
                Ok(record) => RpcReply::success(RpcResult::Id(record.id.into_i64())),
                Err(error) => RpcReply::fault(from_service_error(error, None)),
            }
        }
        RpcRequest::GetProduct { product_id } => {
            let id = ProductId::from_i64(product_id);

            match products.get_product(id).await {
                Ok(record) => RpcReply::success(RpcResult::Product(record.into())),
                Err(error) => RpcReply::fault(from_service_error(error, Some(id))),
            }
        }
        RpcRequest::UpdateProduct {
            product_id,
            name,
            quantity,
            price,
        } => {
            let id = ProductId::from_i64(product_id);
            let patch = ProductPatch {
                name,
                quantity,
                price,
            };

            match products.update_product(id, patch).await {
                Ok(_updated) => RpcReply::success(RpcResult::Message(format!(
                    "Product ID {id} updated successfully"
                ))),
                Err(error) => RpcReply::fault(from_service_error(error, Some(id))),
            }
        }
        RpcRequest::DeleteProduct { product_id } => {
            let id = ProductId::from_i64(product_id);

            match products.delete_product(id).await {
                Ok(()) => RpcReply::success(RpcResult::Message(format!(
                    "Product ID {id} deleted successfully"
                ))),
                Err(error) => RpcReply::fault(from_service_error(error, Some(id))),
            }
        }
    };

    Ok(Json(reply))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use stockroom::{ProductRecord, ValidationError};
    use stockroom_app::products::{MockProductsService, ProductsServiceError, StoreError};

    use crate::test_helpers::rpc_service;

    use super::*;

    fn laptop(id: i64) -> ProductRecord {
        ProductRecord {
            id: ProductId::from_i64(id),
            name: "Laptop".to_owned(),
            quantity: 10,
            price: 999.99,
        }
    }

    async fn call(products: MockProductsService, envelope: Value) -> (Option<StatusCode>, Value) {
        let mut res = TestClient::post("http://example.com/rpc")
            .json(&envelope)
            .send(&rpc_service(products))
            .await;

        let status = res.status_code;
        let body: Value = res.take_json().await.unwrap_or(Value::Null);

        (status, body)
    }

    #[tokio::test]
    async fn create_product_returns_the_assigned_id() -> TestResult {
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
            .return_once(|_| Ok(laptop(1)));

        let (status, body) = call(
            products,
            json!({
                "operation": "CreateProduct",
                "params": { "name": "Laptop", "quantity": 10, "price": 999.99 },
            }),
        )
        .await;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(body, json!({ "result": 1 }));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_rejection_is_a_client_fault() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::Validation(ValidationError::BlankName))
        });

        let (status, body) = call(
            products,
            json!({
                "operation": "CreateProduct",
                "params": { "name": "   ", "quantity": 10, "price": 999.99 },
            }),
        )
        .await;

        // The fault is the response document, not an HTTP failure.
        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "fault": {
                    "faultcode": "Client",
                    "faultstring": "name must be 1-100 characters after trimming",
                }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_the_full_record() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(1))
            .return_once(|_| Ok(laptop(1)));

        let (status, body) = call(
            products,
            json!({ "operation": "GetProduct", "params": { "product_id": 1 } }),
        )
        .await;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "result": { "id": 1, "name": "Laptop", "quantity": 10, "price": 999.99 }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_names_it_in_the_fault() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let (status, body) = call(
            products,
            json!({ "operation": "GetProduct", "params": { "product_id": 404 } }),
        )
        .await;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "fault": {
                    "faultcode": "Client",
                    "faultstring": "Product ID 404 not found",
                }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_confirms_with_a_message() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|id, patch| {
                *id == ProductId::from_i64(1)
                    && *patch
                        == ProductPatch {
                            name: None,
                            quantity: None,
                            price: Some(1099.99),
                        }
            })
            .return_once(|_, _| {
                Ok(ProductRecord {
                    price: 1099.99,
                    ..laptop(1)
                })
            });

        let (status, body) = call(
            products,
            json!({
                "operation": "UpdateProduct",
                "params": { "product_id": 1, "price": 1099.99 },
            }),
        )
        .await;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(body, json!({ "result": "Product ID 1 updated successfully" }));

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_confirms_with_a_message() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(1))
            .return_once(|_| Ok(()));

        let (status, body) = call(
            products,
            json!({ "operation": "DeleteProduct", "params": { "product_id": 1 } }),
        )
        .await;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(body, json!({ "result": "Product ID 1 deleted successfully" }));

        Ok(())
    }

    #[tokio::test]
    async fn store_failure_is_a_server_fault() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_product().once().return_once(|_| {
            Err(ProductsServiceError::Unavailable(StoreError::Unavailable(
                sqlx_pool_closed(),
            )))
        });

        let (status, body) = call(
            products,
            json!({ "operation": "GetProduct", "params": { "product_id": 1 } }),
        )
        .await;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "fault": {
                    "faultcode": "Server",
                    "faultstring": "product store unavailable",
                }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_operation_is_a_transport_error() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();
        products.expect_get_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let (status, _body) = call(
            products,
            json!({ "operation": "DropTable", "params": {} }),
        )
        .await;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    fn sqlx_pool_closed() -> sqlx::Error {
        sqlx::Error::PoolClosed
    }
}

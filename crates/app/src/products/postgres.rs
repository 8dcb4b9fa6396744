//! Postgres-backed product store.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow, query, query_as};
use stockroom::{NewProduct, ProductId, ProductRecord};

use crate::products::store::{ProductStore, StoreError};

const CREATE_PRODUCTS_TABLE_SQL: &str = include_str!("sql/create_products_table.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const REPLACE_PRODUCT_SQL: &str = include_str!("sql/replace_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the products table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when executing the bootstrap statement fails.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
        query(CREATE_PRODUCTS_TABLE_SQL).execute(pool).await?;

        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: NewProduct) -> Result<ProductRecord, StoreError> {
        let row = query_as::<_, ProductRow>(INSERT_PRODUCT_SQL)
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn get(&self, id: ProductId) -> Result<ProductRecord, StoreError> {
        let row = query_as::<_, ProductRow>(GET_PRODUCT_SQL)
            .bind(id.into_i64())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let rows = query_as::<_, ProductRow>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProductRow::into).collect())
    }

    async fn replace(&self, product: ProductRecord) -> Result<ProductRecord, StoreError> {
        let row = query_as::<_, ProductRow>(REPLACE_PRODUCT_SQL)
            .bind(product.id.into_i64())
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(id.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

/// Raw products row; widths match the table columns.
#[derive(Debug)]
struct ProductRow {
    id: i64,
    name: String,
    quantity: i32,
    price: f64,
}

impl<'r> FromRow<'r, PgRow> for ProductRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get("price")?,
        })
    }
}

impl From<ProductRow> for ProductRecord {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::from_i64(row.id),
            name: row.name,
            quantity: row.quantity,
            price: row.price,
        }
    }
}

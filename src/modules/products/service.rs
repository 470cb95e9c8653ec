use sqlx::PgPool;
use tracing::instrument;

use stockdesk_core::AppError;

use super::model::Product;

pub struct ProductService;

impl ProductService {
    #[instrument(skip(db))]
    pub async fn list_products(db: &PgPool) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, created_at FROM products ORDER BY name",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(products)
    }
}

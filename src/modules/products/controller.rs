use axum::Json;
use axum::extract::State;
use tracing::instrument;

use stockdesk_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::model::Product;
use super::service::ProductService;

/// List the product catalog
///
/// Idempotent read; responses are served through the read-through cache
/// keyed on handler name + path.
#[utoipa::path(
    get,
    path = "/products",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 401, description = "Token is invalid or expired")
    ),
    tag = "Product"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_products(
    _auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list_products(&state.db).await?;
    Ok(Json(products))
}

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use stockdesk_auth::Claims;

use crate::modules::cache::model::{
    AddCacheEntryRequest, CacheListResponse, CacheMessageResponse, FingerprintRequest,
};
use crate::modules::products::model::Product;
use crate::modules::users::controller::ErrorResponse;
use crate::modules::users::model::{
    HealthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::login_user,
        crate::modules::users::controller::validate_token,
        crate::modules::users::controller::db_healthcheck,
        crate::modules::products::controller::list_products,
        crate::modules::cache::controller::list_cache,
        crate::modules::cache::controller::add_to_cache,
        crate::modules::cache::controller::delete_from_cache,
        crate::modules::cache::controller::delete_fingerprint,
        crate::modules::cache::controller::clear_cache,
    ),
    components(
        schemas(
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            HealthResponse,
            Claims,
            Product,
            CacheListResponse,
            AddCacheEntryRequest,
            FingerprintRequest,
            CacheMessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "User", description = "Registration, login, and token validation"),
        (name = "Product", description = "Product catalog reads"),
        (name = "Cache", description = "Administrative cache operations")
    ),
    info(
        title = "Stockdesk API",
        version = "0.1.0",
        description = "Inventory and vendor management backend with JWT authentication and a Redis response cache.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

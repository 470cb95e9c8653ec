use dotenvy::dotenv;

use stockdesk::logging::init_tracing;
use stockdesk::router::init_router;
use stockdesk::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8081").await.unwrap();
    println!("🚀 Server running on http://localhost:8081");
    println!("📚 Swagger UI available at http://localhost:8081/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:8081/scalar");
    // Peer addresses feed the per-IP rate limiter.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .unwrap();
}

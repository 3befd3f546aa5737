mod health;
mod message;

pub fn create_router() -> axum::Router {
    // Any origin, any method, any header: the service is meant to be called
    // from browser frontends hosted elsewhere during local development.
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    axum::Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .route("/api/message", axum::routing::get(message::get_message))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

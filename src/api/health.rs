pub(super) async fn health_check() -> impl axum::response::IntoResponse {
    axum::Json(crate::models::HealthStatus::healthy())
}

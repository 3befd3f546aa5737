pub(super) async fn get_message() -> impl axum::response::IntoResponse {
    axum::Json(crate::models::Greeting::from_backend())
}

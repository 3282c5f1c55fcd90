use axum::http::StatusCode;

pub async fn handle() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Welcome home!")
}

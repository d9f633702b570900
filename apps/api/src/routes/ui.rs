use axum::response::Html;

/// GET /
/// The single-page UI, compiled into the binary.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../../../assets/index.html");

/// Upload / capture page. It posts to `/api/analyze` and shows the model's
/// answer with its markdown emphasis and bullets rendered.
pub async fn get_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

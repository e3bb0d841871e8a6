use axum::response::Html;

/// Upload form markup, embedded at compile time.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
///
/// Serve the upload form. The form posts `multipart/form-data` to
/// `/obfuscate` with `file`, `script` and `filename` fields.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

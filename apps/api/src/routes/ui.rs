use axum::response::Html;

/// GET /
/// Serves the single-page UI: one text box and the Evaluate / Optimize /
/// Compare buttons. The page is embedded at compile time — there is nothing
/// else to deploy.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

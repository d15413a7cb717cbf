//! Serves the browser client.
//!
//! The page itself is static; its one setting, the API base URL, is rendered
//! into `/config.js` from [`AppConfig::api_prefix`](crate::config::AppConfig).

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

/// Body of `/config.js`
pub fn client_config_script(api_base_url: &str) -> String {
    // serde_json produces a correctly escaped JS string literal
    let url = serde_json::to_string(api_base_url).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.INVENTORY_CONFIG = {{ apiBaseUrl: {} }};\n", url)
}

async fn client_config(State(api_base_url): State<String>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        client_config_script(&api_base_url),
    )
        .into_response()
}

/// Router for `/config.js` plus every file under `client_dir`.
pub fn client_routes<S>(client_dir: &str, api_base_url: String) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/config.js", get(client_config))
        .with_state(api_base_url)
        .fallback_service(ServeDir::new(client_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_script_embeds_base_url() {
        assert_eq!(
            client_config_script("/api/products"),
            "window.INVENTORY_CONFIG = { apiBaseUrl: \"/api/products\" };\n"
        );
    }

    #[test]
    fn config_script_escapes_quotes() {
        let script = client_config_script("/a\"b");
        assert!(script.contains(r#""/a\"b""#));
    }
}

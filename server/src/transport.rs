// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Transport layer for the server, mapping HTTP routes onto handlers.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tracing::{info, warn};

use crate::AppState;
use crate::handlers::{chat_http, health_http};

/// Build the CORS layer for the configured origins.
///
/// Returns `None` when no origins are configured, which leaves CORS disabled.
/// `*` allows every origin but cannot be combined with credentials; an
/// explicit list allows credentials and mirrors the requested methods and
/// headers.
pub fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<&str> = origins
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .collect();

    if origins.is_empty() {
        return None;
    }

    if origins.contains(&"*") {
        info!("CORS enabled for any origin");
        return Some(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Ignoring invalid CORS origin `{origin}`: {err}");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        warn!("No valid CORS origins configured, CORS stays disabled");
        return None;
    }

    info!(?origins, "CORS enabled");
    Some(
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    )
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let router = Router::new()
        .route("/chat", post(chat_http))
        .route("/health", get(health_http));

    let router = match cors {
        Some(layer) => router.layer(layer),
        None => router,
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origins(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn cors_disabled_by_default() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&origins(&["", "  "])).is_none());
    }

    #[test]
    fn cors_enabled_for_origins() {
        assert!(cors_layer(&origins(&["*"])).is_some());
        assert!(cors_layer(&origins(&["http://localhost:3000", "https://example.com"])).is_some());
    }

    #[test]
    fn cors_skips_invalid_origins() {
        assert!(cors_layer(&origins(&["bad\norigin"])).is_none());
        assert!(cors_layer(&origins(&["bad\norigin", "http://localhost:3000"])).is_some());
    }
}

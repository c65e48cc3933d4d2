//! Router assembly: animal routes under the API prefix plus common routes and layers.

mod animals;
mod common;

pub use animals::animal_routes;
pub use common::{common_routes_with_ready, docs_routes};

use crate::config::ServiceConfig;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Reads may be called cross-origin; writes stay same-origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}

/// Full application router. Animal routes are nested under `state.api_base`.
pub fn build_router(state: AppState, config: &ServiceConfig) -> Router {
    let base = state.api_base.trim_end_matches('/').to_string();
    let animals = animal_routes(state.clone()).layer(cors_layer(&config.cors_origins));
    let api = if base.is_empty() {
        animals
    } else {
        Router::new().nest(&base, animals)
    };
    Router::new()
        .merge(common_routes_with_ready(state))
        .merge(docs_routes(&base))
        .merge(api)
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}

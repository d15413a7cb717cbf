//! Simple Inventory
//!
//! In-memory grocery product inventory exposed as a REST API, plus the
//! browser page that drives it.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod frontend;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::Router;
use std::sync::Arc;
use std::time::SystemTime;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::repositories::{InMemoryProductRepository, ProductRepository};
use crate::services::ProductService;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub product_service: ProductService,
    pub started_at: SystemTime,
}

impl AppState {
    pub fn new(config: AppConfig, repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            config,
            product_service: ProductService::new(repository),
            started_at: SystemTime::now(),
        }
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(config, Arc::new(InMemoryProductRepository::new()))
    }
}

/// CORS policy derived from configuration.
///
/// Explicit origins win; otherwise permissive when allowed, else cross-origin
/// calls are refused.
pub fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let origins = cfg.cors_origins();
    if !origins.is_empty() && !cfg.cors_allow_any_origin {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if cfg.should_allow_permissive_cors() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}

/// Full application router: product API, health, optional Swagger UI and client
pub fn app_router(state: AppState) -> Router {
    let cfg = state.config.clone();

    let mut app = Router::<AppState>::new()
        .nest(&cfg.api_prefix, handlers::products::products_router())
        .nest("/health", health::health_routes());

    if cfg.swagger_enabled() {
        app = app.merge(openapi::swagger_ui(&cfg.api_prefix));
    }

    if cfg.serve_client {
        app = app.merge(frontend::client_routes(
            &cfg.client_dir,
            cfg.api_prefix.clone(),
        ));
    }

    app.layer(crate::tracing::configure_http_tracing())
        .layer(cors_layer(&cfg))
        // Outermost so the trace span and error bodies see the request id
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}

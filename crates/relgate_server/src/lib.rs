//! # Relgate Server
//!
//! The axum-based gateway implementation.
//!
//! Provides the [`GatewayServer`] builder, which ties together a release
//! source and the gateway configuration to serve two kinds of responses:
//! aggregated `SHA256SUMS` manifests, and 302 redirects from asset
//! filenames to versioned release downloads.
//!
//! ## Example
//!
//! ```no_run
//! use relgate_server::prelude::*;
//! use relgate_source_mock::StaticReleaseSource;
//!
//! # async fn run() {
//! let source = StaticReleaseSource::new(vec![]);
//!
//! let app = GatewayServer::default().build(source);
//! # }
//! ```

mod api;

pub mod cache;
pub mod config;
pub mod state;

use axum::{Router, routing::get};
use relgate_core::traits::ReleaseSource;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use cache::ManifestCache;
use config::GatewayConfig;
use state::AppState;

/// The builder for the gateway server.
#[derive(Clone, Debug, Default)]
pub struct GatewayServer {
    config: GatewayConfig,
}

impl GatewayServer {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    pub fn build<S: ReleaseSource>(self, source: S) -> Router {
        let state = AppState {
            source,
            cache: ManifestCache::new(),
            config: Arc::new(self.config),
        };

        Router::new()
            .route("/{*path}", get(api::route_request))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

pub mod prelude {
    pub use crate::GatewayServer;
    pub use crate::cache::*;
    pub use crate::config::*;
    pub use crate::state::*;
}

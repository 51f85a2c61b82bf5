//! # Relgate
//!
//! A tiny download gateway for GitHub release assets: filename-based
//! requests become 302 redirects to versioned release downloads, and
//! `SHA256SUMS` requests serve an aggregated checksum manifest built from
//! the release listing.
//!
//! This crate serves as an entry point, re-exporting the core types and
//! optionally including the server and source implementations via feature
//! flags.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | **`server`** | Includes the axum-based gateway implementation (`relgate_server`). |
//! | **`github`** | Release source backed by the GitHub releases API (`relgate_github`). |
//! | **`mock_source`** | In-memory release source for development and testing (`relgate_source_mock`). |
//!
//! ## Example: Serving the gateway
//!
//! ```toml
//! [dependencies]
//! relgate = { version = "0.1", features = ["server", "github"] }
//! ```
//!
//! ```rust,ignore
//! use relgate::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = GatewayServer::default().build(GithubReleaseSource::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:1002").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub use relgate_core::*;

#[cfg(feature = "server")]
pub mod server {
    pub use relgate_server::*;
}

#[cfg(feature = "github")]
pub mod github {
    pub use relgate_github::*;
}

#[cfg(feature = "mock_source")]
pub mod source_mock {
    pub use relgate_source_mock::*;
}

pub mod prelude {
    pub use relgate_core::prelude::*;

    #[cfg(feature = "server")]
    pub use relgate_server::prelude::*;

    #[cfg(feature = "github")]
    pub use relgate_github::GithubReleaseSource;

    #[cfg(feature = "mock_source")]
    pub use relgate_source_mock::StaticReleaseSource;
}

//! # Relgate Core
//!
//! Types and pure logic for the release gateway.
//!
//! Defines the vocabulary shared by the server and the upstream backends:
//!
//! - **[`RepoId`](repo::RepoId)**: the `owner/name` pair identifying an upstream release repository.
//! - **[`Release`](release::Release)**: the wire shape of one upstream release and its assets.
//! - **[`ReleaseSource`](traits::ReleaseSource)**: trait for implementing release-listing backends.
//! - **[`parse_version`](version::parse_version)**: filename to version-string extraction.

pub mod error;
pub mod release;
pub mod repo;
pub mod traits;
pub mod version;

pub mod prelude {
    pub use super::error::*;
    pub use super::release::*;
    pub use super::repo::*;
    pub use super::traits::*;
    pub use super::version::*;
}

//! # Relgate Source Mock
//!
//! An in-memory [`ReleaseSource`] for development and testing.
//!
//! Serves a fixed release list for every repository and counts fetches, so
//! tests can assert how often the gateway actually reached upstream.
//!
//! ## Usage
//!
//! ```rust
//! # use relgate_source_mock::StaticReleaseSource;
//! let source = StaticReleaseSource::new(vec![]);
//! assert_eq!(source.fetch_count(), 0);
//! ```

use relgate_core::prelude::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Default)]
pub struct StaticReleaseSource {
    releases: Arc<Vec<Release>>,
    fetches: Arc<AtomicUsize>,
}

impl StaticReleaseSource {
    pub fn new(releases: Vec<Release>) -> Self {
        Self {
            releases: Arc::new(releases),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `fetch_releases` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ReleaseSource for StaticReleaseSource {
    async fn fetch_releases(&self, _repo: &RepoId) -> Result<Vec<Release>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.releases.as_ref().clone())
    }
}

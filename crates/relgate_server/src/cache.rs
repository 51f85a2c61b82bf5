//! Per-repository manifest cache.

use relgate_core::prelude::*;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-lifetime cache of rendered checksum manifests, keyed by
/// repository.
///
/// The map lock is held across the upstream fetch, so concurrent first
/// requests for a repository collapse into a single listing call. Entries
/// are never invalidated; a failed fetch leaves the map untouched and the
/// next request retries.
#[derive(Clone, Default)]
pub struct ManifestCache {
    entries: Arc<Mutex<HashMap<RepoId, String>>>,
}

impl ManifestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the manifest for `repo`, fetching and rendering it on first
    /// use.
    pub async fn get_or_fetch<S: ReleaseSource>(
        &self,
        source: &S,
        repo: &RepoId,
    ) -> Result<String, SourceError> {
        let mut entries = self.entries.lock().await;
        if let Some(manifest) = entries.get(repo) {
            return Ok(manifest.clone());
        }

        let releases = source.fetch_releases(repo).await?;
        let manifest = render_manifest(&releases);
        entries.insert(repo.clone(), manifest.clone());
        Ok(manifest)
    }
}

use crate::error::SourceError;
use crate::release::Release;
use crate::repo::RepoId;

/// A trait for injecting the upstream release listing into the gateway.
pub trait ReleaseSource: Send + Sync + 'static + Clone {
    /// Lists the releases of the given repository, newest first as the
    /// upstream orders them.
    fn fetch_releases(
        &self,
        repo: &RepoId,
    ) -> impl Future<Output = Result<Vec<Release>, SourceError>> + Send;
}

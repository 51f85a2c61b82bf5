use std::fmt;

/// An `owner/name` pair identifying an upstream release repository.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Splits a leading `owner/name/` off a slash-separated request path.
    ///
    /// Returns the repository and the remaining asset path, or `None` when
    /// the path does not carry two non-empty leading segments followed by a
    /// non-empty rest.
    pub fn split_path(path: &str) -> Option<(Self, &str)> {
        let (owner, rest) = path.split_once('/')?;
        let (name, asset) = rest.split_once('/')?;
        if owner.is_empty() || name.is_empty() || asset.is_empty() {
            return None;
        }
        Some((Self::new(owner, name), asset))
    }

    /// Derives the repository from a canonical repository URL by taking its
    /// last two non-empty path segments, e.g.
    /// `https://github.com/acme/widget` becomes `acme/widget`.
    pub fn from_repo_url(url: &str) -> Option<Self> {
        let mut segments = url.rsplit('/').filter(|s| !s.is_empty());
        let name = segments.next()?;
        let owner = segments.next()?;
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_namespaced_paths() {
        let (repo, asset) = RepoId::split_path("acme/widget/widget_1.0.tar.gz").unwrap();
        assert_eq!(repo, RepoId::new("acme", "widget"));
        assert_eq!(asset, "widget_1.0.tar.gz");
    }

    #[test]
    fn keeps_nested_asset_paths_intact() {
        let (repo, asset) = RepoId::split_path("acme/widget/nested/file.raw").unwrap();
        assert_eq!(repo, RepoId::new("acme", "widget"));
        assert_eq!(asset, "nested/file.raw");
    }

    #[test]
    fn rejects_paths_without_a_repository() {
        assert!(RepoId::split_path("SHA256SUMS").is_none());
        assert!(RepoId::split_path("acme/widget").is_none());
        assert!(RepoId::split_path("acme//file").is_none());
        assert!(RepoId::split_path("/widget/file").is_none());
        assert!(RepoId::split_path("acme/widget/").is_none());
        assert!(RepoId::split_path("").is_none());
    }

    #[test]
    fn derives_repository_from_url() {
        let repo = RepoId::from_repo_url("https://github.com/acme/widget").unwrap();
        assert_eq!(repo, RepoId::new("acme", "widget"));

        let repo = RepoId::from_repo_url("https://github.com/acme/widget/").unwrap();
        assert_eq!(repo, RepoId::new("acme", "widget"));
    }

    #[test]
    fn displays_as_owner_slash_name() {
        assert_eq!(RepoId::new("acme", "widget").to_string(), "acme/widget");
    }
}

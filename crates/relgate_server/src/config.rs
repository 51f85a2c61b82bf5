//! Gateway configuration, read once at startup from an os-release style
//! key-value file and shared immutably into the router state.

use relgate_core::repo::RepoId;

use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Key carrying the canonical upstream repository URL.
pub const GITHUB_URL_KEY: &str = "MANGOS_GITHUB_URL";

/// Key carrying the fallback base URL for unmatched paths.
pub const SERVE_URL_KEY: &str = "MKOSI_SERVE_URL";

/// Repository served when no canonical URL is configured.
const DEFAULT_REPO: (&str, &str) = ("Mastercard", "mangos");

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Repository serving non-namespaced requests.
    pub default_repo: RepoId,
    /// Redirect base for paths carrying no repository. When unset those
    /// paths are served from the default repository instead.
    pub fallback_base: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            default_repo: RepoId::new(DEFAULT_REPO.0, DEFAULT_REPO.1),
            fallback_base: None,
        }
    }
}

impl GatewayConfig {
    /// Builds the configuration from parsed key-value pairs.
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Self {
        let default_repo = pairs
            .get(GITHUB_URL_KEY)
            .and_then(|url| RepoId::from_repo_url(url))
            .unwrap_or_else(|| RepoId::new(DEFAULT_REPO.0, DEFAULT_REPO.1));

        let fallback_base = pairs
            .get(SERVE_URL_KEY)
            .map(|url| url.trim_end_matches('/').to_string());

        Self {
            default_repo,
            fallback_base,
        }
    }

    /// Reads and parses an os-release style file.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_pairs(&parse_key_values(&text)))
    }
}

/// Parses `KEY=VALUE` lines: split on the first `=`, keys and values
/// trimmed, surrounding double quotes stripped from values. Comment lines
/// and lines without `=` are ignored.
pub fn parse_key_values(text: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            pairs.insert(
                key.trim().to_string(),
                value.trim().trim_matches('"').to_string(),
            );
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_lines() {
        let text = r#"
            # a comment
            NAME="mangOS"
            MANGOS_GITHUB_URL=https://github.com/acme/widget
            ID=mangos
            garbage line
        "#;

        let pairs = parse_key_values(text);
        assert_eq!(pairs["NAME"], "mangOS");
        assert_eq!(pairs["MANGOS_GITHUB_URL"], "https://github.com/acme/widget");
        assert_eq!(pairs["ID"], "mangos");
        assert!(!pairs.contains_key("garbage line"));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let pairs = parse_key_values("MKOSI_SERVE_URL=http://host:8081/base?a=b");
        assert_eq!(pairs["MKOSI_SERVE_URL"], "http://host:8081/base?a=b");
    }

    #[test]
    fn derives_default_repository_from_url() {
        let mut pairs = HashMap::new();
        pairs.insert(
            GITHUB_URL_KEY.to_string(),
            "https://github.com/acme/widget".to_string(),
        );

        let config = GatewayConfig::from_pairs(&pairs);
        assert_eq!(config.default_repo, RepoId::new("acme", "widget"));
        assert_eq!(config.fallback_base, None);
    }

    #[test]
    fn falls_back_to_builtin_repository() {
        let config = GatewayConfig::from_pairs(&HashMap::new());
        assert_eq!(config.default_repo, RepoId::new("Mastercard", "mangos"));
    }

    #[test]
    fn trims_trailing_slash_off_fallback_base() {
        let mut pairs = HashMap::new();
        pairs.insert(
            SERVE_URL_KEY.to_string(),
            "http://mkosi.local:8081/".to_string(),
        );

        let config = GatewayConfig::from_pairs(&pairs);
        assert_eq!(
            config.fallback_base.as_deref(),
            Some("http://mkosi.local:8081")
        );
    }
}

use serde::Deserialize;

/// Digest prefix marking a SHA-256 digest on the release listing.
const SHA256_PREFIX: &str = "sha256:";

/// Name suffix of detached signature bundles. Those are not downloadable
/// artifacts in their own right and never appear in a manifest.
const SIGBUNDLE_SUFFIX: &str = "sigbundle";

/// One release as returned by the release-listing API.
///
/// Unknown fields (tag names, timestamps, upload metadata) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// One downloadable file attached to a release.
#[derive(Clone, Debug, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    /// Algorithm-prefixed digest, e.g. `sha256:<hex>`. May be null or
    /// absent upstream.
    #[serde(default)]
    pub digest: Option<String>,
}

/// Renders the aggregated `SHA256SUMS` manifest for a release listing.
///
/// One `<hexdigest> *<name>` line per asset, releases outer, assets inner,
/// in upstream order. Signature bundles and assets without a `sha256:`
/// digest are omitted.
pub fn render_manifest(releases: &[Release]) -> String {
    let mut manifest = String::new();
    for release in releases {
        for asset in &release.assets {
            if asset.name.ends_with(SIGBUNDLE_SUFFIX) {
                continue;
            }
            let Some(hex) = asset
                .digest
                .as_deref()
                .and_then(|digest| digest.strip_prefix(SHA256_PREFIX))
            else {
                continue;
            };
            manifest.push_str(hex);
            manifest.push_str(" *");
            manifest.push_str(&asset.name);
            manifest.push('\n');
        }
    }
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str, digest: Option<&str>) -> ReleaseAsset {
        ReleaseAsset {
            name: name.to_string(),
            digest: digest.map(str::to_string),
        }
    }

    #[test]
    fn renders_lines_across_releases() {
        let releases = vec![
            Release {
                assets: vec![
                    asset("os_1.2.3.raw.gz", Some("sha256:aa11")),
                    asset("os_1.2.3.efi", Some("sha256:bb22")),
                ],
            },
            Release {
                assets: vec![asset("os_1.0.0.raw.gz", Some("sha256:cc33"))],
            },
        ];

        assert_eq!(
            render_manifest(&releases),
            "aa11 *os_1.2.3.raw.gz\nbb22 *os_1.2.3.efi\ncc33 *os_1.0.0.raw.gz\n"
        );
    }

    #[test]
    fn skips_signature_bundles() {
        let releases = vec![Release {
            assets: vec![
                asset("os_1.2.3.raw.gz", Some("sha256:aa11")),
                asset("os_1.2.3.raw.gz.sigbundle", Some("sha256:bb22")),
            ],
        }];

        assert_eq!(render_manifest(&releases), "aa11 *os_1.2.3.raw.gz\n");
    }

    #[test]
    fn skips_assets_without_a_sha256_digest() {
        let releases = vec![Release {
            assets: vec![
                asset("a.raw", Some("md5:aa11")),
                asset("b.raw", None),
                asset("c.raw", Some("sha256:cc33")),
            ],
        }];

        assert_eq!(render_manifest(&releases), "cc33 *c.raw\n");
    }

    #[test]
    fn empty_listing_renders_empty_manifest() {
        assert_eq!(render_manifest(&[]), "");
        assert_eq!(render_manifest(&[Release { assets: vec![] }]), "");
    }

    #[test]
    fn decodes_release_listing_json() {
        let json = r#"[
            {
                "tag_name": "v1.2.3",
                "draft": false,
                "assets": [
                    {"name": "os_1.2.3.raw.gz", "digest": "sha256:aa11", "size": 4},
                    {"name": "os_1.2.3.raw.gz.sigbundle", "digest": null}
                ]
            },
            {"tag_name": "v1.0.0"}
        ]"#;

        let releases: Vec<Release> = serde_json::from_str(json).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].assets.len(), 2);
        assert_eq!(releases[0].assets[0].digest.as_deref(), Some("sha256:aa11"));
        assert_eq!(releases[0].assets[1].digest, None);
        assert!(releases[1].assets.is_empty());

        assert_eq!(render_manifest(&releases), "aa11 *os_1.2.3.raw.gz\n");
    }
}

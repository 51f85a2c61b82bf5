//! Extracts the release version from an asset filename.
//!
//! Asset names follow the `product_<version><suffixes>` convention, where
//! the suffixes stack: a compression suffix over a format extension over an
//! optional partition-role suffix. Stripping walks that stack outside-in,
//! removing at most one suffix per step.

/// Compression suffixes, stripped before the format extension.
const COMPRESSION_SUFFIXES: [&str; 2] = [".gz", ".zst"];

/// Format extensions, stripped after compression. First match wins.
const FORMAT_SUFFIXES: [&str; 7] = [
    ".tar",
    ".efi",
    ".cyclonedx.json",
    ".github.json",
    ".raw",
    ".spdx.json",
    ".syft.json",
];

/// Partition-role suffixes preceding a 32-character image identifier,
/// longest first.
const PARTITION_ROLES: [&str; 3] = [
    ".root-x86-64-verity-sig",
    ".root-x86-64-verity",
    ".root-x86-64",
];

/// Extracts the version string from an asset filename.
///
/// Total over arbitrary input: a name without the expected structure still
/// produces a best-effort result rather than an error. In particular a name
/// without `_` is used whole as the working string.
pub fn parse_version(filename: &str) -> String {
    let mut version = match filename.split_once('_') {
        Some((_, rest)) => rest,
        None => filename,
    };

    version = strip_one(version, &[".sigbundle"]);
    version = strip_one(version, &COMPRESSION_SUFFIXES);
    version = strip_one(version, &FORMAT_SUFFIXES);
    version = strip_partition_suffix(version);

    version.to_string()
}

/// Removes the first matching suffix, if any.
fn strip_one<'a>(s: &'a str, suffixes: &[&str]) -> &'a str {
    for suffix in suffixes {
        if let Some(stripped) = s.strip_suffix(suffix) {
            return stripped;
        }
    }
    s
}

/// Removes a trailing `.root-x86-64[-verity[-sig]].<id>` partition suffix,
/// where `<id>` is exactly 32 characters of `[a-z0-9]`.
fn strip_partition_suffix(s: &str) -> &str {
    let Some((head, id)) = s.rsplit_once('.') else {
        return s;
    };
    if id.len() != 32
        || !id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        return s;
    }
    for role in PARTITION_ROLES {
        if let Some(stripped) = head.strip_suffix(role) {
            return stripped;
        }
    }
    s
}

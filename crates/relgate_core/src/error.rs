use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport-level failure reaching the release listing.
    /// Maps to **HTTP 502 Bad Gateway**.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The release listing answered with a non-success status.
    /// Maps to **HTTP 502 Bad Gateway**.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The release listing body did not decode as expected.
    /// Maps to **HTTP 502 Bad Gateway**.
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

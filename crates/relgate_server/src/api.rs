use crate::state::AppState;

use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use relgate_core::prelude::*;
use tracing::error;

pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some(err) = self.0.downcast_ref::<SourceError>() {
            error!("upstream fetch failed: {:?}", self.0);
            return (StatusCode::BAD_GATEWAY, err.to_string()).into_response();
        }

        error!("Internal Server Error: {:?}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
            .into_response()
    }
}

/// Path suffix selecting the aggregated checksum manifest.
const SUMS_SUFFIX: &str = "SHA256SUMS";

/// GET /{*path}
///
/// The gateway's single entry point: picks the repository off the path,
/// then serves either the checksum manifest or a versioned download
/// redirect. Paths that carry no repository either go to the configured
/// fallback or are served from the default repository.
pub async fn route_request<S: ReleaseSource>(
    State(state): State<AppState<S>>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let path = uri.path().trim_start_matches('/');

    let (repo, asset) = match RepoId::split_path(path) {
        Some((repo, asset)) => (repo, asset),
        None => {
            if let Some(base) = &state.config.fallback_base {
                return Ok(redirect(format!("{base}/{path}")));
            }
            (state.config.default_repo.clone(), path)
        }
    };

    if asset.ends_with(SUMS_SUFFIX) {
        let manifest = state.cache.get_or_fetch(&state.source, &repo).await?;
        return Ok(manifest_response(manifest));
    }

    let filename = match asset.rsplit_once('/') {
        Some((_, filename)) => filename,
        None => asset,
    };
    let version = parse_version(filename);
    let location = format!("https://github.com/{repo}/releases/download/v{version}/{filename}");
    Ok(redirect(location))
}

/// 302 with an explicit zero-length body.
fn redirect(location: String) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (header::CONTENT_LENGTH, "0".to_string()),
        ],
    )
        .into_response()
}

/// 200 text/plain with an explicit Content-Length.
fn manifest_response(manifest: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain".to_string()),
            (header::CONTENT_LENGTH, manifest.len().to_string()),
        ],
        manifest,
    )
        .into_response()
}

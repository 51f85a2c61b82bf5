use relgate_core::traits::ReleaseSource;
use std::sync::Arc;

use crate::cache::ManifestCache;
use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct AppState<S: ReleaseSource> {
    pub source: S,
    pub cache: ManifestCache,
    pub config: Arc<GatewayConfig>,
}

//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Both
//! upstreams are optional trait objects: an unset URL leaves the slot empty
//! and the matching routes answer 503.

use std::sync::Arc;

use crate::backend::{DidBackend, HttpDidBackend};
use crate::config::ServerConfig;
use crate::dataverse::{DataverseApi, DataverseClient};
use crate::error::UpstreamError;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub backend: Option<Arc<dyn DidBackend>>,
    pub dataverse: Option<Arc<dyn DataverseApi>>,
}

impl AppState {
    /// Build upstream clients for whatever `config` names.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if an HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, UpstreamError> {
        let backend = match &config.did_backend_url {
            Some(url) => {
                tracing::info!(%url, "DID backend configured");
                Some(Arc::new(HttpDidBackend::new(url.clone(), config.timeouts)?) as Arc<dyn DidBackend>)
            }
            None => {
                tracing::warn!("DID_BACKEND_URL not set; DID routes will answer 503");
                None
            }
        };

        let dataverse = match &config.dataverse {
            Some(dv) => {
                tracing::info!(base_url = %dv.base_url, token = dv.api_token.is_some(), "Dataverse configured");
                Some(Arc::new(DataverseClient::new(dv.clone(), config.timeouts)?) as Arc<dyn DataverseApi>)
            }
            None => {
                tracing::warn!("DATAVERSE_URL not set; dataset panel will use sample data");
                None
            }
        };

        Ok(Self { backend, dataverse })
    }
}

use crate::backend::HttpTokenIssuer;
use crate::config::Settings;
use crate::errors::StartupError;
use http::HeaderValue;
use oauth2_core::TokenIssuer;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub issuer: Arc<dyn TokenIssuer>,
    /// `WWW-Authenticate` value sent with rejected client credentials
    pub challenge: HeaderValue,
}

impl AppState {
    /// Creates the state with an HTTP client for the configured backend
    pub fn new(config: Settings) -> Result<Self, StartupError> {
        let issuer = HttpTokenIssuer::from_config(&config.backend)?;
        Self::with_issuer(config, Arc::new(issuer))
    }

    pub fn with_issuer(
        config: Settings,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Result<Self, StartupError> {
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{}\"", config.realm))
            .map_err(|_| StartupError::InvalidRealm(config.realm.clone()))?;

        Ok(Self {
            config: Arc::new(config),
            issuer,
            challenge,
        })
    }

    /// Upper bound on a single backend call
    pub fn backend_timeout(&self) -> Duration {
        self.config.backend.call_timeout()
    }
}

use confique::Config;
use std::time::Duration;
use url::Url;

/// Path of the access token operation, relative to the backend URL
const ACCESS_TOKEN_PATH: &str = "v1/oauth2/access_token";

/// Configuration for the authorization backend
#[derive(Debug, Config, Clone)]
pub struct BackendConfig {
    /// Base URL of the authorization backend (default: http://localhost:7070)
    #[config(env = "OAUTH2_BACKEND_URL", default = "http://localhost:7070")]
    pub url: String,

    /// Timeout for a single access token call in seconds (default: 5)
    #[config(env = "OAUTH2_BACKEND_TIMEOUT", default = 5)]
    pub timeout: u64,

    /// Timeout for establishing a backend connection in seconds (default: 2)
    #[config(env = "OAUTH2_BACKEND_CONNECT_TIMEOUT", default = 2)]
    pub connect_timeout: u64,

    /// Bearer token sent to the backend, if it requires one
    #[config(env = "OAUTH2_BACKEND_API_KEY")]
    pub api_key: Option<String>,
}

impl BackendConfig {
    /// Returns the URL of the access token operation.
    ///
    /// Any path on the base URL is kept as a prefix.
    pub fn access_token_url(&self) -> Result<Url, url::ParseError> {
        let mut base = Url::parse(&self.url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(ACCESS_TOKEN_PATH)
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}

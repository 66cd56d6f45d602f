use confique::Config;

pub mod backend;

pub use backend::BackendConfig;

/// Environment variable naming the TOML configuration file
pub const CONFIG_FILE_ENV: &str = "OAUTH2_CONFIG_FILE";

const DEFAULT_CONFIG_FILE: &str = "oauth2-server.toml";

/// Main configuration structure for the token server
#[derive(Debug, Config, Clone)]
pub struct Settings {
    /// The port the server will listen to (default: 8080)
    #[config(env = "OAUTH2_PORT", default = 8080)]
    pub port: u16,

    /// Realm announced in the Basic authentication challenge (default: oauth2)
    #[config(env = "OAUTH2_REALM", default = "oauth2")]
    pub realm: String,

    /// Authorization backend configuration
    #[config(nested)]
    pub backend: BackendConfig,
}

impl Settings {
    /// Loads the configuration from environment variables, then the optional
    /// configuration file, then built-in defaults
    pub fn new() -> Result<Self, confique::Error> {
        let file =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Settings::builder().env().file(file).load()
    }

    #[cfg(test)]
    pub fn for_test_with_mock(backend_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            realm: "oauth2".to_string(),
            backend: BackendConfig {
                url: backend_mock.uri(),
                timeout: 1,
                connect_timeout: 1,
                api_key: Some("test_backend_key".to_string()),
            },
        }
    }
}

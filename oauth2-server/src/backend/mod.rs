//! HTTP client for the authorization backend

pub mod models;

use crate::backend::models::{AccessTokenCall, AccessTokenReply};
use crate::config::BackendConfig;
use crate::errors::StartupError;
use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};
use log::debug;
use oauth2_core::{ClientCredentials, IssuerError, TokenIssuer, TokenRequest, TokenResponse};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// [`TokenIssuer`] reaching the authorization backend over HTTP with JSON bodies
#[derive(Clone)]
pub struct HttpTokenIssuer {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpTokenIssuer {
    pub fn from_config(config: &BackendConfig) -> Result<Self, StartupError> {
        Ok(Self {
            client: create_backend_client(config)?,
            endpoint: config.access_token_url()?,
            timeout: config.call_timeout(),
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> IssuerError {
        if err.is_timeout() {
            IssuerError::Timeout(self.timeout)
        } else {
            IssuerError::Unavailable(err.to_string())
        }
    }
}

fn create_backend_client(config: &BackendConfig) -> Result<Client, StartupError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &config.api_key {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))?,
        );
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(Client::builder()
        .timeout(config.call_timeout())
        .connect_timeout(config.connect_timeout())
        .default_headers(headers)
        // Connections are reused by every request handler
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .build()?)
}

#[async_trait]
impl TokenIssuer for HttpTokenIssuer {
    async fn get_access_token(
        &self,
        client: &ClientCredentials,
        request: &TokenRequest,
    ) -> Result<TokenResponse, IssuerError> {
        debug!("Forwarding access token request to {}", self.endpoint);
        let call = AccessTokenCall { client, request };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&call)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(IssuerError::InvalidStatus(response.status()));
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let reply: AccessTokenReply = serde_json::from_slice(&body)?;
        reply.into_token_response()
    }
}

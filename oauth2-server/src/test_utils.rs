use crate::config::Settings;
use crate::create_app;
use crate::state::AppState;
use axum::body::{Body, Bytes};
use axum::Router;
use base64::{engine::general_purpose::STANDARD, Engine};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

const ACCESS_TOKEN_PATH: &str = "/v1/oauth2/access_token";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Test fixture driving the whole router against a mocked authorization backend.
///
/// ```rust
/// #[tokio::test]
/// async fn test_endpoint() {
///     let fixture = TestFixture::new().await;
///     fixture
///         .add_backend_mock(expected_call, StatusCode::OK, json!({ "success": true, "token": "t" }), 1)
///         .await;
///
///     let auth = TestFixture::basic_auth("client:secret");
///     let response = fixture.post_token(Some(&auth), "grant_type=password").await;
///
///     response.assert_ok();
/// }
/// ```
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Configuration settings
    pub settings: Settings,
    /// Mock server for the authorization backend
    pub backend_mock: MockServer,
}

impl TestFixture {
    /// Creates a new test fixture with a mock authorization backend
    pub async fn new() -> Self {
        // Initialize test logger
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();

        let backend_mock = MockServer::start().await;
        let settings = Settings::for_test_with_mock(&backend_mock);

        let state = AppState::new(settings.clone()).expect("Failed to create test state");
        let app = create_app(state);

        Self {
            app,
            settings,
            backend_mock,
        }
    }

    /// Builds a Basic `Authorization` value from a raw `id:secret` payload
    pub fn basic_auth(payload: &str) -> String {
        format!("Basic {}", STANDARD.encode(payload))
    }

    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri.as_ref())
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Posts a form encoded body to the token endpoint
    pub async fn post_token(&self, authorization: Option<&str>, form: &str) -> TestResponse {
        self.post_raw(authorization, Some(FORM_CONTENT_TYPE), form)
            .await
    }

    /// Posts an arbitrary body to the token endpoint
    pub async fn post_raw(
        &self,
        authorization: Option<&str>,
        content_type: Option<&str>,
        body: &str,
    ) -> TestResponse {
        let mut builder = Request::builder().method(Method::POST).uri("/token");
        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        let request = builder
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        // Non-JSON and empty bodies read as null
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            json,
        }
    }

    /// Mounts a backend reply for an access token call with the given JSON body
    pub async fn add_backend_mock(
        &self,
        expected_call: Value,
        status_code: StatusCode,
        response_body: Value,
        expected_calls: u64,
    ) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path(ACCESS_TOKEN_PATH))
            .and(matchers::header(
                "Authorization",
                format!(
                    "Bearer {}",
                    self.settings.backend.api_key.as_deref().unwrap_or_default()
                )
                .as_str(),
            ))
            .and(matchers::body_json(expected_call))
            .respond_with(ResponseTemplate::new(status_code.as_u16()).set_body_json(response_body))
            .expect(expected_calls)
            .mount(&self.backend_mock)
            .await;
    }

    /// Mounts a backend reply that arrives after `delay`
    pub async fn add_delayed_backend_mock(&self, response_body: Value, delay: Duration) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path(ACCESS_TOKEN_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(response_body)
                    .set_delay(delay),
            )
            .mount(&self.backend_mock)
            .await;
    }

    /// Fails verification if the backend receives any call
    pub async fn expect_no_backend_calls(&self) {
        Mock::given(matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.backend_mock)
            .await;
    }
}

/// Response from a test request with its status, headers and body
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub json: Value,
}

impl TestResponse {
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {} but got {} with body: {}",
            expected,
            self.status,
            String::from_utf8_lossy(&self.body)
        );
        self
    }

    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }
}

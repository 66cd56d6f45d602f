use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::header::{CACHE_CONTROL, PRAGMA};
use http::HeaderValue;

/// Cache-Control directives
#[derive(Debug, Clone, Default)]
pub struct CacheControl {
    pub no_store: bool,
}

impl CacheControl {
    /// Create a new CacheControl instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Set no-store directive
    pub fn no_store(mut self) -> Self {
        self.no_store = true;
        self
    }

    /// Convert to HeaderValue, `None` when no directive is set
    pub fn to_header_value(&self) -> Option<HeaderValue> {
        self.no_store.then_some(HeaderValue::from_static("no-store"))
    }
}

/// Helper struct for setting cache-related headers
#[derive(Debug, Clone, Default)]
pub struct CacheHeaders {
    cache_control: CacheControl,
    pragma_no_cache: bool,
}

impl CacheHeaders {
    /// Create a new CacheHeaders instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache control directives
    pub fn cache_control(mut self, cache_control: CacheControl) -> Self {
        self.cache_control = cache_control;
        self
    }

    /// Send `Pragma: no-cache` for HTTP/1.0 caches
    pub fn pragma_no_cache(mut self) -> Self {
        self.pragma_no_cache = true;
        self
    }

    /// Apply headers to a response, replacing any the handler set
    pub fn apply<B>(&self, response: &mut axum::response::Response<B>) {
        let headers = response.headers_mut();

        if let Some(value) = self.cache_control.to_header_value() {
            headers.insert(CACHE_CONTROL, value);
        }
        if self.pragma_no_cache {
            headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        }
    }
}

/// Common cache control presets
pub mod presets {
    use super::*;

    /// Responses carrying credentials or tokens (RFC 6749 Section 5.1)
    pub fn no_store() -> CacheHeaders {
        CacheHeaders::new()
            .cache_control(CacheControl::new().no_store())
            .pragma_no_cache()
    }
}

/// Middleware forbidding any cache from storing the response
pub async fn no_store_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    presets::no_store().apply(&mut response);
    response
}

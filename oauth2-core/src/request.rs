use serde::Serialize;

/// Collapses an empty value to `None`.
///
/// Form parameters and Basic credentials share this rule: an empty string and
/// a missing value mean the same thing.
pub fn non_empty<S: Into<String>>(value: S) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Access token request forwarded to the authorization backend.
///
/// Fields are only reachable through [`TokenRequest::new`], so none of them
/// can ever hold an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    grant_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

impl TokenRequest {
    /// Builds a request from raw form values, dropping the empty ones
    pub fn new(
        grant_type: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: non_empty(grant_type),
            username: non_empty(username),
            password: non_empty(password),
            refresh_token: non_empty(refresh_token),
        }
    }

    pub fn grant_type(&self) -> Option<&str> {
        self.grant_type.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

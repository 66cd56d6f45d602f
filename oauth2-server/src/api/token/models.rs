use oauth2_core::TokenRequest;
use utoipa::ToSchema;

/// OAuth 2.0 Token Request form (RFC 6749 Sections 4.3 and 6)
#[derive(Debug, Default, Clone, PartialEq, Eq, ToSchema)]
pub struct TokenForm {
    /// OAuth 2.0 grant type, e.g. "password" or "refresh_token"
    pub grant_type: String,
    /// Resource owner username (password grant)
    pub username: String,
    /// Resource owner password (password grant)
    pub password: String,
    /// Refresh token (refresh_token grant)
    pub refresh_token: String,
}

impl TokenForm {
    /// Builds the form from decoded key/value pairs.
    ///
    /// The first value of a repeated key wins, unknown keys are ignored and
    /// missing keys read as empty.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        Self {
            grant_type: first("grant_type"),
            username: first("username"),
            password: first("password"),
            refresh_token: first("refresh_token"),
        }
    }
}

impl From<TokenForm> for TokenRequest {
    fn from(form: TokenForm) -> Self {
        TokenRequest::new(
            form.grant_type,
            form.username,
            form.password,
            form.refresh_token,
        )
    }
}

//! # oauth2-core
//!
//! Protocol logic of an OAuth 2.0 token endpoint that delegates token issuance
//! to a backend authorization service.
//!
//! ## Components
//!
//! - **Credentials:** Parses HTTP Basic client credentials from an `Authorization` header.
//! - **Request:** The normalized token request forwarded to the backend.
//! - **Error:** RFC 6749 token endpoint error codes and their HTTP status table.
//! - **Issuer:** The [`TokenIssuer`] capability through which the backend is reached.
//! - **Exchange:** Drives a token request through an issuer and translates the outcome.

pub mod credentials;
pub mod error;
pub mod exchange;
pub mod issuer;
pub mod request;
pub mod response;

pub use credentials::{ClientCredentials, CredentialsError};
pub use error::{ErrorResponse, OAuthErrorCode};
pub use exchange::{exchange, TokenReply};
pub use issuer::{IssuerError, TokenIssuer};
pub use request::{non_empty, TokenRequest};
pub use response::TokenResponse;

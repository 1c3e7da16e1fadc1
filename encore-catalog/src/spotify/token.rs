//! Client-credentials token issuer for the Spotify accounts service.

use async_trait::async_trait;
use chrono::Duration;
use encore_core::{BearerToken, CredentialError};
use encore_fetch::{ClientCredentials, HttpClient, RemoteError, TokenIssuer};
use tracing::{debug, instrument};

use super::dto::TokenResponse;

/// Spotify accounts token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Issues app-only bearer tokens with the client-credentials grant.
#[derive(Debug, Clone)]
pub struct SpotifyTokenIssuer {
    http: HttpClient,
    token_url: String,
    credentials: ClientCredentials,
}

impl SpotifyTokenIssuer {
    /// Creates an issuer posting to `token_url`.
    pub fn new(http: HttpClient, token_url: impl Into<String>, credentials: ClientCredentials) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            credentials,
        }
    }
}

fn credential_error(error: RemoteError) -> CredentialError {
    match error {
        RemoteError::Status { status, .. } => CredentialError::Rejected { status },
        RemoteError::Decode(message) => CredentialError::InvalidResponse(message),
        other => CredentialError::Network(other.to_string()),
    }
}

/// Validates a token response and turns it into a token issued now.
pub fn token_from_response(response: TokenResponse) -> Result<BearerToken, CredentialError> {
    if !response.token_type.eq_ignore_ascii_case("bearer") {
        return Err(CredentialError::InvalidResponse(format!(
            "unexpected token type {}",
            response.token_type
        )));
    }
    if response.access_token.is_empty() || response.expires_in <= 0 {
        return Err(CredentialError::InvalidResponse(
            "empty token or non-positive lifetime".to_string(),
        ));
    }
    Ok(BearerToken::issued_now(
        response.access_token,
        Duration::seconds(response.expires_in),
    ))
}

#[async_trait]
impl TokenIssuer for SpotifyTokenIssuer {
    #[instrument(skip(self), fields(client_id = %self.credentials.client_id()))]
    async fn issue_token(&self) -> Result<BearerToken, CredentialError> {
        let response: TokenResponse = self
            .http
            .post_form(
                &self.token_url,
                &[("grant_type", "client_credentials")],
                &self.credentials.basic_authorization(),
            )
            .await
            .map_err(credential_error)?;

        debug!(expires_in = response.expires_in, "Token issued");
        token_from_response(response)
    }
}

//! External identity provider client.
//!
//! DESIGN
//! ======
//! Sign-in tokens are minted by a hosted identity service; this server only
//! verifies them over REST and maps the result to a visitor row. The client
//! is built once at startup from environment variables and injected through
//! `AppState` — handlers depend on the [`IdentityVerifier`] trait so tests
//! can substitute a stub.

use async_trait::async_trait;
use serde_json::Value;

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Error raised by identity configuration or token verification.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("missing identity API key; set `{var}`")]
    MissingApiKey { var: String },
    #[error("identity request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("identity provider rejected the token: {0}")]
    Rejected(String),
    #[error("identity response missing expected fields")]
    MalformedResponse,
}

/// Verified profile returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProfile {
    /// Stable provider-assigned user id.
    pub uid: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Token verification seam. `AppState` holds `Option<Arc<dyn IdentityVerifier>>`.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify a sign-in token and return the provider profile.
    async fn verify(&self, id_token: &str) -> Result<IdentityProfile, IdentityError>;
}

// =============================================================================
// CONFIG
// =============================================================================

/// Typed identity configuration parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl IdentityConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `IDENTITY_API_KEY`
    ///
    /// Optional:
    /// - `IDENTITY_BASE_URL`: hosted identity REST endpoint
    /// - `IDENTITY_REQUEST_TIMEOUT_SECS`: default 10
    /// - `IDENTITY_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing.
    pub fn from_env() -> Result<Self, IdentityError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, IdentityError> {
        let api_key = var("IDENTITY_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| IdentityError::MissingApiKey { var: "IDENTITY_API_KEY".into() })?;

        let base_url = var("IDENTITY_BASE_URL")
            .unwrap_or_else(|| DEFAULT_IDENTITY_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            api_key,
            base_url,
            request_timeout_secs: parse_secs(
                var("IDENTITY_REQUEST_TIMEOUT_SECS"),
                DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS,
            ),
            connect_timeout_secs: parse_secs(
                var("IDENTITY_CONNECT_TIMEOUT_SECS"),
                DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS,
            ),
        })
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete REST client for the hosted identity service.
pub struct IdentityClient {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl IdentityClient {
    /// Build an identity client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, IdentityError> {
        Self::from_config(IdentityConfig::from_env()?)
    }

    /// Build an identity client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: IdentityConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl IdentityVerifier for IdentityClient {
    async fn verify(&self, id_token: &str) -> Result<IdentityProfile, IdentityError> {
        let url = format!(
            "{}/accounts:lookup?key={}",
            self.config.base_url, self.config.api_key
        );
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "idToken": id_token }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_owned();
            tracing::warn!(%status, %message, "identity token rejected");
            return Err(IdentityError::Rejected(message));
        }

        let body: Value = response.json().await?;
        parse_profile(&body).ok_or(IdentityError::MalformedResponse)
    }
}

/// Extract the first user record from an `accounts:lookup` response.
fn parse_profile(body: &Value) -> Option<IdentityProfile> {
    let user = body.get("users")?.as_array()?.first()?;
    let uid = user.get("localId")?.as_str()?.to_owned();
    Some(IdentityProfile {
        uid,
        name: user
            .get("displayName")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned),
        email: user.get("email").and_then(Value::as_str).map(ToOwned::to_owned),
        avatar_url: user.get("photoUrl").and_then(Value::as_str).map(ToOwned::to_owned),
    })
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

//! Token authentication for the Google APIs.
//!
//! Supports:
//! - Static bearer token (tests, short-lived tokens minted elsewhere)
//! - Service-account key file, exchanged for an access token with the
//!   OAuth 2.0 JWT bearer grant
//!
//! The service-account flow signs an RS256 assertion with the key's
//! private key and posts it to the key's `token_uri`. The access token is
//! cached until shortly before it expires.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each assertion.
const ASSERTION_LIFETIME_SECS: u64 = 3600;

/// Tokens this close to expiry are refreshed.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Token provider for API authentication.
#[derive(Debug, Clone)]
pub enum TokenProvider {
    /// Static token.
    Static(String),

    /// Service-account key exchanged for access tokens.
    ServiceAccount(Arc<ServiceAccount>),

    /// No authentication.
    None,
}

impl TokenProvider {
    pub fn static_token(token: impl Into<String>) -> Self {
        Self::Static(token.into())
    }

    /// Load a service-account key file and request `scopes`.
    pub fn service_account(path: &Path, scopes: Vec<String>) -> ClientResult<Self> {
        let key = ServiceAccountKey::from_file(path)?;
        Ok(Self::ServiceAccount(Arc::new(ServiceAccount::new(key, scopes)?)))
    }

    /// Current token, or `None` when unauthenticated.
    pub async fn get_token(&self, client: &reqwest::Client) -> ClientResult<Option<String>> {
        match self {
            Self::Static(token) => Ok(Some(token.clone())),
            Self::ServiceAccount(account) => account.access_token(client).await.map(Some),
            Self::None => Ok(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// The fields of a service-account JSON key this client uses.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ClientError::Credentials {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&text).map_err(|e| ClientError::Credentials {
            message: format!("{}: {}", path.display(), e),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// JWT claims of the bearer-grant assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    ASSERTION_LIFETIME_SECS
}

pub struct ServiceAccount {
    key: ServiceAccountKey,
    scopes: Vec<String>,
    encoding_key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("key", &self.key)
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}

impl ServiceAccount {
    pub fn new(key: ServiceAccountKey, scopes: Vec<String>) -> ClientResult<Self> {
        let encoding_key =
            EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
                ClientError::Credentials {
                    message: format!("invalid private key for {}: {}", key.client_email, e),
                }
            })?;
        Ok(Self {
            key,
            scopes,
            encoding_key,
            cached: Mutex::new(None),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    pub fn claims(&self, issued_at: u64) -> AssertionClaims {
        AssertionClaims {
            iss: self.key.client_email.clone(),
            scope: self.scopes.join(" "),
            aud: self.key.token_uri.clone(),
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        }
    }

    /// Signed RS256 assertion issued at `issued_at` (unix seconds).
    pub fn assertion(&self, issued_at: u64) -> ClientResult<String> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();
        encode(&header, &self.claims(issued_at), &self.encoding_key).map_err(|e| {
            ClientError::Auth {
                message: format!("failed to sign assertion: {}", e),
            }
        })
    }

    pub async fn access_token(&self, client: &reqwest::Client) -> ClientResult<String> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() + REFRESH_MARGIN {
                return Ok(token.token.clone());
            }
        }

        let fresh = self.exchange(client).await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    async fn exchange(&self, client: &reqwest::Client) -> ClientResult<CachedToken> {
        let assertion = self.assertion(unix_now())?;
        debug!(token_uri = %self.key.token_uri, "exchanging service-account assertion");

        let response = client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ClientError::Network {
            message: format!("failed to read token response: {}", e),
        })?;
        if !status.is_success() {
            return Err(ClientError::Auth {
                message: format!(
                    "token endpoint returned {}: {}",
                    status.as_u16(),
                    body.chars().take(200).collect::<String>()
                ),
            });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
                message: format!("failed to parse token response: {}", e),
            })?;

        info!(client_email = %self.key.client_email, expires_in = parsed.expires_in, "obtained access token");
        Ok(CachedToken {
            token: parsed.access_token,
            expires_at: Instant::now() + Duration::from_secs(parsed.expires_in),
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

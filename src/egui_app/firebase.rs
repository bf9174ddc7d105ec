//! Firebase Authentication provider
//!
//! Speaks the Identity Toolkit REST API for email/password accounts and the
//! Secure Token API for refreshing ID tokens. Behaves like the web SDK where
//! the client can observe it:
//!
//! - account creation signs the new user in
//! - a token within [`TOKEN_REFRESH_MARGIN_SECS`] of expiry is refreshed before use
//! - error codes and messages use the SDK's `auth/...` vocabulary
//! - the session survives restarts (a JSON file under the data directory)

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use crate::egui_app::auth::{AuthProvider, SessionUser};
use crate::shared::config::AppConfig;
use crate::shared::error::AuthError;

/// Refresh tokens this many seconds before they expire
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 5 * 60;

/// Endpoints and key for one Firebase project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseSettings {
    pub api_key: Option<String>,
    pub identity_url: String,
    pub token_url: String,
}

impl From<&AppConfig> for FirebaseSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_key: config.firebase_api_key.clone(),
            identity_url: config.identity_url.clone(),
            token_url: config.token_url.clone(),
        }
    }
}

/// Signed-in session as persisted on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub uid: String,
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    fn user(&self) -> SessionUser {
        SessionUser {
            uid: self.uid.clone(),
            email: self.email.clone(),
        }
    }

    fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - Duration::seconds(TOKEN_REFRESH_MARGIN_SECS) <= now
    }
}

/// JSON file holding the persisted session
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(|e| AuthError::Storage(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::Storage(format!("{}: {e}", self.path.display()))),
        }
    }

    pub fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let storage = |e: std::io::Error| AuthError::Storage(format!("{}: {e}", self.path.display()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(storage)?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(storage)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(storage)?;
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Storage(format!("{}: {e}", self.path.display()))),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// `accounts:signUp` / `accounts:signInWithPassword` reply
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityReply {
    local_id: String,
    email: Option<String>,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

/// Secure Token reply
#[derive(Debug, Deserialize)]
struct RefreshReply {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    user_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Firebase email/password provider
pub struct FirebaseAuth {
    client: Client,
    settings: FirebaseSettings,
    session: Mutex<Option<StoredSession>>,
    user: watch::Sender<Option<SessionUser>>,
    store: Option<SessionFile>,
}

impl FirebaseAuth {
    /// Build the provider, restoring a persisted session from `store` if one
    /// exists. An unreadable session file is logged and ignored.
    pub fn new(settings: FirebaseSettings, store: Option<SessionFile>) -> Self {
        let restored = store.as_ref().and_then(|file| match file.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("[AUTH] Ignoring persisted session: {}", e);
                None
            }
        });
        if let Some(ref session) = restored {
            tracing::info!("[AUTH] Restored session for uid={}", session.uid);
        }

        let (user, _) = watch::channel(restored.as_ref().map(StoredSession::user));
        Self {
            client: Client::new(),
            settings,
            session: Mutex::new(restored),
            user,
            store,
        }
    }

    fn api_key(&self) -> Result<&str, AuthError> {
        self.settings
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(AuthError::MissingApiKey)
    }

    async fn password_request(
        &self,
        operation: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, AuthError> {
        let key = self.api_key()?;
        let url = format!(
            "{}/v1/accounts:{}",
            self.settings.identity_url.trim_end_matches('/'),
            operation
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;
        let reply: IdentityReply = read_reply(response).await?;

        let session = StoredSession {
            uid: reply.local_id,
            email: reply.email.or_else(|| Some(email.to_string())),
            id_token: reply.id_token,
            refresh_token: reply.refresh_token,
            expires_at: Utc::now() + parse_expires_in(&reply.expires_in)?,
        };
        Ok(self.install(session).await)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshReply, AuthError> {
        let key = self.api_key()?;
        let url = format!("{}/v1/token", self.settings.token_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;
        read_reply(response).await
    }

    async fn install(&self, session: StoredSession) -> SessionUser {
        let user = session.user();
        self.persist(&session);
        *self.session.lock().await = Some(session);
        self.publish(Some(user.clone()));
        user
    }

    fn persist(&self, session: &StoredSession) {
        if let Some(ref store) = self.store {
            if let Err(e) = store.save(session) {
                tracing::warn!("[AUTH] Failed to persist session: {}", e);
            }
        }
    }

    fn forget(&self) {
        if let Some(ref store) = self.store {
            if let Err(e) = store.clear() {
                tracing::warn!("[AUTH] Failed to remove persisted session: {}", e);
            }
        }
    }

    /// Notify subscribers only when the identity actually changes
    fn publish(&self, user: Option<SessionUser>) {
        self.user.send_if_modified(|current| {
            if *current == user {
                false
            } else {
                *current = user;
                true
            }
        });
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuth {
    async fn create_user(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let user = self.password_request("signUp", email, password).await?;
        tracing::info!("[AUTH] Created account uid={}", user.uid);
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let user = self
            .password_request("signInWithPassword", email, password)
            .await?;
        tracing::info!("[AUTH] Signed in uid={}", user.uid);
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let previous = self.session.lock().await.take();
        self.forget();
        self.publish(None);
        if let Some(session) = previous {
            tracing::info!("[AUTH] Signed out uid={}", session.uid);
        }
        Ok(())
    }

    async fn id_token(&self) -> Result<Option<String>, AuthError> {
        // Held across the refresh so concurrent callers share one round trip
        let mut guard = self.session.lock().await;
        let Some(current) = guard.as_ref() else {
            return Ok(None);
        };
        if !current.needs_refresh(Utc::now()) {
            return Ok(Some(current.id_token.clone()));
        }

        tracing::debug!("[AUTH] Refreshing ID token for uid={}", current.uid);
        let refresh_token = current.refresh_token.clone();
        match self.refresh(&refresh_token).await {
            Ok(reply) => {
                let refreshed = StoredSession {
                    uid: reply.user_id,
                    email: current.email.clone(),
                    id_token: reply.id_token,
                    refresh_token: reply.refresh_token,
                    expires_at: Utc::now() + parse_expires_in(&reply.expires_in)?,
                };
                self.persist(&refreshed);
                let token = refreshed.id_token.clone();
                *guard = Some(refreshed);
                Ok(Some(token))
            }
            Err(e @ AuthError::Provider { .. }) => {
                tracing::warn!("[AUTH] Refresh rejected, signing out: {}", e);
                *guard = None;
                drop(guard);
                self.forget();
                self.publish(None);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.user.subscribe()
    }

    fn current_user(&self) -> Option<SessionUser> {
        self.user.borrow().clone()
    }
}

async fn read_reply<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AuthError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        let raw = serde_json::from_str::<ErrorEnvelope>(&text)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| "INTERNAL_ERROR".to_string());
        return Err(provider_error(&raw));
    }
    serde_json::from_str(&text).map_err(|e| AuthError::Decode(e.to_string()))
}

fn parse_expires_in(raw: &str) -> Result<Duration, AuthError> {
    raw.trim()
        .parse::<i64>()
        .map(Duration::seconds)
        .map_err(|_| AuthError::Decode(format!("invalid expiresIn: {raw}")))
}

/// Translate a REST error message such as `WEAK_PASSWORD : Password should be
/// at least 6 characters` into the web SDK's code and wording.
pub fn provider_error(raw: &str) -> AuthError {
    let (server_code, detail) = match raw.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (raw.trim(), None),
    };

    let code = match server_code {
        "EMAIL_EXISTS" => "email-already-in-use".to_string(),
        "INVALID_EMAIL" => "invalid-email".to_string(),
        "WEAK_PASSWORD" => "weak-password".to_string(),
        "MISSING_PASSWORD" => "missing-password".to_string(),
        "MISSING_EMAIL" => "missing-email".to_string(),
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => "user-not-found".to_string(),
        "INVALID_PASSWORD" => "wrong-password".to_string(),
        "INVALID_LOGIN_CREDENTIALS" => "invalid-credential".to_string(),
        "USER_DISABLED" => "user-disabled".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "too-many-requests".to_string(),
        "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => "operation-not-allowed".to_string(),
        "TOKEN_EXPIRED" => "user-token-expired".to_string(),
        "INVALID_REFRESH_TOKEN" => "invalid-user-token".to_string(),
        other if other.starts_with("API key not valid") => "invalid-api-key".to_string(),
        other => other.to_ascii_lowercase().replace('_', "-"),
    };

    let message = match detail {
        Some(detail) => format!("Firebase: {detail} (auth/{code})."),
        None => format!("Firebase: Error (auth/{code})."),
    };
    AuthError::provider(format!("auth/{code}"), message)
}

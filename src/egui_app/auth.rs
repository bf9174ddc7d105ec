/**
 * Authentication Module
 *
 * The seam between the client and its identity provider. Actions never talk
 * to a provider directly; they go through a [`Session`], which hands out the
 * current identity, a fresh bearer token per request, and a change channel.
 */

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::shared::error::AuthError;

/// Signed-in identity as the provider reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-assigned user id
    pub uid: String,
    pub email: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.uid)
    }
}

/// External identity provider.
///
/// Implementations own credential handling, token issuance and session
/// persistence. They publish identity changes on the channel returned by
/// [`AuthProvider::subscribe`]; a token refresh for the same user is not a
/// change.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Create an account and sign it in
    async fn create_user(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// A currently valid ID token, `Ok(None)` when nobody is signed in
    async fn id_token(&self) -> Result<Option<String>, AuthError>;

    fn subscribe(&self) -> watch::Receiver<Option<SessionUser>>;

    fn current_user(&self) -> Option<SessionUser> {
        self.subscribe().borrow().clone()
    }
}

/// Session holder injected into the action layer
#[derive(Clone)]
pub struct Session {
    provider: Arc<dyn AuthProvider>,
}

impl Session {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.provider.current_user()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.provider.subscribe()
    }

    /// Bearer token for one request. Never cached here.
    ///
    /// A provider failure is logged and treated as "no token".
    pub async fn token(&self) -> Option<String> {
        match self.provider.id_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("[AUTH] Could not obtain ID token: {}", e);
                None
            }
        }
    }

    pub async fn create_user(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        self.provider.create_user(email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        self.provider.sign_in(email, password).await
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await
    }
}

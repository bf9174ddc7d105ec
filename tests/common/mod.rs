//! Shared fakes and helpers for the integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dailysafe::egui_app::{Actions, AuthProvider, CheckinApi, Config, Session, SessionUser};
use dailysafe::shared::{AppConfig, AuthError, Locale, Messages};
use tokio::sync::watch;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// In-memory identity provider
pub struct FakeAuth {
    user: watch::Sender<Option<SessionUser>>,
    token: Mutex<Option<String>>,
    next_error: Mutex<Option<AuthError>>,
}

impl FakeAuth {
    pub fn signed_out() -> Arc<Self> {
        let (user, _) = watch::channel(None);
        Arc::new(Self {
            user,
            token: Mutex::new(None),
            next_error: Mutex::new(None),
        })
    }

    pub fn signed_in(email: &str) -> Arc<Self> {
        let auth = Self::signed_out();
        auth.install(email);
        auth
    }

    /// Make the next create/sign-in call fail
    pub fn fail_next(&self, error: AuthError) {
        *self.next_error.lock().unwrap() = Some(error);
    }

    /// Signed in, but the provider cannot produce a token
    pub fn drop_token(&self) {
        *self.token.lock().unwrap() = None;
    }

    fn install(&self, email: &str) -> SessionUser {
        let user = user(email);
        *self.token.lock().unwrap() = Some(TOKEN.to_string());
        self.user.send_replace(Some(user.clone()));
        user
    }

    fn take_error(&self) -> Result<(), AuthError> {
        match self.next_error.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn create_user(&self, email: &str, _password: &str) -> Result<SessionUser, AuthError> {
        self.take_error()?;
        Ok(self.install(email))
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<SessionUser, AuthError> {
        self.take_error()?;
        Ok(self.install(email))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        *self.token.lock().unwrap() = None;
        self.user.send_replace(None);
        Ok(())
    }

    async fn id_token(&self) -> Result<Option<String>, AuthError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.user.subscribe()
    }
}

pub fn user(email: &str) -> SessionUser {
    SessionUser {
        uid: format!("uid-{email}"),
        email: Some(email.to_string()),
    }
}

pub fn actions_for(auth: Arc<FakeAuth>, api_base: &str) -> Actions {
    let app = AppConfig::builder().api_base(api_base).build().unwrap();
    Actions::new(
        Session::new(auth),
        CheckinApi::new(Config::new(app)),
        Messages::new(Locale::Ja),
    )
}

pub fn actions(auth: Arc<FakeAuth>, server: &MockServer) -> Actions {
    actions_for(auth, &server.uri())
}

/// A base URL nothing listens on
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or(0)
}

/// Poll `condition` until it holds, panicking after a few seconds
pub async fn wait_for<F: Fn() -> bool>(condition: F) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not met in time"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

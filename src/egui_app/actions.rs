//! Action dispatchers
//!
//! One async method per user action. Each makes a single external call and
//! writes its outcome to the [`StateStore`]; none of them returns an error.
//! Failures end up in the notice slot or, for status refreshes, in the log.

use crate::egui_app::api::CheckinApi;
use crate::egui_app::auth::{Session, SessionUser};
use crate::egui_app::state::store::StateStore;
use crate::shared::error::AuthError;
use crate::shared::messages::Messages;
use crate::shared::notice::Notice;

#[derive(Clone)]
pub struct Actions {
    session: Session,
    api: CheckinApi,
    messages: Messages,
    store: StateStore,
}

impl Actions {
    pub fn new(session: Session, api: CheckinApi, messages: Messages) -> Self {
        Self {
            session,
            api,
            messages,
            store: StateStore::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn messages(&self) -> Messages {
        self.messages
    }

    pub async fn signup(&self, email: &str, password: &str) {
        self.store.set_notice(None);
        let result = self.session.create_user(email, password).await;
        self.report_auth(result, self.messages.signup_succeeded(), self.messages.signup_failed());
    }

    pub async fn login(&self, email: &str, password: &str) {
        self.store.set_notice(None);
        let result = self.session.sign_in(email, password).await;
        self.report_auth(result, self.messages.login_succeeded(), self.messages.login_failed());
    }

    fn report_auth(&self, result: Result<SessionUser, AuthError>, success: &str, fallback: &str) {
        let notice = match result {
            Ok(user) => {
                tracing::info!("[AUTH] Authenticated uid={}", user.uid);
                Notice::info(success)
            }
            Err(e) => {
                tracing::warn!("[AUTH] Authentication failed: {}", e);
                Notice::error(e.notice_text().unwrap_or_else(|| fallback.to_string()))
            }
        };
        self.store.set_notice(Some(notice));
    }

    pub async fn logout(&self) {
        if let Err(e) = self.session.sign_out().await {
            tracing::warn!("[AUTH] Sign-out failed: {}", e);
        }
        self.store.set_notice(Some(Notice::info(self.messages.logged_out())));
        self.store.reset_status();
    }

    /// Confirm today, then re-read the status from the backend.
    pub async fn checkin(&self) {
        self.store.set_notice(None);

        let Some(token) = self.session.token().await else {
            self.store
                .set_notice(Some(Notice::error(self.messages.login_first())));
            return;
        };

        match self.api.checkin(&token).await {
            Ok(()) => {
                tracing::info!("[CHECKIN] Recorded");
                self.store
                    .set_notice(Some(Notice::info(self.messages.checkin_succeeded())));
                self.get_status().await;
            }
            Err(e) => {
                tracing::warn!("[CHECKIN] Failed: {}", e);
                let text = e
                    .notice_text()
                    .unwrap_or_else(|| self.messages.checkin_failed().to_string());
                self.store.set_notice(Some(Notice::error(text)));
            }
        }
    }

    /// Refresh the status cache. Silent: never touches the notice slot.
    pub async fn get_status(&self) {
        let Some(token) = self.session.token().await else {
            tracing::debug!("[STATUS] No session, skipping refresh");
            return;
        };

        match self.api.status(&token).await {
            Ok(status) => {
                tracing::debug!("[STATUS] {:?}", status);
                self.store.set_status(status);
            }
            Err(e) => tracing::warn!("[STATUS] Refresh failed: {}", e),
        }
    }

    /// React to an identity change: fetch the status of the new user, or
    /// forget the status when nobody is signed in.
    pub async fn on_session_change(&self, user: Option<SessionUser>) {
        match user {
            Some(user) => {
                tracing::info!("[SESSION] Signed in as uid={}", user.uid);
                self.get_status().await;
            }
            None => {
                tracing::info!("[SESSION] Signed out");
                self.store.reset_status();
            }
        }
    }

    /// Run [`Actions::on_session_change`] for the current identity and then
    /// for every change, until the provider goes away.
    pub async fn watch_session(self) {
        let mut rx = self.session.subscribe();
        loop {
            let user = rx.borrow_and_update().clone();
            self.on_session_change(user).await;
            if rx.changed().await.is_err() {
                tracing::debug!("[SESSION] Provider dropped, watcher exiting");
                break;
            }
        }
    }
}

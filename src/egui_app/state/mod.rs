use tokio::runtime::Handle;

use crate::egui_app::actions::Actions;
use crate::egui_app::auth::SessionUser;
use crate::shared::messages::Messages;
use crate::shared::notice::Notice;
use crate::shared::status::CheckinStatus;

pub mod store;

pub use store::{ClientState, StateStore};

/// What one frame renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub user: Option<SessionUser>,
    pub notice: Option<Notice>,
    pub status: CheckinStatus,
}

impl Snapshot {
    /// Check-in is offered until the backend reports today as confirmed
    pub fn checkin_enabled(&self) -> bool {
        !self.status.is_confirmed()
    }
}

/// Central application state shared across egui views.
///
/// Owns the form inputs; every button hands the work to the runtime and
/// returns immediately.
pub struct AppState {
    pub email_input: String,
    pub password_input: String,
    actions: Actions,
    runtime: Handle,
}

impl AppState {
    pub fn new(actions: Actions, runtime: Handle) -> Self {
        Self {
            email_input: String::new(),
            password_input: String::new(),
            actions,
            runtime,
        }
    }

    pub fn messages(&self) -> Messages {
        self.actions.messages()
    }

    pub fn snapshot(&self) -> Snapshot {
        let ClientState { notice, status } = self.actions.store().snapshot();
        Snapshot {
            user: self.actions.session().current_user(),
            notice,
            status,
        }
    }

    pub fn handle_login(&mut self) {
        let actions = self.actions.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();
        self.runtime.spawn(async move {
            actions.login(&email, &password).await;
        });
    }

    pub fn handle_signup(&mut self) {
        let actions = self.actions.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();
        self.runtime.spawn(async move {
            actions.signup(&email, &password).await;
        });
    }

    pub fn handle_logout(&mut self) {
        self.password_input.clear();
        let actions = self.actions.clone();
        self.runtime.spawn(async move {
            actions.logout().await;
        });
    }

    pub fn handle_checkin(&mut self) {
        let actions = self.actions.clone();
        self.runtime.spawn(async move {
            actions.checkin().await;
        });
    }

    pub fn handle_status(&mut self) {
        let actions = self.actions.clone();
        self.runtime.spawn(async move {
            actions.get_status().await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkin_enabled_until_confirmed() {
        let mut snapshot = Snapshot {
            user: None,
            notice: None,
            status: CheckinStatus::Unknown,
        };
        assert!(snapshot.checkin_enabled());

        snapshot.status = CheckinStatus::NotChecked;
        assert!(snapshot.checkin_enabled());

        snapshot.status = CheckinStatus::Checked { at: None };
        assert!(!snapshot.checkin_enabled());
    }
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::shared::notice::Notice;
use crate::shared::status::CheckinStatus;

/// Everything actions write and views read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    pub notice: Option<Notice>,
    pub status: CheckinStatus,
}

/// Shared handle to [`ClientState`].
///
/// Writes are single-field and unordered: whichever action finishes last
/// wins.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    inner: Arc<Mutex<ClientState>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ClientState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ClientState {
        self.lock().clone()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.lock().notice.clone()
    }

    pub fn status(&self) -> CheckinStatus {
        self.lock().status.clone()
    }

    pub fn set_notice(&self, notice: Option<Notice>) {
        self.lock().notice = notice;
    }

    pub fn set_status(&self, status: CheckinStatus) {
        self.lock().status = status;
    }

    pub fn reset_status(&self) {
        self.set_status(CheckinStatus::Unknown);
    }
}

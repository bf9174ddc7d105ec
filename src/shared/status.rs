//! Check-in status and the backend's wire shapes
//!
//! The authoritative copy of "did this user check in today" lives on the
//! backend. [`CheckinStatus`] is the client's read cache of the last
//! `/status` response; it is never derived locally.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Last fetched check-in snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CheckinStatus {
    /// Nothing fetched yet, signed out, or the backend sent something else
    #[default]
    Unknown,
    /// The backend says today is not confirmed
    NotChecked,
    /// The backend says today is confirmed, optionally with the raw ISO-8601
    /// time it happened
    Checked { at: Option<String> },
}

impl CheckinStatus {
    /// Interpret a `/status` body.
    ///
    /// `{ "checked": bool, "checkedAt"?: string }`; anything without a boolean
    /// `checked` is unknown. `checkedAt` is dropped unless `checked` is true.
    pub fn from_status_body(body: &Value) -> Self {
        match body.get("checked").and_then(Value::as_bool) {
            Some(true) => CheckinStatus::Checked {
                at: body
                    .get("checkedAt")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            Some(false) => CheckinStatus::NotChecked,
            None => CheckinStatus::Unknown,
        }
    }

    /// `checked` as the backend reported it, `None` when unknown
    pub fn checked(&self) -> Option<bool> {
        match self {
            CheckinStatus::Unknown => None,
            CheckinStatus::NotChecked => Some(false),
            CheckinStatus::Checked { .. } => Some(true),
        }
    }

    pub fn checked_at(&self) -> Option<&str> {
        match self {
            CheckinStatus::Checked { at } => at.as_deref(),
            _ => None,
        }
    }

    /// A confirmed day locks the check-in button
    pub fn is_confirmed(&self) -> bool {
        matches!(self, CheckinStatus::Checked { .. })
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CheckinStatus::Unknown)
    }
}

/// Decide whether a `/checkin` body is a failure.
///
/// Returns the body's `error` string when the body carries `"ok": false`.
/// `Ok(())` for everything else, including bodies without `ok`.
pub fn checkin_outcome(body: &Value) -> Result<(), Option<String>> {
    if body.get("ok").and_then(Value::as_bool) == Some(false) {
        Err(error_field(body))
    } else {
        Ok(())
    }
}

/// The `error` string of a backend body, if any
pub fn error_field(body: &Value) -> Option<String> {
    body.get("error").and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_not_checked() {
        let status = CheckinStatus::from_status_body(&json!({ "checked": false }));
        assert_eq!(status, CheckinStatus::NotChecked);
        assert_eq!(status.checked(), Some(false));
        assert!(!status.is_confirmed());
        assert!(status.is_known());
    }

    #[test]
    fn test_status_checked_with_time() {
        let status = CheckinStatus::from_status_body(
            &json!({ "checked": true, "checkedAt": "2024-01-01T00:00:00Z" }),
        );
        assert!(status.is_confirmed());
        assert_eq!(status.checked_at(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_status_checked_without_time() {
        let status = CheckinStatus::from_status_body(&json!({ "checked": true }));
        assert_eq!(status, CheckinStatus::Checked { at: None });
    }

    #[test]
    fn test_checked_at_ignored_when_not_checked() {
        let status = CheckinStatus::from_status_body(
            &json!({ "checked": false, "checkedAt": "2024-01-01T00:00:00Z" }),
        );
        assert_eq!(status.checked_at(), None);
    }

    #[test]
    fn test_non_conforming_bodies_are_unknown() {
        for body in [
            json!({}),
            json!({ "error": "unauthorized" }),
            json!({ "checked": "yes" }),
            json!([1, 2, 3]),
            json!(null),
        ] {
            assert_eq!(CheckinStatus::from_status_body(&body), CheckinStatus::Unknown);
        }
    }

    #[test]
    fn test_checkin_outcome() {
        assert_eq!(checkin_outcome(&json!({ "ok": true })), Ok(()));
        assert_eq!(checkin_outcome(&json!({})), Ok(()));
        assert_eq!(checkin_outcome(&json!({ "ok": false })), Err(None));
        assert_eq!(
            checkin_outcome(&json!({ "ok": false, "error": "already done" })),
            Err(Some("already done".to_string()))
        );
    }
}

//! Integration tests for the check-in and status actions.

mod common;

use common::{actions, actions_for, request_count, FakeAuth, UNREACHABLE};
use dailysafe::shared::{AuthError, CheckinStatus, Notice};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_checkin_without_session_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let actions = actions(FakeAuth::signed_out(), &server);
    actions.store().set_notice(Some(Notice::info("stale")));
    actions.checkin().await;

    assert_eq!(
        actions.store().notice(),
        Some(Notice::error("先にログインしてください"))
    );
    assert_eq!(actions.store().status(), CheckinStatus::Unknown);
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_checkin_without_token_sends_nothing() {
    let server = MockServer::start().await;
    let auth = FakeAuth::signed_in("a@example.com");
    auth.drop_token();

    let actions = actions(auth, &server);
    actions.checkin().await;

    assert_eq!(
        actions.store().notice(),
        Some(Notice::error("先にログインしてください"))
    );
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_successful_checkin_refreshes_status_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkin"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "checked": true,
            "checkedAt": "2024-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let actions = actions(FakeAuth::signed_in("a@example.com"), &server);
    actions.store().set_status(CheckinStatus::NotChecked);
    actions.checkin().await;

    assert_eq!(actions.store().notice(), Some(Notice::info("✅ 記録しました")));
    let status = actions.store().status();
    assert!(status.is_confirmed());
    assert_eq!(status.checked_at(), Some("2024-01-01T00:00:00Z"));

    let messages = actions.messages();
    assert_eq!(messages.checkin_button(status.is_confirmed()), "今日は確認済み ✅");
    let when = messages.format_timestamp(status.checked_at().unwrap(), &chrono::Utc);
    assert_eq!(
        messages.status_line(true, Some(&when)),
        "今日の状態: ✅ 確認済み（2024/1/1 0:00:00）"
    );
}

#[tokio::test]
async fn test_server_error_leaves_status_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkin"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "checked": true })))
        .expect(0)
        .mount(&server)
        .await;

    let actions = actions(FakeAuth::signed_in("a@example.com"), &server);
    actions.store().set_status(CheckinStatus::NotChecked);
    actions.checkin().await;

    assert_eq!(actions.store().notice(), Some(Notice::error("記録に失敗しました")));
    assert_eq!(actions.store().status(), CheckinStatus::NotChecked);
    assert!(!actions.store().status().is_confirmed());
}

#[tokio::test]
async fn test_ok_false_shows_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkin"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "ok": false, "error": "already recorded" })),
        )
        .mount(&server)
        .await;

    let actions = actions(FakeAuth::signed_in("a@example.com"), &server);
    actions.checkin().await;

    assert_eq!(actions.store().notice(), Some(Notice::error("already recorded")));
    assert_eq!(actions.store().status(), CheckinStatus::Unknown);
    // only the POST went out
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_checkin_network_error_is_surfaced() {
    let actions = actions_for(FakeAuth::signed_in("a@example.com"), UNREACHABLE);
    actions.store().set_status(CheckinStatus::NotChecked);
    actions.checkin().await;

    let notice = actions.store().notice().unwrap();
    assert!(notice.is_error());
    assert!(notice.text.starts_with("Network error"), "got {:?}", notice.text);
    assert_eq!(actions.store().status(), CheckinStatus::NotChecked);
}

#[tokio::test]
async fn test_status_refresh_is_silent() {
    let actions = actions_for(FakeAuth::signed_in("a@example.com"), UNREACHABLE);
    actions.store().set_notice(Some(Notice::info("ログインできました")));
    actions.store().set_status(CheckinStatus::NotChecked);

    actions.get_status().await;

    assert_eq!(actions.store().notice(), Some(Notice::info("ログインできました")));
    assert_eq!(actions.store().status(), CheckinStatus::NotChecked);
}

#[tokio::test]
async fn test_status_without_session_is_a_no_op() {
    let server = MockServer::start().await;
    let actions = actions(FakeAuth::signed_out(), &server);

    actions.get_status().await;

    assert!(actions.store().notice().is_none());
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_status_overwrites_with_whatever_came_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "forbidden" })))
        .mount(&server)
        .await;

    let actions = actions(FakeAuth::signed_in("a@example.com"), &server);
    actions.store().set_status(CheckinStatus::NotChecked);
    actions.get_status().await;

    assert_eq!(actions.store().status(), CheckinStatus::Unknown);
    assert!(actions.store().notice().is_none());
}

#[tokio::test]
async fn test_logout_always_resets_status() {
    let server = MockServer::start().await;
    let actions = actions(FakeAuth::signed_in("a@example.com"), &server);
    actions.store().set_status(CheckinStatus::Checked {
        at: Some("2024-01-01T00:00:00Z".to_string()),
    });

    actions.logout().await;

    assert_eq!(actions.store().status(), CheckinStatus::Unknown);
    assert_eq!(actions.store().notice(), Some(Notice::info("ログアウトしました")));
    assert!(actions.session().current_user().is_none());
}

#[tokio::test]
async fn test_signup_and_login_notices() {
    let server = MockServer::start().await;
    let auth = FakeAuth::signed_out();
    let actions = actions(auth.clone(), &server);

    actions.signup("a@example.com", "hunter22").await;
    assert_eq!(actions.store().notice(), Some(Notice::info("新規登録できました")));

    actions.login("a@example.com", "hunter22").await;
    assert_eq!(actions.store().notice(), Some(Notice::info("ログインできました")));

    auth.fail_next(AuthError::provider(
        "auth/invalid-credential",
        "Firebase: Error (auth/invalid-credential).",
    ));
    actions.login("a@example.com", "wrong").await;
    assert_eq!(
        actions.store().notice(),
        Some(Notice::error("Firebase: Error (auth/invalid-credential)."))
    );
}

#[tokio::test]
async fn test_blank_provider_message_uses_fallback() {
    let server = MockServer::start().await;
    let auth = FakeAuth::signed_out();
    let actions = actions(auth.clone(), &server);

    auth.fail_next(AuthError::provider("auth/internal-error", ""));
    actions.signup("a@example.com", "x").await;
    assert_eq!(actions.store().notice(), Some(Notice::error("新規登録に失敗しました")));

    auth.fail_next(AuthError::provider("auth/internal-error", ""));
    actions.login("a@example.com", "x").await;
    assert_eq!(actions.store().notice(), Some(Notice::error("ログインに失敗しました")));
}

//! Behaviour tests for the session token lifecycle.
//!
//! These scenarios walk the full contract: credentials buy a token, the
//! token buys a library session, and a global reset invalidates everything
//! at once.

use provider::domain::ports::{LoginService, TokenIssuer};
use provider::domain::{AuthToken, ErrorCode};
use provider::outbound::memory::in_memory_library_service;
use provider::test_support::{credentials, demo_catalogue, seeded_service};

#[tokio::test]
async fn issued_tokens_round_trip_through_login() {
    let service = seeded_service().await;

    let issued = service
        .issue_token(&credentials("alice", "opensesame"))
        .await
        .expect("issuance succeeds");
    assert_eq!(issued.user_id().as_ref(), "alice");
    assert_eq!(issued.nickname().as_ref(), "alice");

    let library = service
        .login(issued.auth_token())
        .await
        .expect("login succeeds");
    assert_eq!(library.identity().user_id().as_ref(), "alice");
    assert_eq!(library.identity().nickname().as_ref(), "alice");
}

#[tokio::test]
async fn wrong_password_and_unknown_user_fail_identically() {
    let service = seeded_service().await;

    let wrong_password = service
        .issue_token(&credentials("alice", "not-the-password"))
        .await
        .expect_err("wrong password must fail");
    let unknown_user = service
        .issue_token(&credentials("mallory", "opensesame"))
        .await
        .expect_err("unknown user must fail");

    assert_eq!(wrong_password.code(), ErrorCode::InvalidCredentials);
    assert_eq!(unknown_user.code(), ErrorCode::InvalidCredentials);
    assert_eq!(wrong_password.message(), unknown_user.message());
}

#[tokio::test]
async fn fabricated_tokens_are_rejected() {
    let service = seeded_service().await;

    let error = service
        .login(&AuthToken::new("not-a-real-token").expect("valid token shape"))
        .await
        .expect_err("fabricated token must fail");
    assert_eq!(error.code(), ErrorCode::InvalidAuthToken);
}

#[tokio::test]
async fn reset_invalidates_previously_issued_tokens() {
    let service = seeded_service().await;

    let issued = service
        .issue_token(&credentials("alice", "opensesame"))
        .await
        .expect("issuance succeeds");
    service.reset().await.expect("reset succeeds");

    let error = service
        .login(issued.auth_token())
        .await
        .expect_err("stale token must fail");
    assert_eq!(error.code(), ErrorCode::InvalidAuthToken);
}

#[tokio::test]
async fn reset_also_discards_registered_credentials() {
    let service = seeded_service().await;
    service.reset().await.expect("reset succeeds");

    let error = service
        .issue_token(&credentials("alice", "opensesame"))
        .await
        .expect_err("discarded user must fail");
    assert_eq!(error.code(), ErrorCode::InvalidCredentials);
}

#[tokio::test]
async fn each_issuance_mints_a_distinct_token() {
    let service = seeded_service().await;

    let first = service
        .issue_token(&credentials("alice", "opensesame"))
        .await
        .expect("first issuance succeeds");
    let second = service
        .issue_token(&credentials("alice", "opensesame"))
        .await
        .expect("second issuance succeeds");

    assert_ne!(first.auth_token(), second.auth_token());
    service
        .login(first.auth_token())
        .await
        .expect("first token still resolves");
    service
        .login(second.auth_token())
        .await
        .expect("second token resolves");
}

#[tokio::test]
async fn open_sessions_keep_their_snapshot_across_registration() {
    let service = in_memory_library_service();
    service
        .register_user(&credentials("alice", "opensesame"))
        .await
        .expect("registration succeeds");

    let issued = service
        .issue_token(&credentials("alice", "opensesame"))
        .await
        .expect("issuance succeeds");
    let early_session = service
        .login(issued.auth_token())
        .await
        .expect("login succeeds");
    assert_eq!(early_session.artists(&pagination::PageRequest::all()).total(), 0);

    service
        .register_artists(demo_catalogue())
        .await
        .expect("late registration succeeds");

    assert_eq!(
        early_session.artists(&pagination::PageRequest::all()).total(),
        0,
        "an open session must not observe later registration"
    );

    let late_session = service
        .login(issued.auth_token())
        .await
        .expect("re-login succeeds");
    assert_eq!(late_session.artists(&pagination::PageRequest::all()).total(), 4);
}

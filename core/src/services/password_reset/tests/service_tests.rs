//! Unit tests for the password reset token lifecycle

use std::sync::Arc;

use crate::domain::entities::reset_token::ResetToken;
use crate::errors::{DomainError, ResetError};
use crate::repositories::token_store::{MockTokenStore, TokenStore};
use crate::services::password_reset::{PasswordResetConfig, PasswordResetService};

use super::mocks::RecordingGateway;

fn reset_err(err: DomainError) -> ResetError {
    match err {
        DomainError::Reset(err) => err,
        other => panic!("expected reset error, got {other:?}"),
    }
}

fn service() -> (
    PasswordResetService<MockTokenStore, RecordingGateway>,
    Arc<MockTokenStore>,
    Arc<RecordingGateway>,
) {
    let store = Arc::new(MockTokenStore::new());
    let gateway = Arc::new(RecordingGateway::new());
    let service = PasswordResetService::new(
        store.clone(),
        gateway.clone(),
        PasswordResetConfig::default(),
    );
    (service, store, gateway)
}

#[tokio::test]
async fn test_issue_stores_token_and_sends_code() {
    let (service, store, gateway) = service();

    let outcome = service.issue("a@x.com").await.unwrap();

    assert_eq!(outcome.token.subject, "a@x.com");
    assert_eq!(outcome.token.code.len(), 6);
    assert!(outcome.email_dispatched);
    assert!(outcome.expires_in_seconds() > 3500);

    let stored = store.get("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.code, outcome.token.code);

    // The code went out through the email path
    assert_eq!(gateway.email_count(), 1);
    assert!(gateway.last_email_body().unwrap().contains(&outcome.token.code));
}

#[tokio::test]
async fn test_issue_survives_email_failure() {
    let (service, store, gateway) = service();
    gateway.fail_email();

    let outcome = service.issue("a@x.com").await.unwrap();

    assert!(!outcome.email_dispatched);
    // The token exists regardless of the send outcome
    assert!(store.get("a@x.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_verify_correct_code_sets_verified() {
    let (service, store, _) = service();
    let code = service.issue("a@x.com").await.unwrap().token.code;

    service.verify_code("a@x.com", &code).await.unwrap();

    let stored = store.get("a@x.com").await.unwrap().unwrap();
    assert!(stored.verified);
    assert_eq!(stored.attempts, 1); // the winning try counts
}

#[tokio::test]
async fn test_verify_wrong_code_reports_remaining() {
    let (service, store, _) = service();
    let code = service.issue("a@x.com").await.unwrap().token.code;
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let err = reset_err(service.verify_code("a@x.com", wrong).await.unwrap_err());
    assert_eq!(err, ResetError::InvalidCode { remaining: 4 });

    // Attempt was persisted
    let stored = store.get("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.attempts, 1);
    assert!(!stored.verified);
}

#[tokio::test]
async fn test_verify_unknown_subject_is_not_found() {
    let (service, _, _) = service();

    let err = reset_err(service.verify_code("ghost@x.com", "123456").await.unwrap_err());
    assert_eq!(err, ResetError::NotFound);
}

#[tokio::test]
async fn test_exhaustion_reported_and_record_retained() {
    let (service, store, _) = service();
    let code = service.issue("a@x.com").await.unwrap().token.code;
    let wrong = if code == "000000" { "111111" } else { "000000" };

    for _ in 0..5 {
        let err = reset_err(service.verify_code("a@x.com", wrong).await.unwrap_err());
        assert!(matches!(err, ResetError::InvalidCode { .. }));
    }

    // Cap reached: even the correct code is refused now
    let err = reset_err(service.verify_code("a@x.com", &code).await.unwrap_err());
    assert_eq!(err, ResetError::AttemptsExhausted);

    // Exhaustion does not purge; only expiry does
    assert!(store.get("a@x.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_reissue_overwrites_previous_token() {
    let (service, _, _) = service();

    let first = service.issue("a@x.com").await.unwrap().token.code;
    service.verify_code("a@x.com", &first).await.unwrap(); // even verified
    let second = service.issue("a@x.com").await.unwrap().token;

    assert!(!second.verified);
    if first != second.code {
        let err = reset_err(service.verify_code("a@x.com", &first).await.unwrap_err());
        assert!(matches!(err, ResetError::InvalidCode { .. }));
    }
}

#[tokio::test]
async fn test_expired_token_purged_on_verify() {
    let store = Arc::new(MockTokenStore::new());
    let config = PasswordResetConfig {
        code_expiration_minutes: 0,
        ..Default::default()
    };
    let service =
        PasswordResetService::new(store.clone(), Arc::new(RecordingGateway::new()), config);
    let code = service.issue("a@x.com").await.unwrap().token.code;

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let err = reset_err(service.verify_code("a@x.com", &code).await.unwrap_err());
    assert_eq!(err, ResetError::Expired);

    // Purged: the next verify no longer finds a record
    let err = reset_err(service.verify_code("a@x.com", &code).await.unwrap_err());
    assert_eq!(err, ResetError::NotFound);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_finalize_requires_prior_verification() {
    let (service, _, _) = service();
    let code = service.issue("a@x.com").await.unwrap().token.code;

    let err = reset_err(service.finalize("a@x.com", &code).await.unwrap_err());
    assert_eq!(err, ResetError::InvalidRequest);
}

#[tokio::test]
async fn test_finalize_rejects_wrong_code_even_when_verified() {
    let (service, _, _) = service();
    let code = service.issue("a@x.com").await.unwrap().token.code;
    let wrong = if code == "000000" { "111111" } else { "000000" };

    service.verify_code("a@x.com", &code).await.unwrap();

    let err = reset_err(service.finalize("a@x.com", wrong).await.unwrap_err());
    assert_eq!(err, ResetError::InvalidRequest);
}

#[tokio::test]
async fn test_finalize_consumes_exactly_once() {
    let (service, store, _) = service();
    let code = service.issue("a@x.com").await.unwrap().token.code;

    service.verify_code("a@x.com", &code).await.unwrap();
    service.finalize("a@x.com", &code).await.unwrap();

    assert!(store.is_empty().await);

    // Replay finds nothing
    let err = reset_err(service.finalize("a@x.com", &code).await.unwrap_err());
    assert_eq!(err, ResetError::InvalidRequest);
}

#[tokio::test]
async fn test_finalize_purges_expired_token() {
    let store = Arc::new(MockTokenStore::new());
    let config = PasswordResetConfig {
        code_expiration_minutes: 0,
        ..Default::default()
    };
    let service =
        PasswordResetService::new(store.clone(), Arc::new(RecordingGateway::new()), config);
    let code = service.issue("a@x.com").await.unwrap().token.code;

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let err = reset_err(service.finalize("a@x.com", &code).await.unwrap_err());
    assert_eq!(err, ResetError::Expired);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_full_reset_scenario() {
    // issue -> wrong guess -> correct guess -> finalize -> replayed finalize
    let (service, store, _) = service();

    // Seed a token with a known code so the scenario is deterministic
    let mut token = ResetToken::new("a@x.com".to_string());
    token.code = "123456".to_string();
    store.put(token).await.unwrap();

    let err = reset_err(service.verify_code("a@x.com", "000000").await.unwrap_err());
    assert_eq!(err, ResetError::InvalidCode { remaining: 4 });

    service.verify_code("a@x.com", "123456").await.unwrap();
    assert!(store.get("a@x.com").await.unwrap().unwrap().verified);

    service.finalize("a@x.com", "123456").await.unwrap();
    assert!(store.get("a@x.com").await.unwrap().is_none());

    let err = reset_err(service.finalize("a@x.com", "123456").await.unwrap_err());
    assert_eq!(err, ResetError::InvalidRequest);
}

#[tokio::test]
async fn test_concurrent_wrong_guesses_do_not_lose_attempts() {
    let (service, store, _) = service();
    let code = service.issue("a@x.com").await.unwrap().token.code;
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let service = Arc::new(service);
    let mut handles = Vec::new();
    for _ in 0..5 {
        let service = service.clone();
        let wrong = wrong.to_string();
        handles.push(tokio::spawn(async move {
            service.verify_code("a@x.com", &wrong).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_err());
    }

    // All five increments landed: the per-subject lock serialized them
    let stored = store.get("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.attempts, 5);
}

#[tokio::test]
async fn test_store_failure_surfaces_as_internal() {
    let gateway = Arc::new(RecordingGateway::new());
    let store = Arc::new(MockTokenStore::failing());
    let service = PasswordResetService::new(store, gateway, PasswordResetConfig::default());

    let err = service.issue("a@x.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
}

mod support;

use common::DashboardError;
use common::login::{AuthState, LoginGate};
use common::service::{MemorySession, SessionStore};

use support::{Call, FakeService};

#[tokio::test]
async fn successful_login_stores_token_and_opens_gate() {
    let session = MemorySession::default();
    let service = FakeService::new(session.clone(), Vec::new());
    let mut gate = LoginGate::default();

    gate.submit(&service, &session, "reviewer", "hunter2").await.unwrap();

    assert_eq!(gate.state(), AuthState::Authenticated);
    assert_eq!(session.token().unwrap().as_deref(), Some("token-for-reviewer"));
    assert_eq!(*service.calls.borrow(), vec![Call::Login("reviewer".to_string())]);
}

#[tokio::test]
async fn rejected_credentials_keep_gate_closed() {
    let session = MemorySession::default();
    let service = FakeService::new(session.clone(), Vec::new());
    let mut gate = LoginGate::default();

    let err = gate.submit(&service, &session, "reviewer", "wrong").await.unwrap_err();

    assert!(matches!(err, DashboardError::Authentication(_)));
    assert!(!gate.is_authenticated());
    assert_eq!(session.token().unwrap(), None);
}

#[tokio::test]
async fn network_failure_is_an_authentication_error_and_can_be_retried() {
    let session = MemorySession::default();
    let service = FakeService::new(session.clone(), Vec::new());
    let mut gate = LoginGate::default();

    service.fail("login");
    let err = gate.submit(&service, &session, "reviewer", "hunter2").await.unwrap_err();
    assert!(matches!(err, DashboardError::Authentication(_)));
    assert!(!gate.is_authenticated());

    service.recover("login");
    gate.submit(&service, &session, "reviewer", "hunter2").await.unwrap();
    assert!(gate.is_authenticated());
    assert_eq!(service.calls.borrow().len(), 2);
}

#[test]
fn stored_token_restores_authenticated_state() {
    assert!(!LoginGate::restore(&MemorySession::default()).is_authenticated());
    assert!(!LoginGate::restore(&MemorySession::with_token("")).is_authenticated());
    assert!(LoginGate::restore(&MemorySession::with_token("abc")).is_authenticated());
}

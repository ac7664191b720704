//! Login gate: exchanges credentials for a bearer token.

use log::{info, warn};

use crate::error::DashboardError;
use crate::service::{ApplicantService, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// Two-state gate in front of the dashboard. There is no logout transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginGate {
    state: AuthState,
}

impl Default for LoginGate {
    fn default() -> Self {
        Self {
            state: AuthState::Unauthenticated,
        }
    }
}

impl LoginGate {
    /// Starts authenticated when the session store already holds a token from
    /// an earlier login. Its validity is for the server to judge.
    pub fn restore(session: &impl SessionStore) -> Self {
        match session.token() {
            Ok(Some(token)) if !token.is_empty() => Self {
                state: AuthState::Authenticated,
            },
            Ok(_) => Self::default(),
            Err(err) => {
                warn!("could not read stored session: {err}");
                Self::default()
            }
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// Marks the gate open once a token has been stored.
    pub fn accept(&mut self) {
        self.state = AuthState::Authenticated;
    }

    /// Submits the credentials. On success the token is stored and the gate
    /// opens; on failure the gate stays closed and nothing is stored.
    pub async fn submit(
        &mut self,
        service: &impl ApplicantService,
        session: &impl SessionStore,
        username: &str,
        password: &str,
    ) -> Result<(), DashboardError> {
        let token = exchange_credentials(service, session, username, password).await?;
        self.accept();
        info!("signed in as {username} ({} byte token)", token.len());
        Ok(())
    }
}

/// Performs the credential exchange and persists the token, without touching
/// any gate. Used by the shell, whose async tasks cannot borrow component state.
pub async fn exchange_credentials(
    service: &impl ApplicantService,
    session: &impl SessionStore,
    username: &str,
    password: &str,
) -> Result<String, DashboardError> {
    let token = service.login(username, password).await.map_err(|err| {
        warn!("login for {username} failed: {err}");
        match err {
            DashboardError::Authentication(_) => err,
            other => DashboardError::Authentication(other.to_string()),
        }
    })?;
    session.set_token(&token)?;
    Ok(token)
}

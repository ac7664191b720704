//! Seams to the two external collaborators: the remote applicant service and
//! the session token store.
//!
//! The browser implementations live in the `frontend` crate (`gloo-net` and
//! `localStorage`); the in-memory [`MemorySession`] is used by tests and by
//! anything that runs outside a browser.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::DashboardError;
use crate::model::applicant::{Applicant, Status};
use crate::model::counts::Counts;

/// Key under which the bearer token is kept in the session store.
pub const TOKEN_KEY: &str = "token";

/// The remote HTTP API performing all durable state changes.
///
/// Futures are not required to be `Send`: everything runs on the browser's
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait ApplicantService {
    /// `POST /auth/login`; returns the bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<String, DashboardError>;

    /// `GET /applicants?status={status}`.
    async fn fetch_applicants(&self, status: Status) -> Result<Vec<Applicant>, DashboardError>;

    /// `GET /applicants/counts`.
    async fn fetch_counts(&self) -> Result<Counts, DashboardError>;

    /// `PUT /applicants/{id}/status`. The updated record in the response is ignored.
    async fn update_status(&self, id: &str, status: Status) -> Result<(), DashboardError>;
}

/// Process-wide storage for the session token.
pub trait SessionStore {
    fn token(&self) -> Result<Option<String>, DashboardError>;

    fn set_token(&self, token: &str) -> Result<(), DashboardError>;

    /// Value for the `Authorization` header. A missing token is sent as an
    /// empty bearer credential and left to the server to reject.
    fn bearer(&self) -> Result<String, DashboardError> {
        Ok(format!("Bearer {}", self.token()?.unwrap_or_default()))
    }
}

/// Session store held in memory; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Rc<RefCell<Option<String>>>,
}

impl MemorySession {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Result<Option<String>, DashboardError> {
        Ok(self.token.borrow().clone())
    }

    fn set_token(&self, token: &str) -> Result<(), DashboardError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }
}

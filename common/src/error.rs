use thiserror::Error;

/// Every failure the dashboard can surface to the reviewer.
///
/// None of them is retried automatically; the shell decides how to present
/// each kind (blocking alert for login, toast plus retry button for fetches,
/// toast for mutations, red search box for patterns).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Login failed: {0}")]
    Authentication(String),

    #[error("Could not load {what}: {reason}")]
    Fetch { what: &'static str, reason: String },

    #[error("Could not update applicant {id}: {reason}")]
    Mutation { id: String, reason: String },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Session storage unavailable: {0}")]
    Storage(String),
}

impl DashboardError {
    pub fn fetch(what: &'static str, reason: impl ToString) -> Self {
        DashboardError::Fetch {
            what,
            reason: reason.to_string(),
        }
    }

    pub fn mutation(id: impl Into<String>, reason: impl ToString) -> Self {
        DashboardError::Mutation {
            id: id.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the shell should offer a retry button for this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DashboardError::Fetch { .. })
    }
}

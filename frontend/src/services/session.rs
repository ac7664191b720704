use common::service::{SessionStore, TOKEN_KEY};
use common::DashboardError;
use web_sys::Storage;

/// Session token kept in `window.localStorage`, surviving page reloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Result<Storage, DashboardError> {
        web_sys::window()
            .ok_or_else(|| DashboardError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| DashboardError::Storage(format!("{e:?}")))?
            .ok_or_else(|| DashboardError::Storage("localStorage disabled".to_string()))
    }
}

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Result<Option<String>, DashboardError> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .map_err(|e| DashboardError::Storage(format!("{e:?}")))
    }

    fn set_token(&self, token: &str) -> Result<(), DashboardError> {
        Self::storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| DashboardError::Storage(format!("{e:?}")))
    }
}

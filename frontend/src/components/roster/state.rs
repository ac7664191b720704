use common::roster::RosterController;
use common::search::{QueryDescriptor, RegexScope};
use common::DashboardError;

/// State of the review screen.
///
/// All review data lives in `controller`; the remaining fields only mirror
/// what the search bar shows and what is in flight.
pub struct RosterComponent {
    pub controller: RosterController,

    /// Raw text of the search box.
    pub search_text: String,

    /// Whether the search box is interpreted as a regular expression.
    pub use_regex: bool,

    /// Last failed fetch, shown with a retry button until a fetch succeeds.
    pub fetch_error: Option<DashboardError>,

    /// Identifier of the applicant whose status write is in flight.
    pub pending_write: Option<String>,

    /// Set between `begin_load` and the matching response.
    pub loading: bool,
}

impl RosterComponent {
    pub fn new(regex_scope: RegexScope) -> Self {
        Self {
            controller: RosterController::new(regex_scope),
            search_text: String::new(),
            use_regex: false,
            fetch_error: None,
            pending_write: None,
            loading: false,
        }
    }

    pub fn query(&self) -> QueryDescriptor {
        QueryDescriptor::new(self.search_text.clone(), self.use_regex)
    }
}

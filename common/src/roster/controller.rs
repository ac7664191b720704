use log::{debug, warn};

use crate::error::DashboardError;
use crate::model::applicant::{Applicant, Status};
use crate::model::counts::Counts;
use crate::search::{QueryDescriptor, RegexScope, filter_positions};
use crate::service::ApplicantService;

/// Identifies one roster load. Only the ticket of the most recent
/// [`RosterController::begin_load`] is accepted by `finish_load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    status: Status,
}

impl LoadTicket {
    pub fn status(&self) -> Status {
        self.status
    }
}

/// Identifies one counts fetch. A ticket goes stale when a later counts
/// fetch starts or when a status change is applied after it was issued, so
/// a response taken before a local transfer never overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountsTicket {
    epoch: u64,
}

#[derive(Debug)]
pub struct RosterController {
    status_filter: Status,
    snapshot: Vec<Applicant>,
    query: QueryDescriptor,
    regex_scope: RegexScope,
    view: Vec<usize>,
    invalid_pattern: Option<DashboardError>,
    cursor: usize,
    counts: Option<Counts>,
    generation: u64,
    counts_epoch: u64,
}

impl Default for RosterController {
    fn default() -> Self {
        Self::new(RegexScope::default())
    }
}

impl RosterController {
    /// Empty controller filtering on pending applicants.
    pub fn new(regex_scope: RegexScope) -> Self {
        Self {
            status_filter: Status::Pending,
            snapshot: Vec::new(),
            query: QueryDescriptor::default(),
            regex_scope,
            view: Vec::new(),
            invalid_pattern: None,
            cursor: 0,
            counts: None,
            generation: 0,
            counts_epoch: 0,
        }
    }

    pub fn status_filter(&self) -> Status {
        self.status_filter
    }

    pub fn snapshot(&self) -> &[Applicant] {
        &self.snapshot
    }

    pub fn query(&self) -> &QueryDescriptor {
        &self.query
    }

    pub fn counts(&self) -> Option<&Counts> {
        self.counts.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set when the current regex query failed to compile; the view is empty then.
    pub fn invalid_pattern(&self) -> Option<&DashboardError> {
        self.invalid_pattern.as_ref()
    }

    /// Applicants of the filtered view, in snapshot order.
    pub fn filtered(&self) -> impl Iterator<Item = &Applicant> {
        self.view.iter().map(|&i| &self.snapshot[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    pub fn applicant(&self, id: &str) -> Option<&Applicant> {
        self.snapshot.iter().find(|a| a.id == id)
    }

    pub(super) fn applicant_mut(&mut self, id: &str) -> Option<&mut Applicant> {
        self.snapshot.iter_mut().find(|a| a.id == id)
    }

    /// Counts to adjust for an applied status change. Invalidates every
    /// counts fetch still in flight.
    pub(super) fn counts_for_transfer(&mut self) -> Option<&mut Counts> {
        self.counts_epoch += 1;
        self.counts.as_mut()
    }

    /// Switches the status filter and hands out the ticket for the fetch that
    /// has to follow. Any load still in flight becomes stale.
    pub fn begin_load(&mut self, status: Status) -> LoadTicket {
        self.generation += 1;
        self.status_filter = status;
        debug!("loading {status} applicants (generation {})", self.generation);
        LoadTicket {
            generation: self.generation,
            status,
        }
    }

    /// Whether `ticket` belongs to the most recent load.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replaces the snapshot wholesale if `ticket` is still current.
    ///
    /// Returns `false` and leaves everything untouched for a stale ticket.
    pub fn finish_load(&mut self, ticket: LoadTicket, applicants: Vec<Applicant>) -> bool {
        if !self.is_current(&ticket) {
            warn!(
                "discarding {} {} applicants from stale load (generation {}, current {})",
                applicants.len(),
                ticket.status,
                ticket.generation,
                self.generation
            );
            return false;
        }
        debug!("loaded {} {} applicants", applicants.len(), ticket.status);
        self.snapshot = applicants;
        self.refilter();
        self.cursor = 0;
        true
    }

    /// Fetches the applicants for `status` and installs them as the new snapshot.
    pub async fn load_roster(
        &mut self,
        service: &impl ApplicantService,
        status: Status,
    ) -> Result<(), DashboardError> {
        let ticket = self.begin_load(status);
        let applicants = fetch_roster(service, status).await?;
        self.finish_load(ticket, applicants);
        Ok(())
    }

    /// Hands out the ticket for a counts fetch that is about to start.
    pub fn begin_counts_load(&mut self) -> CountsTicket {
        self.counts_epoch += 1;
        CountsTicket {
            epoch: self.counts_epoch,
        }
    }

    pub fn is_current_counts(&self, ticket: &CountsTicket) -> bool {
        ticket.epoch == self.counts_epoch
    }

    /// Installs fetched counts if nothing newer happened since `ticket` was issued.
    pub fn finish_counts_load(&mut self, ticket: CountsTicket, counts: Counts) -> bool {
        if !self.is_current_counts(&ticket) {
            warn!(
                "discarding stale counts {counts:?} (epoch {}, current {})",
                ticket.epoch, self.counts_epoch
            );
            return false;
        }
        debug!("counts: {counts:?}");
        self.counts = Some(counts);
        true
    }

    /// Fetches the aggregate counts. On failure the previous counts stay.
    pub async fn load_counts(&mut self, service: &impl ApplicantService) -> Result<(), DashboardError> {
        let ticket = self.begin_counts_load();
        let counts = fetch_counts(service).await?;
        self.finish_counts_load(ticket, counts);
        Ok(())
    }

    /// Installs a new query. The cursor goes back to 0 when the view changed.
    pub fn set_query(&mut self, query: QueryDescriptor) {
        if query == self.query {
            return;
        }
        self.query = query;
        let before = std::mem::take(&mut self.view);
        self.refilter();
        if self.view != before || self.cursor >= self.view.len() {
            self.cursor = 0;
        }
    }

    /// Moves the cursor by `delta`, clamped to the view; no wraparound.
    pub fn advance(&mut self, delta: isize) {
        let Some(last) = self.view.len().checked_sub(1) else {
            self.cursor = 0;
            return;
        };
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn current_applicant(&self) -> Option<&Applicant> {
        self.view.get(self.cursor).map(|&i| &self.snapshot[i])
    }

    /// One-based position of the cursor and the view length, for "n of m".
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.view.is_empty()).then(|| (self.cursor + 1, self.view.len()))
    }

    fn refilter(&mut self) {
        let outcome = filter_positions(&self.snapshot, &self.query, self.regex_scope);
        self.view = outcome.positions;
        self.invalid_pattern = outcome.invalid_pattern;
    }
}

/// `GET /applicants?status=...`, with failures reported as fetch errors.
///
/// Shared by [`RosterController::load_roster`] and the browser shell, which
/// runs it in a detached task between `begin_load` and `finish_load`.
pub async fn fetch_roster(
    service: &impl ApplicantService,
    status: Status,
) -> Result<Vec<Applicant>, DashboardError> {
    service.fetch_applicants(status).await.map_err(|err| {
        warn!("fetching {status} applicants failed: {err}");
        as_fetch_error("applicants", err)
    })
}

/// `GET /applicants/counts`, with failures reported as fetch errors.
pub async fn fetch_counts(service: &impl ApplicantService) -> Result<Counts, DashboardError> {
    service.fetch_counts().await.map_err(|err| {
        warn!("fetching counts failed: {err}");
        as_fetch_error("counts", err)
    })
}

/// Wraps a transport-level failure as a fetch failure of `what`.
fn as_fetch_error(what: &'static str, err: DashboardError) -> DashboardError {
    match err {
        DashboardError::Fetch { .. } => err,
        other => DashboardError::fetch(what, other),
    }
}

//! Status mutation: remote write first, local reconciliation second.
//!
//! Nothing local changes before the service confirms the write. After it
//! does, the applicant is patched in the snapshot by identifier (the filtered
//! view is a projection of the snapshot, so it follows) and one applicant is
//! moved between the count buckets. The cursor is never touched.

use log::{info, warn};

use super::controller::RosterController;
use crate::error::DashboardError;
use crate::model::applicant::Status;
use crate::service::ApplicantService;

/// A status change resolved against the snapshot, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: String,
    pub from: Status,
    pub to: Status,
}

/// Sends the write for `change` to the service.
pub async fn submit_status_change(
    service: &impl ApplicantService,
    change: StatusChange,
) -> Result<StatusChange, DashboardError> {
    let result = service.update_status(&change.id, change.to).await;
    match result {
        Ok(()) => Ok(change),
        Err(err) => {
            warn!("setting {} to {} failed: {err}", change.id, change.to);
            Err(match err {
                DashboardError::Mutation { .. } => err,
                other => DashboardError::mutation(change.id, other),
            })
        }
    }
}

impl RosterController {
    /// Looks up the applicant's current status. Unknown identifiers fail
    /// before anything is sent.
    pub fn prepare_status_change(&self, id: &str, to: Status) -> Result<StatusChange, DashboardError> {
        let applicant = self
            .applicant(id)
            .ok_or_else(|| DashboardError::mutation(id, "not in the current roster"))?;
        Ok(StatusChange {
            id: id.to_string(),
            from: applicant.status,
            to,
        })
    }

    /// Mirrors a confirmed write locally.
    ///
    /// The snapshot may have been replaced while the write was in flight; the
    /// patch then only lands if the applicant is part of the new snapshot, but
    /// the counts move regardless because the server accepted the change.
    pub fn apply_status_change(&mut self, change: &StatusChange) {
        match self.applicant_mut(&change.id) {
            Some(applicant) => applicant.status = change.to,
            None => warn!("{} left the roster before its status change landed", change.id),
        }
        if let Some(counts) = self.counts_for_transfer() {
            counts.transfer(change.from, change.to);
        }
        info!("{} is now {} (was {})", change.id, change.to, change.from);
    }

    /// Writes `to` as the new status of applicant `id`, then reconciles.
    pub async fn set_status(
        &mut self,
        service: &impl ApplicantService,
        id: &str,
        to: Status,
    ) -> Result<(), DashboardError> {
        let change = self.prepare_status_change(id, to)?;
        let change = submit_status_change(service, change).await?;
        self.apply_status_change(&change);
        Ok(())
    }
}

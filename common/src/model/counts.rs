use serde::{Deserialize, Serialize};

use super::applicant::Status;

/// Aggregate number of applicants per status, as returned by
/// `GET /applicants/counts`.
///
/// Fetched once and then kept in step locally by [`Counts::transfer`] after
/// every successful status write. `total` never changes locally because a
/// status change only moves an applicant between buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub accepted: u32,
    #[serde(default)]
    pub rejected: u32,
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub confirmed: u32,
}

impl Counts {
    pub fn get(&self, status: Status) -> u32 {
        match status {
            Status::Pending => self.pending,
            Status::Accepted => self.accepted,
            Status::Rejected => self.rejected,
            Status::Confirmed => self.confirmed,
        }
    }

    fn bucket_mut(&mut self, status: Status) -> &mut u32 {
        match status {
            Status::Pending => &mut self.pending,
            Status::Accepted => &mut self.accepted,
            Status::Rejected => &mut self.rejected,
            Status::Confirmed => &mut self.confirmed,
        }
    }

    /// Moves one applicant from `from` to `to`.
    ///
    /// A no-op when both are equal. The decrement saturates at zero: counts
    /// that already drifted below server truth stay at zero instead of wrapping.
    pub fn transfer(&mut self, from: Status, to: Status) {
        if from == to {
            return;
        }
        let old = self.bucket_mut(from);
        *old = old.saturating_sub(1);
        *self.bucket_mut(to) += 1;
    }
}

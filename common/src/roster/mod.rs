//! Roster controller: the single owner of the dashboard's review state.
//!
//! The controller holds the snapshot fetched for the active status filter and
//! the aggregate counts. The filtered view is a projection (positions into the
//! snapshot) recomputed whenever the snapshot or query changes, so a status
//! change written to the snapshot is immediately visible through the view.
//!
//! Loading is split in two halves, [`RosterController::begin_load`] and
//! [`RosterController::finish_load`], so the browser shell can run the fetch
//! in a detached task; each load carries a generation ticket and only the
//! latest one is applied. [`RosterController::load_roster`] chains both for
//! callers that can await while holding the controller. Counts fetches carry
//! their own ticket, which also goes stale once a status change is applied.

mod controller;
mod mutation;

pub use controller::{CountsTicket, LoadTicket, RosterController, fetch_counts, fetch_roster};
pub use mutation::{StatusChange, submit_status_change};

use common::model::applicant::{Applicant, Status};
use common::model::counts::Counts;
use common::roster::{CountsTicket, LoadTicket, StatusChange};
use common::DashboardError;

pub enum Msg {
    LoadCounts,
    CountsLoaded(CountsTicket, Result<Counts, DashboardError>),
    SetStatusFilter(Status),
    RosterLoaded(LoadTicket, Result<Vec<Applicant>, DashboardError>),
    SearchInput(String),
    ToggleRegex(bool),
    FilterNonDuke,
    ClearSearch,
    Previous,
    Next,
    ChangeStatus(Status),
    StatusChanged(Result<StatusChange, DashboardError>),
    Retry,
}

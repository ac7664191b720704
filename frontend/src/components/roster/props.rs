use common::model::applicant::Status;
use common::search::RegexScope;
use yew::prelude::*;

use crate::services::HttpApplicantService;

#[derive(Properties, PartialEq, Clone)]
pub struct RosterProps {
    pub service: HttpApplicantService,

    /// Status partition shown when the dashboard opens.
    #[prop_or(Status::Pending)]
    pub initial_status: Status,

    /// Fields a regex search is tested against.
    #[prop_or_default]
    pub regex_scope: RegexScope,
}

use yew::prelude::*;

use crate::services::HttpApplicantService;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub service: HttpApplicantService,
    /// Emitted once the token has been stored.
    pub on_login: Callback<()>,
}

use common::DashboardError;

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Finished(Result<(), DashboardError>),
}

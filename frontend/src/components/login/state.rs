/// Credentials typed so far. No client-side validation is applied.
#[derive(Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Set while the credential exchange is in flight.
    pub submitting: bool,
}

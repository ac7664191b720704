pub mod http;
pub mod session;

pub use http::HttpApplicantService;
pub use session::LocalStorageSession;

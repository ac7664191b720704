//! `ApplicantService` over `gloo-net`.
//!
//! Every authenticated request reads the token from the session store at send
//! time. Non-2xx answers become errors carrying the status code and the body
//! text; nothing is retried.

use std::rc::Rc;

use gloo_net::http::{Request, Response};

use common::config::DashboardConfig;
use common::model::applicant::{Applicant, Status};
use common::model::counts::Counts;
use common::requests::{LoginRequest, LoginResponse, StatusUpdateRequest};
use common::service::{ApplicantService, SessionStore};
use common::DashboardError;

use super::session::LocalStorageSession;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpApplicantService {
    config: Rc<DashboardConfig>,
    session: LocalStorageSession,
}

impl HttpApplicantService {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Rc::new(config),
            session: LocalStorageSession,
        }
    }

    pub fn session(&self) -> LocalStorageSession {
        self.session
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn bearer(&self) -> Result<String, String> {
        self.session.bearer().map_err(|e| e.to_string())
    }
}

async fn ensure_success(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(format!("HTTP {} {}", response.status(), body.trim()))
}

impl ApplicantService for HttpApplicantService {
    async fn login(&self, username: &str, password: &str) -> Result<String, DashboardError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let exchange = async {
            let response = Request::post(&self.url("/auth/login"))
                .json(&body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let response = ensure_success(response).await?;
            response
                .json::<LoginResponse>()
                .await
                .map(|r| r.token)
                .map_err(|e| e.to_string())
        };
        exchange.await.map_err(DashboardError::Authentication)
    }

    async fn fetch_applicants(&self, status: Status) -> Result<Vec<Applicant>, DashboardError> {
        let fetch = async {
            let response = Request::get(&self.url("/applicants"))
                .query([("status", status.as_str())])
                .header("Authorization", &self.bearer()?)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            ensure_success(response)
                .await?
                .json::<Vec<Applicant>>()
                .await
                .map_err(|e| e.to_string())
        };
        fetch
            .await
            .map_err(|reason| DashboardError::fetch("applicants", reason))
    }

    async fn fetch_counts(&self) -> Result<Counts, DashboardError> {
        let fetch = async {
            let response = Request::get(&self.url("/applicants/counts"))
                .header("Authorization", &self.bearer()?)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            ensure_success(response)
                .await?
                .json::<Counts>()
                .await
                .map_err(|e| e.to_string())
        };
        fetch
            .await
            .map_err(|reason| DashboardError::fetch("counts", reason))
    }

    async fn update_status(&self, id: &str, status: Status) -> Result<(), DashboardError> {
        let write = async {
            let response = Request::put(&self.url(&format!("/applicants/{id}/status")))
                .header("Authorization", &self.bearer()?)
                .json(&StatusUpdateRequest { status })
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            ensure_success(response).await.map(|_| ())
        };
        write
            .await
            .map_err(|reason| DashboardError::mutation(id, reason))
    }
}

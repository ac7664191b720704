//! In-memory applicant service shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;

use common::DashboardError;
use common::model::applicant::{Applicant, Status};
use common::model::counts::Counts;
use common::service::{ApplicantService, MemorySession, SessionStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Applicants(Status, String),
    Counts(String),
    UpdateStatus(String, Status, String),
}

/// Serves a fixed set of applicants and records every call together with the
/// `Authorization` header it would have carried.
pub struct FakeService {
    pub session: MemorySession,
    applicants: RefCell<Vec<Applicant>>,
    failing: RefCell<HashSet<&'static str>>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeService {
    pub fn new(session: MemorySession, applicants: Vec<Applicant>) -> Self {
        Self {
            session,
            applicants: RefCell::new(applicants),
            failing: RefCell::new(HashSet::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Makes the named endpoint (`login`, `applicants`, `counts`, `status`) fail.
    pub fn fail(&self, endpoint: &'static str) {
        self.failing.borrow_mut().insert(endpoint);
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.failing.borrow_mut().remove(endpoint);
    }

    fn check(&self, endpoint: &'static str) -> Result<(), String> {
        if self.failing.borrow().contains(endpoint) {
            Err(format!("{endpoint}: HTTP 503"))
        } else {
            Ok(())
        }
    }

    fn bearer(&self) -> String {
        self.session.bearer().unwrap()
    }

    pub fn server_status(&self, id: &str) -> Option<Status> {
        self.applicants
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.status)
    }
}

impl ApplicantService for FakeService {
    async fn login(&self, username: &str, password: &str) -> Result<String, DashboardError> {
        self.calls.borrow_mut().push(Call::Login(username.to_string()));
        self.check("login").map_err(DashboardError::Authentication)?;
        if password == "hunter2" {
            Ok(format!("token-for-{username}"))
        } else {
            Err(DashboardError::Authentication("HTTP 401".to_string()))
        }
    }

    async fn fetch_applicants(&self, status: Status) -> Result<Vec<Applicant>, DashboardError> {
        self.calls
            .borrow_mut()
            .push(Call::Applicants(status, self.bearer()));
        self.check("applicants")
            .map_err(|e| DashboardError::fetch("applicants", e))?;
        Ok(self
            .applicants
            .borrow()
            .iter()
            .filter(|a| a.status == status)
            .cloned()
            .collect())
    }

    async fn fetch_counts(&self) -> Result<Counts, DashboardError> {
        self.calls.borrow_mut().push(Call::Counts(self.bearer()));
        self.check("counts").map_err(|e| DashboardError::fetch("counts", e))?;
        let applicants = self.applicants.borrow();
        let mut counts = Counts {
            total: applicants.len() as u32,
            ..Counts::default()
        };
        for a in applicants.iter() {
            match a.status {
                Status::Pending => counts.pending += 1,
                Status::Accepted => counts.accepted += 1,
                Status::Rejected => counts.rejected += 1,
                Status::Confirmed => counts.confirmed += 1,
            }
        }
        Ok(counts)
    }

    async fn update_status(&self, id: &str, status: Status) -> Result<(), DashboardError> {
        self.calls
            .borrow_mut()
            .push(Call::UpdateStatus(id.to_string(), status, self.bearer()));
        self.check("status").map_err(|e| DashboardError::mutation(id, e))?;
        let mut applicants = self.applicants.borrow_mut();
        let applicant = applicants
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DashboardError::mutation(id, "HTTP 404"))?;
        applicant.status = status;
        Ok(())
    }
}

pub fn applicant(id: &str, status: Status, university: &str) -> Applicant {
    let mut a = Applicant::new(id, status);
    a.name = Some(format!("Applicant {id}"));
    a.university = Some(university.to_string());
    a
}

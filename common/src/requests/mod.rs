//! Request and response bodies exchanged with the applicant service.

use serde::{Deserialize, Serialize};

use crate::model::applicant::Status;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful answer to `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `PUT /applicants/{id}/status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Status,
}

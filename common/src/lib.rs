//! Platform-independent core of the applicant review dashboard.
//!
//! Everything in here compiles for both the browser (`wasm32-unknown-unknown`)
//! and the host, so the filter engine, the roster controller and the status
//! mutation flow are tested natively while the `frontend` crate supplies the
//! browser implementations of [`service::ApplicantService`] and
//! [`service::SessionStore`].

pub mod config;
pub mod error;
pub mod login;
pub mod model;
pub mod requests;
pub mod roster;
pub mod search;
pub mod service;

pub use error::DashboardError;

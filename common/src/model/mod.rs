pub mod applicant;
pub mod counts;

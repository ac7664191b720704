use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Review outcome of an applicant.
///
/// The wire form is the lowercase word (`"pending"`, `"accepted"`, ...), both
/// in the `status` query parameter of `GET /applicants` and in the body of
/// `PUT /applicants/{id}/status`. Anything else fails deserialization, so an
/// `Applicant` always carries exactly one of the four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Accepted,
    Rejected,
    Confirmed,
}

impl Status {
    /// Every status, in the order the filter buttons are rendered.
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Accepted,
        Status::Rejected,
        Status::Confirmed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Accepted => "accepted",
            Status::Rejected => "rejected",
            Status::Confirmed => "confirmed",
        }
    }

    /// Background color used for the status banner and the active filter button.
    pub fn color(self) -> &'static str {
        match self {
            Status::Accepted => "#4CAF50",
            Status::Rejected => "#f44336",
            Status::Pending => "#FFA500",
            Status::Confirmed => "#2196F3",
        }
    }

    /// Label of the filter button selecting this status.
    pub fn filter_label(self) -> &'static str {
        match self {
            Status::Pending => "Pending Applications",
            Status::Accepted => "Accepted Applications",
            Status::Rejected => "Rejected Applications",
            Status::Confirmed => "Confirmed Applications",
        }
    }

    /// Label of the decision button that moves an applicant to this status.
    pub fn action_label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Accepted => "Accept",
            Status::Rejected => "Reject",
            Status::Confirmed => "Confirm",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color shown when there is no applicant to take a status from.
pub const UNKNOWN_STATUS_COLOR: &str = "#808080";

/// One hackathon submission as returned by `GET /applicants`.
///
/// Only `_id` and `status` are required. The profile, academic and essay
/// fields are display-only and any of them may be missing from the payload;
/// numeric-looking fields (`age`, `graduationYear`) are accepted as either JSON
/// numbers or strings and kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: Status,

    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pref_name: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub age: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub graduation_year: Option<String>,

    #[serde(default, rename = "whyhackduke")]
    pub why_hackduke: Option<String>,
    #[serde(default, rename = "whytrack")]
    pub why_track: Option<String>,

    #[serde(default)]
    pub resume_url: Option<String>,
}

impl Applicant {
    /// Creates an applicant with only the identity and status set.
    pub fn new(id: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            status,
            name: None,
            pref_name: None,
            age: None,
            country: None,
            email: None,
            phone: None,
            university: None,
            major: None,
            graduation_year: None,
            why_hackduke: None,
            why_track: None,
            resume_url: None,
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "_id": "65f0c1",
            "status": "pending",
            "name": "Ada Lovelace",
            "prefName": "Ada",
            "age": 21,
            "email": "ada@example.com",
            "university": "Duke University",
            "graduationYear": "2026",
            "whyhackduke": "To build things.",
            "whytrack": "Health.",
            "resumeUrl": "https://example.com/ada.pdf",
            "__v": 0
        }"#;

        let applicant: Applicant = serde_json::from_str(json).unwrap();
        assert_eq!(applicant.id, "65f0c1");
        assert_eq!(applicant.status, Status::Pending);
        assert_eq!(applicant.pref_name.as_deref(), Some("Ada"));
        assert_eq!(applicant.age.as_deref(), Some("21"));
        assert_eq!(applicant.graduation_year.as_deref(), Some("2026"));
        assert_eq!(applicant.why_hackduke.as_deref(), Some("To build things."));
        assert_eq!(applicant.country, None);
    }

    #[test]
    fn rejects_unknown_status() {
        let json = r#"{ "_id": "1", "status": "waitlisted" }"#;
        assert!(serde_json::from_str::<Applicant>(json).is_err());
    }

    #[test]
    fn status_wire_form_is_lowercase() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}

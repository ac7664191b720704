//! Deployment configuration, resolved from build-time environment variables.
//!
//! | Variable            | Effect                                                    |
//! |---------------------|-----------------------------------------------------------|
//! | `DASHBOARD_ENV`     | `local` targets the backend on `localhost:5000`           |
//! | `DASHBOARD_API_URL` | explicit base URL, wins over `DASHBOARD_ENV`              |
//!
//! The frontend captures both with `option_env!` and passes them to
//! [`DashboardConfig::resolve`] once at startup; the logger and the HTTP
//! service share that single value.

use log::LevelFilter;

pub const LOCAL_API_URL: &str = "http://localhost:5000";
pub const HOSTED_API_URL: &str = "https://dashboard-backend-e2bs.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL of the applicant service, without trailing slash.
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl DashboardConfig {
    pub fn resolve(env: Option<&str>, api_url: Option<&str>) -> Self {
        let local = env.is_some_and(|e| e.trim().eq_ignore_ascii_case("local"));
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(if local { LOCAL_API_URL } else { HOSTED_API_URL })
            .trim_end_matches('/')
            .to_string();
        Self {
            api_url,
            log_level: if local { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }

    /// Absolute URL of `path` (which starts with `/`) on the applicant service.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_hosted_backend() {
        let config = DashboardConfig::resolve(None, None);
        assert_eq!(config.api_url, HOSTED_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn local_env_targets_localhost() {
        let config = DashboardConfig::resolve(Some("local"), None);
        assert_eq!(config.api_url, LOCAL_API_URL);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.endpoint("/auth/login"), "http://localhost:5000/auth/login");
    }

    #[test]
    fn explicit_url_wins_and_loses_trailing_slash() {
        let config = DashboardConfig::resolve(Some("production"), Some("https://api.example.com/ "));
        assert_eq!(config.api_url, "https://api.example.com");

        let blank = DashboardConfig::resolve(Some("local"), Some("  "));
        assert_eq!(blank.api_url, LOCAL_API_URL);
    }

    #[test]
    fn one_resolution_decides_both_url_and_log_level() {
        let config = DashboardConfig::resolve(Some(" LOCAL "), Some("https://staging.example.com"));
        assert_eq!(config.api_url, "https://staging.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}

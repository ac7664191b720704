use common::config::DashboardConfig;

/// Configuration baked in at build time (`DASHBOARD_ENV`, `DASHBOARD_API_URL`).
pub fn load() -> DashboardConfig {
    DashboardConfig::resolve(option_env!("DASHBOARD_ENV"), option_env!("DASHBOARD_API_URL"))
}

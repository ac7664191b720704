use crate::app::{App, AppProps};
use crate::services::HttpApplicantService;

mod app;
mod components;
mod config;
mod logging;
mod services;

fn main() {
    let config = config::load();
    logging::init(config.log_level);
    log::info!("applicant service at {}", config.api_url);
    let service = HttpApplicantService::new(config);
    yew::Renderer::<App>::with_props(AppProps { service }).render();
}

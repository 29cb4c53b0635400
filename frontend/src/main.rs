use crate::app::{App, AppProps};

mod app;
mod components;
mod config;
mod layout;
mod logging;
mod service;

fn main() {
    let config = config::load();
    logging::init(config.log_level);
    log::info!("brand admin talking to {}", config.api_base_url);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

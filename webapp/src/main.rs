#![allow(non_snake_case)]
use dioxus::prelude::*;

use page::config::{SiteConfig, parse_site_config};
use tracing::{Level, error, info};

mod common;

mod components;

mod home;
use home::Landing;

// copy for the page, compiled in so there is nothing to fetch at runtime
const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    // a broken config should not take the page down, so fall back to the shipped copy
    // and report the error once the logger is up
    let (config, config_err) = match parse_site_config(SITE_CONFIG) {
        Ok(val) => (val, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    let level = config.log_level().unwrap_or(Level::INFO);
    dioxus_logger::init(level).expect("failed to init logger");

    match config_err {
        Some(err) => error!("using default site config: {err:#}"),
        None => info!("site config loaded"),
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::PAGE_STYLES}" }
        Landing {}
    }
}

//! Veracity Checker web front end
//!
//! Client-side rendered. The detection service host is baked in at build
//! time from `VERACITY_API_HOST`; without it the checker refuses to start.

mod app;
mod components;
mod pages;

use leptos::*;
use vc_core::{ApiConfig, HttpDetectionClient};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let client = ApiConfig::from_optional(option_env!("VERACITY_API_HOST"))
        .and_then(|config| HttpDetectionClient::new(&config));

    match client {
        Ok(client) => {
            tracing::info!("Detection endpoint: {}", client.endpoint());
            mount_to_body(move || {
                view! {
                    <app::App client=client/>
                }
            });
        }
        Err(e) => {
            tracing::error!("Refusing to start: {}", e);
            let message = e.to_string();
            mount_to_body(move || {
                view! {
                    <app::ConfigError message=message/>
                }
            });
        }
    }
}

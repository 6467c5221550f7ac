//! Todo Widget Entry Point

mod app;
mod bindings;
mod config;
mod intent;
mod models;
#[cfg(feature = "self-check")]
mod self_check;
mod store;
mod template;
mod view;

use app::TodoApp;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let _ = console_log::init_with_level(config.level());
    if let Err(err) = loaded {
        log::warn!("[APP] Using default config: {}", err);
    }

    #[cfg(feature = "self-check")]
    {
        if let Err(err) = self_check::run() {
            log::error!("[APP] {}", err);
            return;
        }
    }

    log::info!("[APP] Starting todo widget");
    mount_to_body(move || view! { <TodoApp config=config /> });
}

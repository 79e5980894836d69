//! Browser entry point.
//!
//! Installs the panic hook and console logger, loads the site settings the
//! host serves next to the bundle, then mounts the app.

use app::App;
use chronicle_client::{BrowserTransport, SITE_SETTINGS_PATH, fetch_site_settings};
use chronicle_core::SiteSettings;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    wasm_bindgen_futures::spawn_local(async {
        let settings = load_settings().await;
        log::info!("Mounting {} (API at {})", settings.title, settings.api_base_url);
        leptos::mount::mount_to_body(move || view! { <App settings=settings.clone() /> });
    });
}

async fn load_settings() -> SiteSettings {
    match fetch_site_settings(&BrowserTransport, SITE_SETTINGS_PATH).await {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Using default site settings: {err}");
            SiteSettings::default()
        }
    }
}

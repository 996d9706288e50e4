//! Mergington Signup
//!
//! WASM entry point. Build and serve with `trunk serve`; the activities
//! service is expected on the same origin unless `config/client.toml` says
//! otherwise.

use leptos::*;

use mergington_signup::app::App;
use mergington_signup::{logging, ClientConfig};

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = match ClientConfig::bundled() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };

    logging::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "bundled config rejected, using defaults");
    }
    tracing::info!("Mergington signup client v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(move || view! { <App config=config /> });
}

//! Browser entry point. Build with Trunk and the `csr` feature.

fn main() {
    #[cfg(feature = "csr")]
    {
        use healthcard::app::App;
        use healthcard::config::ClientConfig;
        use leptos::prelude::*;

        let config = ClientConfig::from_build_env();
        let level = config.as_ref().map_or(healthcard::config::DEFAULT_LOG_LEVEL, |c| c.log_level);
        healthcard::logging::init(level);
        let config = config.unwrap_or_else(|e| {
            log::warn!("falling back to default config: {e}");
            ClientConfig::default()
        });
        log::info!("starting healthcard client (api base {:?})", config.api_base);

        leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
    }
}

mod config;
mod constants;
mod walkthrough;

use config::AppConfig;
use prompthub_catalog::ThemeContext;

#[tokio::main]
async fn main() {
    // Initialize logging, RUST_LOG overrides the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("PromptHub starting...");

    let config = match config::data_dir() {
        Some(dir) => match AppConfig::load(&dir).await {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", dir);
                config
            }
            Err(e) => {
                log::warn!("Failed to load configuration, using defaults: {}", e);
                AppConfig::default()
            }
        },
        None => {
            log::warn!("No data directory available, using default configuration");
            AppConfig::default()
        }
    };

    let mut theme = ThemeContext::new(config.theme);
    walkthrough::browse_catalog(&mut theme);

    let service = match prompthub_auth::service::from_config(&config.auth) {
        Ok(service) => service,
        Err(e) => {
            log::error!("Failed to create auth service: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = walkthrough::sign_up_and_sign_in(service, &config).await {
        log::error!("Auth walkthrough failed: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = walkthrough::register_prompt().await {
        log::error!("Registration walkthrough failed: {}", e);
        std::process::exit(1);
    }

    log::info!("PromptHub walkthrough complete");
}

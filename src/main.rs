use dioxus_logger::tracing::{self, Level};
use taxdesk::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to initialize logger");
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

//! Questsmith Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questsmith_player::runner::{config::ClientConfig, run, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "questsmith_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Questsmith Player");

    let config = ClientConfig::from_env();
    run(RunnerDeps::from_config(config));
}

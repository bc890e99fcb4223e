use crate::config::AppConfig;
use crate::router::handle;
use crate::store::seed::{load_seed, Seed};
use crate::store::Store;
use astra::Server;

mod config;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod spreadsheets;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Configuration from the environment (and .env)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Seed the in-memory state
    let seed = match &config.seed_path {
        Some(path) => match load_seed(path) {
            Ok(seed) => seed,
            Err(e) => {
                log::error!("❌ Seed loading failed: {e}");
                std::process::exit(1);
            }
        },
        None => {
            log::info!("no HOA_SEED_PATH set, using built-in demo data");
            Seed::default()
        }
    };
    let store = Store::from_seed(seed);

    // 3️⃣ Start the server
    log::info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}

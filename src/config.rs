use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::ServerError;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// TOML or JSON seed file. The built-in demo data is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads `HOA_BIND_ADDR`, `HOA_MAX_WORKERS` and `HOA_SEED_PATH`, after
    /// loading a `.env` file if one is present.
    pub fn from_env() -> Result<Self, ServerError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("HOA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::Config(format!("HOA_BIND_ADDR `{bind_raw}` is invalid: {e}")))?;

        let max_workers = match lookup("HOA_MAX_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ServerError::Config(format!(
                        "HOA_MAX_WORKERS must be a positive integer, got `{raw}`"
                    )))
                }
            },
            None => DEFAULT_MAX_WORKERS,
        };

        let seed_path = lookup("HOA_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(AppConfig {
            bind_addr,
            max_workers,
            seed_path,
        })
    }
}

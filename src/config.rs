use crate::error::AppError;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://statlocker.gg/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub game_mode: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("STATLOCKER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let game_mode = match env::var("STATLOCKER_GAME_MODE") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "STATLOCKER_GAME_MODE must be a number, got '{}'",
                    raw
                ))
            })?,
            Err(_) => 1,
        };

        Ok(Config { base_url, game_mode })
    }
}

use crate::config::Config;
use crate::error::AppError;

use super::endpoints;
use super::models::*;

pub struct StatLockerClient {
    config: Config,
}

impl StatLockerClient {
    pub fn new(config: Config) -> Self {
        StatLockerClient { config }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let response = ureq::get(url)
            .set("User-Agent", "deadlock_tracker/0.1.0")
            .call()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        response
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))
    }

    pub fn get_steam_profile(&self, steam_id: u64) -> Result<SteamProfileDto, AppError> {
        let url = endpoints::profile_url(&self.config.base_url, steam_id);
        let body = self.execute_request(&url)?;
        parse_steam_profile(&body)
    }

    pub fn get_match_history(&self, steam_id: u64) -> Result<MatchHistoryDto, AppError> {
        let url = endpoints::match_history_url(
            &self.config.base_url,
            steam_id,
            self.config.game_mode,
        );
        let body = self.execute_request(&url)?;
        parse_match_history(&body)
    }

    /// Name lookup never fails: any transport or decode problem falls back
    /// to the Steam ID's decimal form.
    pub fn resolve_player_name(&self, steam_id: u64) -> String {
        self.get_steam_profile(steam_id)
            .ok()
            .and_then(|profile| profile.display_name())
            .unwrap_or_else(|| steam_id.to_string())
    }
}

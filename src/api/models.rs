use crate::error::AppError;
use serde::Deserialize;

// Steam profile lookup response
#[derive(Debug, Deserialize)]
pub struct SteamProfileDto {
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SteamProfileDto {
    /// Best-effort display name: `personaname` first, then `name`.
    /// Empty strings are treated as missing.
    pub fn display_name(&self) -> Option<String> {
        self.personaname
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.clone().filter(|s| !s.is_empty()))
    }
}

// Match history response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistoryDto {
    pub match_history: Vec<MatchRecordDto>,
    pub profile_aggregate_stats: AggregateStatsDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStatsDto {
    pub total_matches: u64,
}

// One played match. Match fields are snake_case in the payload
// except globalRank.
#[derive(Debug, Deserialize, Clone)]
pub struct MatchRecordDto {
    pub hero_id: u32,
    pub match_result: i64,
    pub player_team: i64,
    #[serde(rename = "globalRank", default)]
    pub global_rank: Option<f64>,
    #[serde(default)]
    pub player_kills: Option<u32>,
    #[serde(default)]
    pub player_deaths: Option<u32>,
    #[serde(default)]
    pub player_assists: Option<u32>,
}

pub fn parse_steam_profile(body: &str) -> Result<SteamProfileDto, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))
}

pub fn parse_match_history(body: &str) -> Result<MatchHistoryDto, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))
}

use crate::api::models::MatchRecordDto;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct HeroAggregate {
    pub hero_id: u32,
    pub games: usize,
    pub wins: usize,
    pub mvp_total: f64,
    pub mvp_count: usize,
    pub kda_total: f64,
    /// Position of this hero's first match in the input, used to keep
    /// ties deterministic when sorting by games.
    pub first_seen: usize,
}

impl HeroAggregate {
    pub fn new(hero_id: u32, first_seen: usize) -> Self {
        HeroAggregate {
            hero_id,
            games: 0,
            wins: 0,
            mvp_total: 0.0,
            mvp_count: 0,
            kda_total: 0.0,
            first_seen,
        }
    }
}

/// Accumulates per-hero stats over a player's match list. One aggregate
/// per hero, created on first encounter.
pub struct HeroStatsTracker {
    stats: HashMap<u32, HeroAggregate>,
}

impl HeroStatsTracker {
    pub fn new() -> Self {
        HeroStatsTracker {
            stats: HashMap::new(),
        }
    }

    pub fn record_match(&mut self, record: &MatchRecordDto) {
        let next_ordinal = self.stats.len();
        let entry = self
            .stats
            .entry(record.hero_id)
            .or_insert_with(|| HeroAggregate::new(record.hero_id, next_ordinal));

        entry.games += 1;

        if record.match_result == record.player_team {
            entry.wins += 1;
        }

        // A rank of zero means no MVP placement was recorded for the match.
        if let Some(rank) = record.global_rank {
            if rank != 0.0 {
                entry.mvp_total += rank;
                entry.mvp_count += 1;
            }
        }

        let kills = record.player_kills.unwrap_or(0);
        let assists = record.player_assists.unwrap_or(0);
        let deaths = record.player_deaths.unwrap_or(1).max(1);
        entry.kda_total += (kills + assists) as f64 / deaths as f64;
    }

    /// Drains the tracker into aggregates ordered by first encounter.
    pub fn into_aggregates(self) -> Vec<HeroAggregate> {
        let mut aggregates: Vec<HeroAggregate> = self.stats.into_values().collect();
        aggregates.sort_by_key(|a| a.first_seen);
        aggregates
    }
}

use super::hero_stats::HeroStatsTracker;
use crate::api::models::MatchRecordDto;
use crate::heroes;

#[derive(Debug, Clone)]
pub struct HeroSummaryRow {
    pub hero_name: String,
    pub games: usize,
    /// Win percentage in [0, 100], rounded to one decimal.
    pub win_rate: f64,
    /// Average MVP rank, rounded to one decimal. None when no match
    /// carried a rank value.
    pub avg_mvp: Option<f64>,
    /// Average per-match KDA, rounded to two decimals.
    pub avg_kda: f64,
}

/// One player's resolved name plus their per-hero summary rows.
#[derive(Debug, Clone)]
pub struct PlayerReport {
    pub player_name: String,
    pub heroes: Vec<HeroSummaryRow>,
}

/// Aggregates a match list into per-hero summary rows, sorted by games
/// played descending. Ties keep first-seen order. A positive `top_k`
/// truncates to the K most-played heroes.
pub fn summarize(matches: &[MatchRecordDto], top_k: Option<usize>) -> Vec<HeroSummaryRow> {
    let mut tracker = HeroStatsTracker::new();
    for record in matches {
        tracker.record_match(record);
    }

    let mut rows: Vec<HeroSummaryRow> = tracker
        .into_aggregates()
        .into_iter()
        .map(|agg| {
            let games = agg.games;
            let avg_mvp = if agg.mvp_count > 0 {
                Some(round1(agg.mvp_total / agg.mvp_count as f64))
            } else {
                None
            };
            HeroSummaryRow {
                hero_name: heroes::hero_name(agg.hero_id),
                games,
                win_rate: round1(agg.wins as f64 / games as f64 * 100.0),
                avg_mvp,
                avg_kda: round2(agg.kda_total / games as f64),
            }
        })
        .collect();

    // Stable sort, so equal game counts preserve first-seen order.
    rows.sort_by(|a, b| b.games.cmp(&a.games));

    if let Some(k) = top_k {
        if k > 0 {
            rows.truncate(k);
        }
    }

    rows
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_record(
        hero_id: u32,
        won: bool,
        kda: (u32, u32, u32),
        rank: Option<f64>,
    ) -> MatchRecordDto {
        MatchRecordDto {
            hero_id,
            match_result: 1,
            player_team: if won { 1 } else { 0 },
            global_rank: rank,
            player_kills: Some(kda.0),
            player_deaths: Some(kda.1),
            player_assists: Some(kda.2),
        }
    }

    #[test]
    fn infernus_two_match_example() {
        let matches = vec![
            match_record(1, true, (10, 2, 4), None),
            match_record(1, false, (2, 4, 0), None),
        ];

        let rows = summarize(&matches, None);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.hero_name, "Infernus");
        assert_eq!(row.games, 2);
        assert_eq!(row.win_rate, 50.0);
        assert_eq!(row.avg_kda, 3.75);
        assert_eq!(row.avg_mvp, None);
    }

    #[test]
    fn win_rate_extremes() {
        let all_wins = vec![
            match_record(2, true, (1, 1, 1), None),
            match_record(2, true, (1, 1, 1), None),
        ];
        assert_eq!(summarize(&all_wins, None)[0].win_rate, 100.0);

        let all_losses = vec![
            match_record(2, false, (1, 1, 1), None),
            match_record(2, false, (1, 1, 1), None),
        ];
        assert_eq!(summarize(&all_losses, None)[0].win_rate, 0.0);
    }

    #[test]
    fn avg_mvp_present_only_with_ranked_matches() {
        let matches = vec![
            match_record(3, true, (1, 1, 1), Some(100.0)),
            match_record(3, false, (1, 1, 1), None),
            match_record(3, true, (1, 1, 1), Some(201.0)),
        ];

        let rows = summarize(&matches, None);
        // Only the two ranked matches contribute: (100 + 201) / 2.
        assert_eq!(rows[0].avg_mvp, Some(150.5));
    }

    #[test]
    fn rows_sorted_by_games_desc_with_stable_ties() {
        let matches = vec![
            match_record(13, true, (1, 1, 1), None),
            match_record(7, true, (1, 1, 1), None),
            match_record(1, true, (1, 1, 1), None),
            match_record(1, false, (1, 1, 1), None),
            match_record(7, false, (1, 1, 1), None),
        ];

        let names: Vec<String> = summarize(&matches, None)
            .into_iter()
            .map(|r| r.hero_name)
            .collect();

        // Wraith and Infernus are tied at two games; Wraith was seen first.
        assert_eq!(names, vec!["Wraith", "Infernus", "Haze"]);
    }

    #[test]
    fn equal_games_keep_first_seen_order() {
        let matches = vec![
            match_record(13, true, (1, 1, 1), None),
            match_record(7, true, (1, 1, 1), None),
            match_record(1, true, (1, 1, 1), None),
        ];

        let names: Vec<String> = summarize(&matches, None)
            .into_iter()
            .map(|r| r.hero_name)
            .collect();
        assert_eq!(names, vec!["Haze", "Wraith", "Infernus"]);
    }

    #[test]
    fn top_k_truncates_after_sorting() {
        let matches = vec![
            match_record(13, true, (1, 1, 1), None),
            match_record(7, true, (1, 1, 1), None),
            match_record(7, false, (1, 1, 1), None),
            match_record(1, true, (1, 1, 1), None),
        ];

        let rows = summarize(&matches, Some(1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hero_name, "Wraith");

        // K larger than the hero count returns everything.
        assert_eq!(summarize(&matches, Some(10)).len(), 3);
        // K of zero means unlimited.
        assert_eq!(summarize(&matches, Some(0)).len(), 3);
    }

    #[test]
    fn games_sum_equals_match_count() {
        let matches: Vec<MatchRecordDto> = [1, 2, 1, 3, 2, 1, 13]
            .iter()
            .map(|&id| match_record(id, true, (0, 0, 0), None))
            .collect();

        let total: usize = summarize(&matches, None).iter().map(|r| r.games).sum();
        assert_eq!(total, matches.len());
    }
}

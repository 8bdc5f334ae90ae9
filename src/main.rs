mod analysis;
mod api;
mod config;
mod display;
mod error;
mod export;
mod heroes;

use analysis::summary::{self, PlayerReport};
use api::client::StatLockerClient;
use clap::Parser;
use config::Config;
use display::output::{
    display_error, display_hero_summary, display_info, display_player_header, display_success,
};
use error::AppError;
use indicatif::ProgressBar;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Deadlock Tracker")]
#[command(about = "Aggregate per-hero Deadlock stats from StatLocker", long_about = None)]
struct Args {
    /// One or more Steam IDs
    #[arg(required = true)]
    steam_ids: Vec<String>,

    /// Limit output to the top K heroes by games played
    #[arg(short = 'k', long = "top")]
    top: Option<usize>,

    /// Output CSV file
    #[arg(short, long, default_value = "stats.csv")]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let client = StatLockerClient::new(config);

    let pb = ProgressBar::new(args.steam_ids.len() as u64);

    let mut reports: Vec<PlayerReport> = Vec::new();

    for raw_id in &args.steam_ids {
        pb.inc(1);

        let steam_id: u64 = match raw_id.parse() {
            Ok(id) => id,
            Err(_) => {
                display_error(&format!("Skipping invalid ID: {}", raw_id));
                continue;
            }
        };

        display_player_header(steam_id);

        // A failed fetch skips this player; the rest still get processed.
        let history = match client.get_match_history(steam_id) {
            Ok(history) => history,
            Err(e) => {
                display_error(&format!("{}: {}", steam_id, e));
                continue;
            }
        };

        // The API may return fewer matches than the profile total reports.
        // Coverage is informational only.
        display_info(&format!(
            "Fetched {} / {} matches",
            history.match_history.len(),
            history.profile_aggregate_stats.total_matches
        ));

        let rows = summary::summarize(&history.match_history, args.top);
        if rows.is_empty() {
            continue;
        }

        let player_name = client.resolve_player_name(steam_id);
        display_hero_summary(&player_name, &rows);

        reports.push(PlayerReport {
            player_name,
            heroes: rows,
        });
    }

    pb.finish_and_clear();

    export::write_csv(&args.output, &reports)?;
    display_success(&format!("Saved to {}", args.output.display()));

    Ok(())
}

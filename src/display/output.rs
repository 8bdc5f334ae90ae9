use crate::analysis::summary::HeroSummaryRow;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct HeroRow {
    #[tabled(rename = "Hero")]
    hero: String,
    #[tabled(rename = "Games")]
    games: String,
    #[tabled(rename = "WR%")]
    win_rate: String,
    #[tabled(rename = "Avg MVP")]
    avg_mvp: String,
    #[tabled(rename = "Avg KDA")]
    avg_kda: String,
}

pub fn display_hero_summary(player_name: &str, rows: &[HeroSummaryRow]) {
    println!(
        "\n{}",
        format!("🎮 Hero stats for {}", player_name).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if rows.is_empty() {
        println!("{}", "No matches found for this player".yellow());
        return;
    }

    let table_rows: Vec<HeroRow> = rows
        .iter()
        .map(|row| HeroRow {
            hero: row.hero_name.clone(),
            games: row.games.to_string(),
            win_rate: format!("{:.1}%", row.win_rate),
            avg_mvp: row
                .avg_mvp
                .map(|mvp| format!("{:.1}", mvp))
                .unwrap_or_else(|| "N/A".to_string()),
            avg_kda: format!("{:.2}", row.avg_kda),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

/// Per-player section header, preceded by a blank line so consecutive
/// player blocks stay visually separated.
pub fn display_player_header(steam_id: u64) {
    println!("{}", player_header(steam_id));
}

fn player_header(steam_id: u64) -> String {
    format!("\n=== {} ===", steam_id)
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

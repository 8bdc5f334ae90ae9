use crate::analysis::summary::PlayerReport;
use crate::error::AppError;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const COLUMN_HEADER: [&str; 6] = ["Hero", "Games", "WR%", "Avg MVP", "Avg KDA", "Analysis"];

/// Writes one block per player: a name row, the column header, one row
/// per hero, then a blank separator line. The Analysis column is always
/// empty, reserved for manual commentary.
pub fn write_csv(path: &Path, reports: &[PlayerReport]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::CsvError(e.to_string()))?;
    write_reports(file, reports)
}

fn write_reports<W: Write>(mut out: W, reports: &[PlayerReport]) -> Result<(), AppError> {
    for report in reports {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut out);

        writer
            .write_record([report.player_name.as_str()])
            .map_err(|e| AppError::CsvError(e.to_string()))?;
        writer
            .write_record(COLUMN_HEADER)
            .map_err(|e| AppError::CsvError(e.to_string()))?;

        for row in &report.heroes {
            let avg_mvp = row
                .avg_mvp
                .map(|mvp| format!("{:.1}", mvp))
                .unwrap_or_else(|| "N/A".to_string());

            writer
                .write_record([
                    row.hero_name.clone(),
                    row.games.to_string(),
                    format!("{:.1}%", row.win_rate),
                    avg_mvp,
                    format!("{:.2}", row.avg_kda),
                    String::new(),
                ])
                .map_err(|e| AppError::CsvError(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| AppError::CsvError(e.to_string()))?;
        drop(writer);

        // The csv crate serializes any empty record as a lone `""` field,
        // so the blank separator line goes to the underlying writer.
        out.write_all(b"\n")
            .map_err(|e| AppError::CsvError(e.to_string()))?;
    }

    Ok(())
}

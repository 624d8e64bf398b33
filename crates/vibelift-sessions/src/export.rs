use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};

use crate::types::WorkoutSession;

pub const CSV_HEADER: [&str; 7] = [
    "Date",
    "Day",
    "Exercise",
    "Set Type",
    "Label",
    "Weight (lbs)",
    "Reps",
];

/// Session date as `YYYY-MM-DD` in local time.
pub fn format_date(epoch_millis: i64) -> String {
    match Local.timestamp_millis_opt(epoch_millis).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => epoch_millis.to_string(),
    }
}

/// `vibelift_export_YYYY-MM-DD.csv` for the given day.
pub fn default_export_name(now: i64) -> String {
    format!("vibelift_export_{}.csv", format_date(now))
}

/// Write one row per set, blank sets included.
pub fn write_csv<W: Write>(writer: W, history: &[WorkoutSession]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for session in history {
        let date = format_date(session.date);
        for ex in &session.exercises {
            for set in &ex.sets {
                let weight = set.weight.to_string();
                let reps = set.reps.to_string();
                wtr.write_record([
                    date.as_str(),
                    session.day_name.as_str(),
                    ex.name.as_str(),
                    set.set_type.as_str(),
                    set.label.as_str(),
                    weight.as_str(),
                    reps.as_str(),
                ])?;
                rows += 1;
            }
        }
    }

    wtr.flush()?;
    Ok(rows)
}

/// Export history to a CSV file, returning the number of set rows written.
pub fn export_csv(path: &Path, history: &[WorkoutSession]) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    let rows = write_csv(file, history)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    tracing::info!(rows, path = %path.display(), "Exported history");
    Ok(rows)
}

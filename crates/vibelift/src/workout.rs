use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use vibelift_sessions::{
    find_day, resolve_best, session_volume, DayConfig, HistoryStore, WorkoutLog,
};

use crate::render::{format_volume, target_line};

/// Pick the exercises to log. With no names requested the whole pool is used.
pub fn select_exercises(day: &DayConfig, requested: &[String]) -> Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(day.pool.clone());
    }

    for (i, name) in requested.iter().enumerate() {
        if requested[..i].contains(name) {
            anyhow::bail!("'{}' was requested more than once", name);
        }
        if !day.pool.contains(name) {
            anyhow::bail!(
                "'{}' is not part of {}. Choose from: {}",
                name,
                day.title,
                day.pool.join(", ")
            );
        }
    }

    Ok(requested.to_vec())
}

fn choose_day(split: &[DayConfig], day_id: Option<u32>) -> Result<DayConfig> {
    if let Some(id) = day_id {
        return find_day(split, id)
            .cloned()
            .with_context(|| format!("No training day with id {}", id));
    }

    let items: Vec<String> = split
        .iter()
        .map(|d| format!("Split {}: {}", d.id, d.title))
        .collect();
    let selection = Select::new()
        .with_prompt("Choose your path")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(split[selection].clone())
}

fn choose_exercises(day: &DayConfig) -> Result<Vec<String>> {
    let defaults = vec![true; day.pool.len()];
    let picked = MultiSelect::new()
        .with_prompt("Exercise pipeline (space to toggle)")
        .items(&day.pool)
        .defaults(&defaults)
        .interact()?;

    if picked.is_empty() {
        anyhow::bail!("No exercises selected");
    }

    Ok(picked.into_iter().map(|i| day.pool[i].clone()).collect())
}

/// Interactive logging flow. The session is only written once every
/// exercise has been walked through and the user confirms.
pub fn run_log(
    store: &HistoryStore,
    split: &[DayConfig],
    day_id: Option<u32>,
    requested: &[String],
    unit: &str,
) -> Result<()> {
    let history = store.load();
    let day = choose_day(split, day_id)?;
    let exercises = if requested.is_empty() && day_id.is_none() {
        choose_exercises(&day)?
    } else {
        select_exercises(&day, requested)?
    };

    let mut log = WorkoutLog::new(&day, &exercises)?;
    tracing::info!(day = %day.title, exercises = exercises.len(), "Workout started");

    let total = exercises.len();
    for (ex_idx, name) in exercises.iter().enumerate() {
        println!();
        println!(
            "{}",
            format!("STATION {} OF {}", ex_idx + 1, total).bright_cyan()
        );
        println!("{}", name.bold());
        println!("{}", target_line(resolve_best(name, &history).as_ref(), unit));

        let labels: Vec<String> = log.exercises()[ex_idx]
            .sets
            .iter()
            .map(|s| s.label.clone())
            .collect();
        for (set_idx, label) in labels.iter().enumerate() {
            let weight: f64 = Input::new()
                .with_prompt(format!("  {} {}", label, unit))
                .default(0.0)
                .show_default(false)
                .validate_with(|w: &f64| -> Result<(), &str> {
                    if w.is_finite() {
                        Ok(())
                    } else {
                        Err("Enter a number")
                    }
                })
                .interact_text()?;
            let reps: i64 = Input::new()
                .with_prompt(format!("  {} reps", label))
                .default(0)
                .show_default(false)
                .interact_text()?;
            log.update_set(ex_idx, set_idx, weight, reps)?;
        }
    }

    println!();
    let complete = Confirm::new()
        .with_prompt("Complete session?")
        .default(true)
        .interact()?;
    if !complete {
        println!("{}", "Session discarded.".dimmed());
        return Ok(());
    }

    let session = log.finish(chrono::Utc::now().timestamp_millis());
    if session.exercises.is_empty() {
        println!("{}", "Nothing was logged; session not saved.".dimmed());
        return Ok(());
    }

    let volume = session_volume(&session);
    let history = store.add(session)?;
    println!(
        "{} Saved. Session volume {} {} ({} sessions on record)",
        "->".bright_green(),
        format_volume(volume).bright_cyan(),
        unit,
        history.len()
    );

    Ok(())
}

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use vibelift_sessions::{format_date, session_volume, HistoryStore, SetEntry, WorkoutSession};

use crate::render::format_volume;

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List logged sessions, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every set of a session
    Show {
        /// Session ID (launches interactive picker if omitted)
        id: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Permanently delete a session
    Delete {
        /// Session ID (launches interactive picker if omitted)
        id: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn handle_history_command(
    store: &HistoryStore,
    action: HistoryAction,
    unit: &str,
) -> Result<()> {
    match action {
        HistoryAction::List { json } => {
            let history = store.load();

            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else if history.is_empty() {
                println!("{}", "No history detected.".dimmed());
            } else {
                print_history_table(&history, unit);
            }
        }
        HistoryAction::Show { id, json } => {
            let history = store.load();
            let id = resolve_session_id(&history, id)?;
            let session = history
                .iter()
                .find(|s| s.id == id)
                .with_context(|| format!("Session not found: {}", id))?;

            if json {
                println!("{}", serde_json::to_string_pretty(session)?);
            } else {
                print_session_detail(session, unit);
            }
        }
        HistoryAction::Delete { id, yes } => {
            let history = store.load();
            let id = resolve_session_id(&history, id)?;

            if !yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "PERMANENT DELETION: wipe session {} from the record?",
                        id
                    ))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Kept.".dimmed());
                    return Ok(());
                }
            }

            let remaining = store.delete(&id)?;
            println!(
                "{} Deleted {} ({} sessions left)",
                "->".bright_red(),
                id,
                remaining.len()
            );
        }
    }

    Ok(())
}

fn resolve_session_id(history: &[WorkoutSession], id: Option<String>) -> Result<String> {
    if let Some(id) = id {
        return Ok(id);
    }

    // Interactive picker
    if history.is_empty() {
        anyhow::bail!("No sessions found.");
    }

    let items: Vec<String> = history
        .iter()
        .map(|s| {
            format!(
                "{} | {} | {} exercises",
                format_date(s.date),
                s.day_name,
                s.exercises.len()
            )
        })
        .collect();

    let selection = dialoguer::FuzzySelect::new()
        .with_prompt("Select a session")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(history[selection].id.clone())
}

fn print_history_table(history: &[WorkoutSession], unit: &str) {
    println!(
        "{:<15} {:<12} {:<24} {:<6} {}",
        "ID".dimmed(),
        "DATE".dimmed(),
        "DAY".dimmed(),
        "EXS".dimmed(),
        format!("VOLUME ({})", unit).dimmed(),
    );

    for s in history {
        println!(
            "{:<15} {:<12} {:<24} {:<6} {}",
            s.id,
            format_date(s.date),
            s.day_name.bright_cyan(),
            s.exercises.len(),
            format_volume(session_volume(s)),
        );
    }
}

fn print_session_detail(session: &WorkoutSession, unit: &str) {
    println!("{}", "=== Session Detail ===".bright_blue().bold());
    println!("{}  {}", "ID:".dimmed(), session.id);
    println!("{}  {}", "Day:".dimmed(), session.day_name.bright_cyan());
    println!("{}  {}", "Date:".dimmed(), format_date(session.date));
    println!(
        "{}  {} {}",
        "Volume:".dimmed(),
        format_volume(session_volume(session)),
        unit
    );

    for ex in &session.exercises {
        println!();
        println!(
            "  {} {}",
            ex.name.bold(),
            format!("({} sets)", ex.performed_sets()).dimmed()
        );
        for set in ex.sets.iter().filter(|s| s.is_performed()) {
            println!("{}", set_line(set, unit));
        }
    }
}

/// Pad before coloring: escape codes would otherwise count toward the width.
fn set_line(set: &SetEntry, unit: &str) -> String {
    let padded = format!("{:<24}", set.label);
    let label = if set.is_working() {
        padded.bright_cyan()
    } else {
        padded.dimmed()
    };
    format!("    {} {}{} x {}", label, set.weight, unit, set.reps)
}

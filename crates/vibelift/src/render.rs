//! Terminal rendering for dashboard and best-set output.

use colored::Colorize;

use vibelift_sessions::{format_date, BestPerformance, Dashboard, VolumePoint};

const BAR_WIDTH: usize = 30;

/// Volume with thousands separators; fractions kept to one decimal.
pub fn format_volume(volume: f64) -> String {
    let rounded = (volume * 10.0).round() / 10.0;
    let negative = rounded < 0.0;
    let whole = rounded.abs().trunc() as u64;
    let frac = ((rounded.abs() - rounded.abs().trunc()) * 10.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if frac == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// Horizontal bar per week, scaled to the largest week.
pub fn chart_lines(weekly: &[VolumePoint]) -> Vec<String> {
    let max = weekly.iter().map(|p| p.volume).fold(0.0_f64, f64::max);

    weekly
        .iter()
        .map(|p| {
            let len = if max > 0.0 && p.volume > 0.0 {
                ((p.volume / max) * BAR_WIDTH as f64).ceil() as usize
            } else {
                0
            };
            format!(
                "{:<3} {:<width$} {}",
                p.label,
                "#".repeat(len),
                format_volume(p.volume),
                width = BAR_WIDTH
            )
        })
        .collect()
}

pub fn print_dashboard(dashboard: &Dashboard, unit: &str) {
    println!(
        "{} {}",
        "=== Performance Volume ===".bright_blue().bold(),
        format!("({})", unit).dimmed()
    );
    let lines = chart_lines(&dashboard.weekly);
    let last_idx = lines.len().saturating_sub(1);
    for (i, line) in lines.iter().enumerate() {
        // Current week is highlighted.
        if i == last_idx {
            println!("{}", line.bright_cyan());
        } else {
            println!("{}", line.dimmed());
        }
    }

    println!();
    println!("{}", "=== Last Activity ===".bright_blue().bold());
    match &dashboard.last {
        Some(last) => {
            println!("{}  {}", "Day:".dimmed(), last.day_name.bold());
            println!("{}  {}", "Date:".dimmed(), format_date(last.date));
            println!(
                "{}  {} {}",
                "Volume:".dimmed(),
                format_volume(last.volume).bright_cyan(),
                unit
            );
            println!("{}  {}", "Exercises:".dimmed(), last.exercise_count);
        }
        None => println!("{}", "Waiting for your first lift...".dimmed()),
    }
}

/// "Target to Beat" line shown before logging an exercise.
pub fn target_line(best: Option<&BestPerformance>, unit: &str) -> String {
    match best {
        Some(b) => format!(
            "{} {} x {} reps",
            "Target to Beat:".dimmed(),
            format!("{}{}", b.weight, unit).bright_cyan(),
            b.reps
        ),
        None => format!(
            "{} {}",
            "Target to Beat:".dimmed(),
            "New Record Opportunity".italic()
        ),
    }
}

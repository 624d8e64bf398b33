use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use vibelift_logging::LogFormat;
use vibelift_sessions::{
    dashboard, default_export_name, export_csv, resolve_best, HistoryStore,
};

mod config;
mod history;
mod render;
mod workout;

use config::Config;
use history::{handle_history_command, HistoryAction};

#[derive(Parser, Debug)]
#[command(
    name = "vibelift",
    about = "Personal workout log with progressive-overload guidance",
    version,
    author
)]
struct Cli {
    /// History file (default: <data dir>/vibelift/vibelift_history_v1.json)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Config file (default: <config dir>/vibelift/vibelift.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormatChoice>,

    /// Log level filter (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List training days and their exercise pools
    Days,

    /// Log a workout interactively
    Log {
        /// Training day id (prompts if omitted)
        #[arg(short, long)]
        day: Option<u32>,

        /// Exercise to include; repeat for several (default: whole pool)
        #[arg(short, long = "exercise")]
        exercises: Vec<String>,
    },

    /// Browse or delete logged sessions
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Weekly volume chart and last activity
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Best working set from the last time an exercise was logged
    Best {
        /// Exercise name, exactly as logged
        exercise: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export every logged set to CSV
    Export {
        /// Output file (default: vibelift_export_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Json => LogFormat::Json,
            LogFormatChoice::Compact => LogFormat::Compact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // CLI flags win over the config file.
    let log_format = cli
        .log_format
        .map(LogFormat::from)
        .or(config.log_format)
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or("warn");
    let _log_guard =
        vibelift_logging::init_tracing(log_level, log_format, config.log_file.as_deref())
            .context("Failed to initialize logging")?;

    let store = match cli.data_file.clone().or_else(|| config.data_file.clone()) {
        Some(path) => HistoryStore::with_path(path),
        None => HistoryStore::new()?,
    };
    tracing::debug!(path = ?store.path(), "Using history file");

    let unit = config.unit();
    let now = chrono::Utc::now().timestamp_millis();

    match cli.command {
        Command::Days => {
            for day in config.split() {
                println!("{} {}", format!("[{}]", day.id).bright_blue(), day.title.bold());
                for ex in &day.pool {
                    println!("    {}", ex);
                }
            }
        }
        Command::Log { day, exercises } => {
            workout::run_log(&store, &config.split(), day, &exercises, unit)?;
        }
        Command::History { action } => {
            handle_history_command(&store, action, unit)?;
        }
        Command::Dashboard { json } => {
            let summary = dashboard(&store.load(), now);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                render::print_dashboard(&summary, unit);
            }
        }
        Command::Best { exercise, json } => {
            let best = resolve_best(&exercise, &store.load());

            if json {
                println!("{}", serde_json::to_string_pretty(&best)?);
            } else {
                println!("{}", exercise.bold());
                println!("{}", render::target_line(best.as_ref(), unit));
            }
        }
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(default_export_name(now)));
            let rows = export_csv(&path, &store.load())?;
            println!(
                "{} Wrote {} rows to {}",
                "->".bright_green(),
                rows,
                path.display()
            );
        }
    }

    Ok(())
}

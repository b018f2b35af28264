//! Fitlog CLI - workout log for strength, cardio and endurance exercises.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitlog_cli::{Config, Console, Tracker};
use fitlog_progress::ProgressReport;
use fitlog_storage::TextFileStorage;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Track strength, cardio and endurance workouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log file holding all entries [default: log.txt]
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Do not clear the terminal between screens
    #[arg(long)]
    no_clear: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an exercise
    Add {
        #[command(subcommand)]
        exercise: AddCommand,
    },
    /// List every logged exercise
    List {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show progress per exercise
    Progress,
    /// Remove every logged exercise
    Clear,
}

#[derive(Subcommand)]
enum AddCommand {
    /// Sets of repetitions, e.g. push-ups
    Strength {
        /// Exercise name
        name: String,
        /// Number of sets
        #[arg(long)]
        sets: String,
        /// Reps per set
        #[arg(long)]
        reps: String,
        /// Date as dd/MM/yyyy (default: today)
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Timed sets, e.g. plank
    Cardio {
        /// Exercise name
        name: String,
        /// Duration per set, e.g. 1m30s
        #[arg(long)]
        duration: String,
        /// Number of sets
        #[arg(long)]
        sets: String,
        /// Date as dd/MM/yyyy (default: today)
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Distance over time, e.g. running
    Endurance {
        /// Exercise name
        name: String,
        /// Distance, e.g. 5km or 400m
        #[arg(long)]
        distance: String,
        /// Duration, e.g. 25m30s
        #[arg(long)]
        duration: String,
        /// Date as dd/MM/yyyy (default: today)
        #[arg(long, default_value = "")]
        date: String,
    },
}

fn init_logging(verbose: bool) {
    // Console output owns stdout, so logs go to stderr
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let defaults = Config::default();
    let config = Config {
        log_file: cli.log_file.unwrap_or(defaults.log_file),
        clear_screen: defaults.clear_screen && !cli.no_clear,
    };

    let storage = TextFileStorage::new(&config.log_file);
    let log_path = storage.path().display().to_string();
    let (mut tracker, warning) = Tracker::open(storage);
    if let Some(e) = warning {
        eprintln!("Error loading log {log_path}: {e}");
    }

    match cli.command {
        None => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout().lock())
                .with_clear_screen(config.clear_screen);
            console.run(&mut tracker)?;
        }
        Some(Commands::Add { exercise }) => {
            match exercise {
                AddCommand::Strength { name, sets, reps, date } => {
                    tracker.add_strength_exercise(&name, &sets, &reps, &date)?
                }
                AddCommand::Cardio { name, duration, sets, date } => {
                    tracker.add_cardio_exercise(&name, &duration, &sets, &date)?
                }
                AddCommand::Endurance { name, distance, duration, date } => {
                    tracker.add_endurance_exercise(&name, &distance, &duration, &date)?
                }
            }
            if let Some(entry) = tracker.entries().last() {
                println!("Added: {entry}");
            }
        }
        Some(Commands::List { json }) => {
            if json {
                println!("{}", serde_json::to_string_pretty(tracker.entries())?);
            } else if tracker.entries().is_empty() {
                println!("No exercises logged.");
            } else {
                for line in tracker.list_entries() {
                    println!("{line}");
                }
            }
        }
        Some(Commands::Progress) => match tracker.progress_report() {
            ProgressReport::NoProgress => println!("No progress yet. Keep training!"),
            ProgressReport::Improvements(records) => {
                for record in records {
                    println!(
                        "{}: {} | {} -> {} | {}",
                        record.kind(),
                        record.name(),
                        record.oldest_summary(),
                        record.latest_summary(),
                        record.formatted_delta(),
                    );
                }
            }
        },
        Some(Commands::Clear) => {
            tracker.clear_log()?;
            println!("Log cleared!");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use fitlog_cli::config::DEFAULT_LOG_FILE;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_console() {
        let cli = Cli::try_parse_from(["fitlog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(Config::default().log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(!cli.no_clear);
    }

    #[test]
    fn test_parse_add_cardio() {
        let cli = Cli::try_parse_from([
            "fitlog", "--log-file", "/tmp/w.txt", "add", "cardio", "Plank", "--duration", "1m",
            "--sets", "2",
        ])
        .unwrap();

        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/w.txt")));
        match cli.command {
            Some(Commands::Add { exercise: AddCommand::Cardio { name, duration, sets, date } }) => {
                assert_eq!(name, "Plank");
                assert_eq!(duration, "1m");
                assert_eq!(sets, "2");
                assert_eq!(date, "");
            }
            _ => panic!("expected add cardio"),
        }
    }
}

//! wtrack - personal weight tracking from the terminal.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use wtrack::render::{self, ChartSeries};
use wtrack::report::{ProgressReport, ReportFormat};
use wtrack::{Session, Store, TrackerError};

#[derive(Parser)]
#[command(name = "wtrack")]
#[command(version = "0.1.0")]
#[command(about = "Personal weight tracking from the terminal", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Data directory (defaults to the per-user data dir)
    #[arg(long, global = true, env = "WTRACK_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the body configuration (height, starting weight, goal weight)
    Setup {
        /// Height in centimeters (100-250)
        #[arg(long, value_name = "CM")]
        height: f64,

        /// Starting weight in kilograms (at least 30)
        #[arg(long, value_name = "KG")]
        initial_weight: f64,

        /// Goal weight in kilograms (at least 30, below the starting weight)
        #[arg(long, value_name = "KG")]
        goal_weight: f64,
    },

    /// Record a weight entry
    Add {
        /// Weight in kilograms (30-300)
        weight: f64,

        /// Entry date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text note for the entry
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete the entry for a date
    Remove {
        /// Entry date as YYYY-MM-DD
        date: String,
    },

    /// Delete all entries
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show current stats and goal progress
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the entry history table
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw the weight chart
    Chart {
        /// Chart width in characters
        #[arg(long, default_value = "64")]
        width: usize,

        /// Chart height in lines
        #[arg(long, default_value = "16")]
        height: usize,

        /// Output the chart series as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a progress report
    Report {
        /// Output format: json or markdown
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "wtrack=debug,info"
    } else {
        "wtrack=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Resolve the data directory
    let data_dir = match cli.data_dir.clone().or_else(Store::default_dir) {
        Some(dir) => dir,
        None => {
            eprintln!(
                "{} No data directory available; pass --data-dir",
                "Error:".red().bold()
            );
            std::process::exit(1);
        }
    };

    let mut session = Session::open(Store::new(data_dir));

    if let Err(err) = run(cli.command, &mut session) {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(err.exit_code());
    }
}

fn run(command: Commands, session: &mut Session) -> wtrack::Result<()> {
    match command {
        Commands::Setup {
            height,
            initial_weight,
            goal_weight,
        } => {
            let profile = session.save_profile(height, initial_weight, goal_weight)?;
            println!(
                "{} Configuration saved: {:.0} cm, {:.1} kg down to {:.1} kg",
                "OK".green().bold(),
                profile.height_cm,
                profile.initial_weight_kg,
                profile.goal_weight_kg
            );
        }

        Commands::Add { weight, date, note } => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Local::now().date_naive(),
            };
            session.add_entry(date, weight, note.as_deref())?;
            println!(
                "{} Entry recorded: {:.1} kg on {}",
                "OK".green().bold(),
                weight,
                render::display_date(date)
            );
        }

        Commands::Remove { date } => {
            let date = parse_date(&date)?;
            if session.remove_entry(date)? {
                println!(
                    "{} Entry for {} removed",
                    "OK".green().bold(),
                    render::display_date(date)
                );
            } else {
                println!("No entry for {}", render::display_date(date));
            }
        }

        Commands::Clear { force } => {
            if !force {
                eprintln!(
                    "{} This will delete all entries. Use --force to confirm.",
                    "Warning:".yellow().bold()
                );
                std::process::exit(1);
            }

            session.clear_entries()?;
            println!("{} All entries cleared", "OK".green().bold());
        }

        Commands::Status { json } => {
            let summary = session.summary();

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render::summary_panel(&summary));
                if let Some(bar) = render::progress_bar(&summary, render::PROGRESS_BAR_WIDTH) {
                    println!("{}", bar);
                }
                if session.profile().is_none() {
                    println!(
                        "Not configured yet. Run '{}' first.",
                        "wtrack setup".cyan()
                    );
                }
            }
        }

        Commands::History { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(session.log())?);
            } else {
                print!("{}", render::history_table(session.profile(), session.log()));
            }
        }

        Commands::Chart {
            width,
            height,
            json,
        } => {
            let series = ChartSeries::from_log(session.profile(), session.log());

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                print!("{}", series.render_ascii(width, height));
            }
        }

        Commands::Report { format, output } => {
            let format: ReportFormat = format.parse()?;
            let report = ProgressReport::build(session.profile(), session.log());
            let rendered = report.export(format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered).map_err(|err| {
                        TrackerError::store_with_path(
                            format!("failed to write report: {}", err),
                            path.clone(),
                        )
                    })?;
                    println!("{} Report written: {}", "OK".green().bold(), path.display());
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}

/// Parse a user-supplied entry date.
fn parse_date(raw: &str) -> wtrack::Result<NaiveDate> {
    raw.trim().parse::<NaiveDate>().map_err(|_| {
        TrackerError::validation(
            "date",
            format!(
                "'{}' is not a calendar date (expected YYYY-MM-DD)",
                raw.trim()
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert!(parse_date(" 2024-01-15 ").is_ok());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("15/01/2024").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_parse_date_rejects_empty() {
        assert!(parse_date("").is_err());
        assert!(parse_date("   ").is_err());
    }
}

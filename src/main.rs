use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tabled::{Table, Tabled};

use fitplan::allocation::AllocationEngine;
use fitplan::config::AppConfig;
use fitplan::logging::{init_logging, LogLevel};
use fitplan::models::{GoalAllocation, GoalCategory};
use fitplan::progress::ProgressTracker;
use fitplan::provider::{derive_scores, load_bundle, load_session};

/// fitplan - Fitness Planning Score Engine CLI
///
/// Computes training-goal allocations and composite activity, recovery and
/// sleep-quality scores from snapshot files.
#[derive(Parser)]
#[command(name = "fitplan")]
#[command(version = "0.1.0")]
#[command(about = "Fitness planning score engine", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit one goal category and redistribute the rest
    Adjust {
        /// Current weights as strength,hypertrophy,endurance,cardio
        #[arg(long, default_value = "25,25,25,25")]
        current: String,

        /// Category to edit (strength, hypertrophy, endurance, cardio)
        #[arg(long)]
        category: String,

        /// Requested weight for the category (clamped to 0-100)
        #[arg(long)]
        value: i32,
    },

    /// Derive scores from a score snapshot file
    Score {
        /// Score snapshot JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Today's planned session JSON file, if any
        #[arg(short, long)]
        session: Option<PathBuf>,
    },

    /// Show completion progress for a planned session
    Progress {
        /// Planned session JSON file
        #[arg(short, long)]
        session: PathBuf,
    },

    /// Configure application settings
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Before")]
    before: u8,
    #[tabled(rename = "After")]
    after: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };
    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Adjust {
            current,
            category,
            value,
        } => {
            let allocation = AllocationEngine::parse_weights(&current)?;
            let category = GoalCategory::from_str(&category)?;
            let adjusted = AllocationEngine::adjust(&allocation, category, value);

            print_allocation(&allocation, &adjusted);
            println!(
                "{}",
                format!("✓ {} set to {}", category, adjusted.get(category)).green()
            );
        }

        Commands::Score { input, session } => {
            let bundle = load_bundle(&input)
                .with_context(|| format!("Failed to load snapshot: {}", input.display()))?;
            let session = session
                .map(|path| {
                    load_session(&path)
                        .with_context(|| format!("Failed to load session: {}", path.display()))
                })
                .transpose()?;
            let scores = derive_scores(&bundle, session.as_ref(), &config.activity);

            println!("{}", "Derived scores".blue().bold());
            println!("  Activity:  {:>3} / 100", scores.activity);
            println!("  Recovery:  {:>3} / 100", scores.recovery);
            match scores.sleep_quality {
                Some(quality) => println!("  Sleep quality: {:.2}", quality),
                None => println!("  Sleep quality: {}", "no sleep data".dimmed()),
            }
            match scores.workout_progress {
                Some(progress) => {
                    println!("  Workout progress: {:.0}%", progress * 100.0)
                }
                None => println!("  Workout progress: {}", "no session today".dimmed()),
            }
        }

        Commands::Progress { session } => {
            let session = load_session(&session)
                .with_context(|| format!("Failed to load session: {}", session.display()))?;
            let planned = ProgressTracker::total_planned_reps(&session.slots);
            let completed: u32 = session.slots.iter().map(|s| s.completed_reps).sum();

            println!("{}", format!("Session {}", session.date).blue().bold());
            println!("  Planned reps:   {}", planned);
            println!("  Completed reps: {}", completed);
            match ProgressTracker::session_progress(Some(&session)) {
                Some(progress) => {
                    let line = format!("  Progress:       {:.0}%", progress * 100.0);
                    if progress >= 1.0 {
                        println!("{}", line.green());
                    } else {
                        println!("{}", line);
                    }
                }
                None => println!("  Progress:       {}", "nothing planned".dimmed()),
            }
        }

        Commands::Config { init } => {
            let path = AppConfig::default_config_path();
            if init {
                config.save_to_file(&path)?;
                println!("{}", format!("✓ Config written to {}", path.display()).green());
            } else {
                println!("{}", format!("Config file: {}", path.display()).bold());
                println!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn print_allocation(before: &GoalAllocation, after: &GoalAllocation) {
    let rows: Vec<AllocationRow> = GoalCategory::ALL
        .iter()
        .map(|category| AllocationRow {
            category: category.to_string(),
            before: before.get(*category),
            after: after.get(*category),
        })
        .collect();
    println!("{}", Table::new(rows));
}

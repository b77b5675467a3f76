use anyhow::Result;
use clap::{Parser, Subcommand};
use downsort_core::config;
use downsort_core::engine::{build_describer, Organizer};
use std::path::PathBuf;

mod watch;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;
    let describer = build_describer(&cfg);
    let organizer = Organizer::new(&cfg, describer)?;

    match cli.command {
        Commands::Organize { file, json } => run_organize(organizer, file, json).await,
        Commands::Pending { json } => run_pending(organizer, json).await,
        Commands::Summary { limit, json } => run_summary(organizer, limit, json),
        Commands::Stats { json } => run_stats(organizer, json).await,
        Commands::Watch => watch::watch_root(organizer).await,
    }
}

#[derive(Parser)]
#[command(name = "downsort")]
#[command(about = "Files everything in a downloads folder into category subfolders", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Organize one file, or everything under the watched root
    Organize {
        /// Single file to organize; relative names resolve against the root
        file: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// List files still waiting to be organized
    Pending {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the operation journal, newest first
    Summary {
        /// At most this many entries
        #[arg(long)]
        limit: Option<usize>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Per-category counts and journal totals
    Stats {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Watch the root and organize files as they arrive
    Watch,
}

async fn run_organize(mut organizer: Organizer, file: Option<String>, json: bool) -> Result<()> {
    match file {
        Some(file) => {
            let path = resolve_against_root(&organizer, &file);
            match organizer.organize_one(&path).await {
                Ok(record) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&record)?);
                    } else {
                        println!("{} -> {}", record.original_name, record.new_path);
                    }
                    Ok(())
                }
                Err(e) => {
                    anyhow::bail!("{}: {}", file, e)
                }
            }
        }
        None => {
            let outcome = organizer.organize_all().await?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "organized_count": outcome.organized.len(),
                        "organized": outcome.organized,
                        "errors": outcome.errors,
                    }))?
                );
            } else {
                for record in &outcome.organized {
                    println!("{} -> {}", record.original_name, record.new_path);
                }
                for error in &outcome.errors {
                    eprintln!("error: {}", error);
                }
                println!(
                    "organize summary: organized={}, errors={}",
                    outcome.organized.len(),
                    outcome.errors.len()
                );
            }
            Ok(())
        }
    }
}

async fn run_pending(organizer: Organizer, json: bool) -> Result<()> {
    let pending = organizer.list_pending().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&pending)?);
    } else {
        for file in &pending {
            println!(
                "{}\t{}\t{} bytes",
                file.category, file.name, file.size
            );
        }
        println!("{} file(s) pending", pending.len());
    }
    Ok(())
}

fn run_summary(organizer: Organizer, limit: Option<usize>, json: bool) -> Result<()> {
    let records = organizer.summary(limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!(
                "{}  {}  {} -> {}  [{}]",
                record.timestamp, record.action, record.original_name, record.new_name,
                record.category
            );
        }
    }
    Ok(())
}

async fn run_stats(organizer: Organizer, json: bool) -> Result<()> {
    let stats = organizer.stats().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for (category, count) in &stats.category_counts {
            println!("{}\t{}", category, count);
        }
        println!(
            "organized={}, unorganized={}, operations={}",
            stats.total_organized, stats.unorganized, stats.total_operations
        );
    }
    Ok(())
}

fn resolve_against_root(organizer: &Organizer, file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        path
    } else {
        organizer.root().join(path)
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use cdp_core::{AgentResult, ResultRow};
use cdp_engine::{parse_clients, Pipeline};

#[derive(Debug, Parser)]
#[command(name = "cdp-cli")]
#[command(about = "Campaign decision pipeline command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the pipeline for every client in a CSV file.
    Run {
        /// Path to the client CSV.
        csv: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Directory for per-client HTML artifacts (html format only).
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
        /// Fixed seed for reproducible profile synthesis.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Parse and validate a client CSV without running the pipeline.
    Validate {
        csv: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            csv,
            format,
            out_dir,
            seed,
        } => run(&csv, format, &out_dir, seed),
        Commands::Validate { csv } => validate(&csv),
    }
}

fn load_clients(csv: &Path) -> anyhow::Result<Vec<cdp_core::ClientRecord>> {
    let text = fs::read_to_string(csv)
        .with_context(|| format!("reading {}", csv.display()))?;
    let clients = parse_clients(&text).context("ingesting client CSV")?;
    Ok(clients)
}

fn run(csv: &Path, format: Format, out_dir: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let clients = load_clients(csv)?;
    tracing::info!(clients = clients.len(), "running pipeline");

    let mut pipeline = seed.map_or_else(Pipeline::new, Pipeline::seeded);
    let results = pipeline.execute_batch(&clients);

    match format {
        Format::Table => print_table(&results),
        Format::Json => {
            for result in &results {
                println!("{}", serde_json::to_string(result)?);
            }
        }
        Format::Html => {
            fs::create_dir_all(out_dir)
                .with_context(|| format!("creating {}", out_dir.display()))?;
            for result in &results {
                let path = out_dir.join(format!("{}.html", result.client.id));
                fs::write(&path, &result.html)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn print_table(results: &[AgentResult]) {
    println!("{}", ResultRow::HEADER);
    for result in results {
        println!("{}", ResultRow::from(result).to_csv_line());
    }
}

fn validate(csv: &Path) -> anyhow::Result<()> {
    let clients = load_clients(csv)?;
    println!("{} valid client record(s)", clients.len());
    for client in &clients {
        println!(
            "  {} {} ({}, {}, {})",
            client.id, client.name, client.sector, client.risk, client.network
        );
    }
    Ok(())
}

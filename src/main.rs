//! timecard-engine entrypoint.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use timecard_engine::analysis::{analyze, AnalysisMode};
use timecard_engine::api::{create_router, AppState};
use timecard_engine::config::ConfigLoader;
use timecard_engine::logging;
use timecard_engine::timecard::read_timecard;

/// Command-line interface for the timecard engine
#[derive(Parser)]
#[command(
    name = "timecard-engine",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flag scheduling anomalies in employee timecards",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a timecard file (.xlsx or .csv) and print the findings
    Analyze {
        /// Path to the timecard file
        file: PathBuf,

        /// YAML file describing the timecard columns
        #[arg(long = "layout")]
        layout: Option<PathBuf>,

        /// Analyse each employee's shifts separately
        #[arg(long = "by-employee")]
        by_employee: bool,

        /// Print the full report as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Serve the analysis API over HTTP
    Serve {
        /// Address to listen on
        #[arg(long = "addr", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// YAML file describing the timecard columns
        #[arg(long = "layout")]
        layout: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Analyze {
            file,
            layout,
            by_employee,
            json,
        } => {
            let config = ConfigLoader::load_or_default(layout)?;
            let import = read_timecard(&file, config.layout())?;

            let mode = if by_employee {
                AnalysisMode::ByEmployee
            } else {
                AnalysisMode::Sequential
            };
            let report = analyze(&import.records, mode);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for finding in &report.findings {
                    println!("{}", finding.message);
                }
                for failure in &report.failures {
                    eprintln!("Detector {} failed: {}", failure.detector, failure.message);
                }
            }
        }
        Commands::Serve { addr, layout } => {
            let config = ConfigLoader::load_or_default(layout)?;
            let router = create_router(AppState::new(config));

            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(addr = %addr, "Listening");
            axum::serve(listener, router).await?;
        }
    }
    Ok(())
}

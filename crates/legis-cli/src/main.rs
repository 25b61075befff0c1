mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "legis",
    about = "Track bills and resolutions through the United States Congress",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data directory (default: auto-detect a data/ directory upward from cwd)
    #[arg(long, global = true, env = "LEGIS_DATA")]
    data: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bills in the data set
    List {
        /// Only bills of this congress
        #[arg(long)]
        congress: Option<u16>,
    },

    /// Show a bill in full
    Show { id: String },

    /// Explain a bill's current status in plain English
    Status { id: String },

    /// Predict the remaining major steps for a bill
    Predict { id: String },

    /// Show a bill's recorded actions and anticipated next steps
    Timeline { id: String },

    /// List bills related to a bill, strongest relation first
    Related { id: String },

    /// Reference table of status codes
    Statuses,

    /// Reference table of bill types
    Types,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let data = root::resolve_data(cli.data.as_deref());

    let result = match cli.command {
        Commands::List { congress } => cmd::list::run(&data, congress, cli.json),
        Commands::Show { id } => cmd::show::run(&data, &id, cli.json),
        Commands::Status { id } => cmd::status::run(&data, &id, cli.json),
        Commands::Predict { id } => cmd::predict::run(&data, &id, cli.json),
        Commands::Timeline { id } => cmd::timeline::run(&data, &id, cli.json),
        Commands::Related { id } => cmd::related::run(&data, &id, cli.json),
        Commands::Statuses => cmd::statuses::run(cli.json),
        Commands::Types => cmd::types::run(cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

use std::{process::exit, time::Duration};

use clap::{Parser, Subcommand};
use commands::{connect_command, probe_command};
use quickdial::{
    dial::{Candidate, Connector, DialConfig},
    utils::QuickResult,
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[clap(name = "quickdial")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// A JSON file with dialing defaults (timeout, TCP_NODELAY, keepalive).
    #[arg(long, global = true)]
    config: Option<String>,

    /// Overall timeout in milliseconds, 0 uses the configured default.
    #[arg(short, long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Connect to whichever candidate answers first
    Connect {
        /// Candidate endpoints as host:port
        #[arg(required = true)]
        candidates: Vec<Candidate>,

        /// Pipe stdin/stdout through the winning connection.
        #[clap(long, action)]
        pipe: bool,

        /// Print the winner as JSON.
        #[clap(long, action)]
        json: bool,
    },
    /// Connect to every candidate separately and report each result as JSON
    Probe {
        /// Candidate endpoints as host:port
        #[arg(required = true)]
        candidates: Vec<Candidate>,
    },
}

fn load_config(path: Option<&str>) -> QuickResult<DialConfig> {
    // Without a config file, fall back to the built-in defaults.
    path.map_or_else(|| Ok(DialConfig::default()), DialConfig::load)
}

async fn run(args: Args) -> QuickResult<()> {
    let config = load_config(args.config.as_deref())?;
    let timeout = Duration::from_millis(args.timeout.unwrap_or(0));
    let connector = Connector::new(config);

    match args.command {
        Commands::Connect {
            candidates,
            pipe,
            json,
        } => connect_command(connector, candidates, timeout, pipe, json).await,

        Commands::Probe { candidates } => probe_command(connector, candidates, timeout).await,
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays reserved for results and piped data.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quickdial=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{}", e);
        exit(1);
    }
}

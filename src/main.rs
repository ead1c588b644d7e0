//! Wallet connection CLI
//!
//! Command-line front end for the wallet connection manager. Demo runs
//! are backed by the simulated provider; point `--config` or the
//! `WALLET_SIM_*` env vars at the scenario you want to exercise.

use clap::{Parser, Subcommand};
use stellar_wallet_connect::provider::SimulatedWallet;
use stellar_wallet_connect::{
    shorten_address, supported_wallets, Config, Result, WalletManager,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "wallet-connect")]
#[command(about = "Connection manager for Stellar signing-key providers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a wallet provider and print the result
    Connect {
        /// Provider to connect to (freighter, albedo, xbull, ledger)
        #[arg(short, long, default_value = "freighter")]
        provider: String,
    },

    /// List the provider catalog
    Wallets,

    /// Shorten an address for display
    Format {
        /// Address to shorten
        #[arg(short, long)]
        address: String,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Connect { provider } => {
            run_connect(provider, config).await?;
        }
        Commands::Wallets => {
            run_wallets();
        }
        Commands::Format { address } => {
            println!("{}", shorten_address(&address));
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn run_connect(provider: String, config: Config) -> Result<()> {
    tracing::info!(provider = %provider, "Connecting to wallet provider");

    let capability = SimulatedWallet::new(config.simulator);
    let manager = WalletManager::new(Box::new(capability));

    let result = manager.connect_named(&provider).await?;

    tracing::info!(
        address = %shorten_address(&result.address),
        network = %result.network,
        "Wallet connected"
    );
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn run_wallets() {
    for entry in supported_wallets() {
        let status = if entry.available {
            "available"
        } else {
            "coming soon"
        };
        println!(
            "{:<10} {:<10} {:<22} [{}]",
            entry.kind, entry.display_name, entry.description, status
        );
    }
}

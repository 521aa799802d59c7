//! Command line relay faucet for testnet wallets.

use anyhow::Result;
use faucet_chain::EthTransferExecutor;
use faucet_cli::{banner, summary, FaucetConfig, LinePrompter};
use faucet_core::{Distributor, JsonWalletFile};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the faucet.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "faucet",
    about = "Relay testnet funds from one wallet through a chain of wallets"
)]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Path to the wallet list
    #[structopt(short, long, parse(from_os_str))]
    wallets: Option<PathBuf>,

    /// JSON-RPC endpoint to send transactions to
    #[structopt(short, long)]
    rpc_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let opt = Opt::from_args();

    // Load configuration
    let mut config = match &opt.config {
        Some(path) => FaucetConfig::from_file(path)?,
        None => FaucetConfig::default(),
    };
    if let Some(rpc_url) = opt.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(wallets) = opt.wallets {
        config.wallets_file = wallets;
    }

    banner::print(&config.network_name);
    info!("Using RPC endpoint {}", config.rpc_url);

    let executor = EthTransferExecutor::new(&config.executor_config())?;
    let explorer = executor.explorer().clone();
    let source = JsonWalletFile::new(&config.wallets_file);
    info!("Reading wallets from {}", source.path().display());

    let mut distributor = Distributor::new(executor, LinePrompter::stdio());
    let outcome = distributor.run(&source).await;
    summary::print(&outcome, &explorer);

    Ok(())
}

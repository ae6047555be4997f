//! Workshop Setup Runner
//!
//! The entry point for the workshop environment setup tool.
//! Parses CLI args, initializes logging, and runs the setup
//! orchestrator.

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workshop_setup::config;
use workshop_setup::platform::Platform;
use workshop_setup::runner::LocalRunner;
use workshop_setup::setup::steps::run_setup;
use workshop_setup::types::default_config;

const VERSION: &str = "0.1.0";

/// Workshop Setup -- Data Analytics Environment Bootstrapper
#[derive(Parser, Debug)]
#[command(
    name = "workshop-setup",
    version = VERSION,
    about = "Automated environment setup for the data analytics workshop",
    long_about = "Creates the workshop virtual environment, installs the required \
                  packages from the requirements manifest, and registers the Jupyter \
                  kernel used by the workshop notebooks."
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("workshop_setup=info"))
        .expect("Failed to create env filter");
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();

    let config = config::load_config().unwrap_or_else(default_config);
    let platform = Platform::current();
    let runner = LocalRunner;

    if let Err(e) = run_setup(&runner, platform, &config).await {
        eprintln!("Setup failed: {}", e);
        std::process::exit(1);
    }
}

mod search;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use locfinder_client::LocationFinderClient;
use locfinder_core::CountryCode;
use tracing_subscriber::EnvFilter;

use crate::search::{AddressArgs, GeoArgs};

#[derive(Debug, Parser)]
#[command(name = "locfinder")]
#[command(about = "Look up parcel and postal service points")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for service points near an address
    Address(AddressArgs),
    /// Search for service points around a coordinate pair
    Geo(GeoArgs),
    /// Find the service point with a keyword id (e.g. a Packstation number)
    Keyword {
        /// Keyword id, e.g. 153
        #[arg(long)]
        keyword_id: String,
        /// ISO 3166-1 alpha-2 country code
        #[arg(long)]
        country: CountryCode,
        /// Postal code the keyword id belongs to
        #[arg(long)]
        postal_code: String,
    },
    /// Retrieve one service point by its location id
    Location {
        /// Location id, e.g. 8003-4103268
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = locfinder_core::load_client_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let client = LocationFinderClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build location finder client: {e}"))?;

    let found = match cli.command {
        Commands::Address(args) => search::run_address(&client, args).await?,
        Commands::Geo(args) => search::run_geo(&client, args).await?,
        Commands::Keyword {
            keyword_id,
            country,
            postal_code,
        } => search::run_keyword(&client, keyword_id, country, postal_code).await?,
        Commands::Location { id } => search::run_location(&client, &id).await?,
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

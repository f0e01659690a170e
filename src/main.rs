use clap::Parser;
use configuration::load_config_from;
use database::connect;
use sqlx::Connection;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Startup bootstrap for the VeriSight database connection.
///
/// Loads the configuration and opens the one database connection the
/// process owns, then verifies it is live before exiting. A non-zero exit
/// status means the database is not usable with the supplied settings.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    // Load environment variables from the .env file, if one exists.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    let config = match load_config_from(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    // The Debug impl masks the password, so this is safe to log.
    tracing::debug!("Loaded database settings: {:?}", config.database);

    // The connect call never terminates the process itself; translating its
    // error into an exit status happens here and only here.
    let mut conn = match connect(&config.database).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("DB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    // A round trip proves the handle is live, not merely handshaken.
    if let Err(e) = conn.ping().await {
        eprintln!("DB connection failed: {}", e);
        std::process::exit(1);
    }

    println!(
        "Database connection verified: {}:{}/{}",
        config.database.host, config.database.port, config.database.database_name
    );

    // Scoped acquisition: the connection this process opened, it closes.
    if let Err(e) = conn.close().await {
        tracing::warn!("Error while closing the database connection: {}", e);
    }
}

use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DatabaseConfig};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, overlays environment variables, deserializes the
/// result into our strongly-typed `Config` struct, and validates it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads the application configuration from an explicit file path.
///
/// Environment variables prefixed with `VERISIGHT` take precedence over the
/// file contents, with `__` separating nesting levels. This is how secrets
/// reach the process: `VERISIGHT_DATABASE__PASSWORD` maps to
/// `database.password` and never has to appear in the file.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // The file holds the non-secret connection parameters. It may be
        // absent entirely when the environment supplies everything.
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("VERISIGHT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    config.database.validate()?;

    Ok(config)
}

use crate::error::ConnectionError;
use configuration::DatabaseConfig;
use sqlx::ConnectOptions;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};

/// Establishes a single connection to the MySQL database.
///
/// Exactly one connection attempt is made, with no pool and no retry.
/// The returned handle reports every subsequent failure through `Result`,
/// so dependent code is never left inspecting silent status codes.
///
/// The function validates its input, then lets the driver's own defaults
/// govern the connect timeout. It never terminates the process; mapping a
/// [`ConnectionError`] to an exit status is the entry point's decision.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlConnection, ConnectionError> {
    config
        .validate()
        .map_err(|e| ConnectionError::Config(e.to_string()))?;

    // Options are built field by field rather than through a URL string, so
    // credentials never need percent-encoding and never appear in a form
    // that could end up in a log line.
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database_name)
        .username(&config.user)
        .password(&config.password)
        .charset("utf8mb4");

    let conn = options.connect().await?;

    tracing::info!(
        "Connected to database '{}' at {}:{}",
        config.database_name,
        config.host,
        config.port
    );

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 3306,
            database_name: "verisight".to_string(),
            user: "root".to_string(),
            password: String::new(),
        }
    }

    #[tokio::test]
    async fn empty_host_is_rejected_before_any_network_io() {
        let mut config = local_config();
        config.host.clear();

        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, ConnectionError::Config(_)));
        assert!(err.to_string().contains("database.host"));
    }

    #[tokio::test]
    async fn empty_user_is_rejected_before_any_network_io() {
        let mut config = local_config();
        config.user.clear();

        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, ConnectionError::Config(_)));
    }

    #[tokio::test]
    async fn refused_connection_carries_the_driver_diagnostic() {
        let mut config = local_config();
        // Port 1 is essentially never listened on; the connection is
        // refused locally without needing a database server.
        config.port = 1;

        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, ConnectionError::Database(_)));
        assert!(!err.to_string().is_empty());
    }
}

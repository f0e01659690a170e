use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Connection parameters for the MySQL database.
///
/// The password is deliberately excluded from the `Debug` output so the
/// struct can be logged at startup without leaking the secret.
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Network address of the database server.
    #[serde(default = "DatabaseConfig::default_host")]
    pub host: String,
    /// TCP port the server's wire protocol listens on.
    #[serde(default = "DatabaseConfig::default_port")]
    pub port: u16,
    /// Name of the database to open when the connection is established.
    pub database_name: String,
    /// Account name used to authenticate.
    pub user: String,
    /// Account password. May be empty for passwordless local accounts.
    #[serde(default)]
    pub password: String,
}

impl DatabaseConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        3306
    }

    /// Checks the constraints the connect operation relies on.
    ///
    /// `host`, `database_name`, and `user` must be non-empty; an empty
    /// `password` is valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.host must not be empty".to_string(),
            ));
        }
        if self.database_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.database_name must not be empty".to_string(),
            ));
        }
        if self.user.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.user must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_name", &self.database_name)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 3306,
            database_name: "verisight".to_string(),
            user: "root".to_string(),
            password: String::new(),
        }
    }

    #[test]
    fn valid_settings_pass_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_password_is_allowed() {
        let config = sample();
        assert!(config.password.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_host_is_rejected() {
        let mut config = sample();
        config.host = "   ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.host"));
    }

    #[test]
    fn empty_database_name_is_rejected() {
        let mut config = sample();
        config.database_name.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.database_name"));
    }

    #[test]
    fn empty_user_is_rejected() {
        let mut config = sample();
        config.user.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.user"));
    }

    #[test]
    fn debug_output_masks_the_password() {
        let mut config = sample();
        config.password = "hunter2".to_string();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
        assert!(rendered.contains("verisight"));
    }
}

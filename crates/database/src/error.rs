use thiserror::Error;

/// Failure to establish the database connection.
///
/// Unreachable host, rejected credentials, unknown database, and protocol
/// mismatch all surface through the driver as [`sqlx::Error`]; they are not
/// subdivided further here.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The supplied connection parameters violate the input constraints.
    #[error("Invalid connection configuration: {0}")]
    Config(String),

    /// The connection attempt itself failed. The message is the driver's
    /// own diagnostic, undecorated, so callers can prefix it as they see fit.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

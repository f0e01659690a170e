//! # VeriSight Database Crate
//!
//! This crate performs the guarded acquisition of the application's MySQL
//! connection at process startup.
//!
//! ## Architectural Principles
//!
//! - **One connection, once:** the bootstrap opens exactly one connection
//!   at startup from validated settings. There is no pool and no retry;
//!   the first failure is surfaced to the caller.
//! - **Structured errors only:** every operation on the returned handle
//!   reports failure through `Result`. Nothing in this crate terminates the
//!   process; the entry point owns that decision.
//! - **Injected configuration:** the connection parameters arrive as a
//!   [`configuration::DatabaseConfig`], never from ambient global state.
//!
//! ## Public API
//!
//! - `connect`: the async function that establishes the connection.
//! - `ConnectionError`: the error type a failed bootstrap returns.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::ConnectionError;
pub use sqlx::mysql::MySqlConnection;

//! Spot Tracker CLI Library
//!
//! This library provides a small client for a Parse backend that stores
//! geo-tagged "Spot" records. It includes modules for loading application
//! credentials, logging users in, fetching and decoding spots, and the CLI
//! commands that render them.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Credential store and environment settings
//! - `error` - Typed errors for configuration and API calls
//! - `management` - In-memory session state
//! - `parse` - Parse REST API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotcli::{config::CredentialStore, parse::SpotClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = CredentialStore::new(CredentialStore::default_location()).load()?;
//!     let client = SpotClient::new(credentials);
//!     let spots = client.fetch_spots().await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod parse;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching spots...");
/// info!("Found {} spots", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Logged in as {}", username);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command-line layer: library code returns errors
/// instead of terminating.
///
/// # Example
///
/// ```
/// error!("Could not log in: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Skipping spot at index {}: {}", index, reason);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

//! Mixcloud Show Uploader CLI Library
//!
//! This library implements a small pipeline that watches a local folder for
//! freshly exported radio shows and uploads them to Mixcloud with metadata
//! resolved from the filename and a CSV catalog.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration file loading
//! - `management` - Token persistence and the show metadata catalog
//! - `mixcloud` - Mixcloud API client: authentication and uploads
//! - `server` - Local HTTP server for OAuth callbacks
//! - `types` - Data structures and type definitions
//! - `utils` - Filename parsing and text construction helpers
//! - `watcher` - The directory polling loop
//!
//! # Example
//!
//! ```
//! use mixupcli::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> mixupcli::Res<()> {
//!     let cfg = Config::load(None).await?;
//!     // Build the uploader and start watching...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod mixcloud;
pub mod server;
pub mod types;
pub mod utils;
pub mod watcher;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates throughout the
/// application. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Watching folder: {}", folder.display());
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
/// Used to provide positive feedback when operations complete successfully,
/// e.g. a finished upload. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Upload successful");
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
/// Immediately terminates the process with exit code 1, so it must only be
/// used for unrecoverable startup conditions such as a missing configuration
/// file. Per-file upload failures are reported with `warning!` instead and
/// never stop the poll loop.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration: {}", e);
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
/// Used for recoverable issues: a missing metadata file, a date that does
/// not parse, a failed relocation. The process keeps running. Accepts the
/// same arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("Metadata file not found: {}", path.display());
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

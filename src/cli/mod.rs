//! # CLI Module
//!
//! User-facing command implementations. Each submodule backs one subcommand
//! and delegates to the management and Mixcloud layers:
//!
//! - [`auth`] - runs the interactive OAuth flow and persists the token
//! - [`watch`] - the long-running mode: authenticate, load the catalog,
//!   then poll the watch folder and upload whatever appears
//! - [`upload`] - one-shot upload of a single file, useful for re-driving
//!   a file whose earlier upload failed
//! - [`shows`] - prints the metadata catalog as a table, with an optional
//!   substring filter
//!
//! Fatal conditions (missing config, failed interactive auth) terminate via
//! the `error!` macro; everything inside the watch loop is logged and
//! survived.

mod auth;
mod shows;
mod upload;
mod watch;

pub use auth::auth;
pub use shows::shows;
pub use upload::upload;
pub use watch::watch;

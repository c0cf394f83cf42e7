//! # API Module
//!
//! HTTP endpoints served by the short-lived local callback server during the
//! OAuth authorization flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the browser redirect from Mixcloud's
//!   authorization page and captures the `code` query parameter. The code
//!   exchange itself happens in [`crate::mixcloud::auth`], which is waiting
//!   on the shared state; the handler only performs the capture and answers
//!   the browser with a human-readable confirmation.
//! - [`health`] - Returns application status and version, handy for checking
//!   that the callback server actually came up on the configured port.
//!
//! ## Architecture
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async handler
//! wired into the router in [`crate::server`]. Axum emits no per-request
//! logging, so the callback traffic produces no noise next to the
//! application's own log macros.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

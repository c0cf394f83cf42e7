//! # Mixcloud Integration Module
//!
//! The client layer for the Mixcloud API, covering the two operations this
//! tool needs: obtaining an access token and submitting an upload.
//!
//! ## Modules
//!
//! [`auth`] implements the OAuth 2.0 authorization-code flow:
//! - **Token caching**: memory first, then the plain-text token file,
//!   and only then the interactive flow
//! - **Browser integration**: the authorization URL opens in the default
//!   browser, with a manual fallback printed on failure
//! - **Local callback**: a short-lived HTTP server captures the redirect
//!   carrying the authorization code, bounded by a configurable wait
//! - **Code exchange**: a single form-encoded POST; a non-200 answer or a
//!   missing `access_token` fails the flow with no retry
//! - **Invalidation**: clears the cached token and deletes the persisted
//!   copy so the next request re-runs the full flow
//!
//! [`upload`] implements the upload submission:
//! - **Metadata resolution**: show name and date from the filename
//!   convention, bio/host/tags from the catalog
//! - **Multipart POST**: audio plus optional artwork plus text fields, with
//!   the bearer token passed as a query parameter (Mixcloud does not read
//!   it from a header)
//! - **Outcome handling**: 200 relocates the file into the show folder,
//!   401/403 invalidates the token, anything else is logged and left alone
//!
//! Exactly one network attempt is made per operation; retrying is the
//! caller's decision (the poller deliberately never retries).

pub mod auth;
pub mod upload;

pub use auth::{AuthError, Authenticator};
pub use upload::Uploader;

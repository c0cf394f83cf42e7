use std::path::PathBuf;

use serde::Deserialize;
use tabled::Tabled;

/// Shared state between the OAuth callback handler and the waiting
/// authenticator. The handler fills in `code` when the browser redirect
/// arrives; nothing else ever writes to it.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub code: Option<String>,
}

/// Per-show descriptive metadata loaded from the CSV catalog.
///
/// Immutable after load. The tag list keeps catalog order; the cap of five
/// tags per upload is applied at submission time, not here.
#[derive(Debug, Clone, Default)]
pub struct ShowMetadata {
    pub bio: String,
    pub host: String,
    pub tags: Vec<String>,
}

/// One row of the metadata CSV, as named by its header.
/// `tags` is the raw `;`-delimited cell.
#[derive(Debug, Deserialize)]
pub struct CatalogRow {
    #[serde(default)]
    pub show: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub tags: String,
}

/// A broadcast date as it appears in the filename convention.
///
/// Components stay strings so that zero padding survives into titles and
/// tracklist URLs ("05" must not become "5").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Result of parsing an upload filename.
///
/// A filename like `"Late Night Radio 05.03.2024.mp3"` splits into the show
/// name and a date; a filename without a space-separated suffix is all show
/// name. A suffix that does not split into exactly three `.`-separated
/// components is reported as `MalformedDate` so the caller can log it and
/// proceed without a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFilename {
    Dated { show_name: String, date: ShowDate },
    Undated { show_name: String },
    MalformedDate { show_name: String, fragment: String },
}

impl ParsedFilename {
    pub fn show_name(&self) -> &str {
        match self {
            ParsedFilename::Dated { show_name, .. } => show_name,
            ParsedFilename::Undated { show_name } => show_name,
            ParsedFilename::MalformedDate { show_name, .. } => show_name,
        }
    }

    pub fn date(&self) -> Option<&ShowDate> {
        match self {
            ParsedFilename::Dated { date, .. } => Some(date),
            _ => None,
        }
    }
}

/// Everything the uploader needs to submit one file, derived from the
/// filename and a probe of the show folder. Ephemeral, never persisted.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub source_path: PathBuf,
    pub show_name: String,
    pub date: Option<ShowDate>,
    pub artwork_path: Option<PathBuf>,
}

/// Outcome of a single upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadResult {
    /// The API answered 200; the file has been relocated to the show folder.
    Success,
    /// The API answered 401 or 403; the stored token has been invalidated.
    AuthFailure,
    /// Any other failure: non-200 status, transport error, token failure.
    OtherFailure,
}

/// Minimal token-endpoint response; Mixcloud returns more fields but only
/// the access token is used.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Tabled)]
pub struct ShowTableRow {
    pub show: String,
    pub host: String,
    pub tags: String,
}

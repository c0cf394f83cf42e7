use std::path::{Path, PathBuf};

use reqwest::{
    Client, StatusCode,
    multipart::{Form, Part},
};

use crate::{
    info,
    management::MetadataCatalog,
    mixcloud::Authenticator,
    success,
    types::{ParsedFilename, ShowMetadata, UploadCandidate, UploadResult},
    utils, warning,
};

/// Submits show files to the Mixcloud upload endpoint.
///
/// Composes the [`Authenticator`] and the [`MetadataCatalog`]: each call
/// resolves metadata from the filename and catalog, performs exactly one
/// multipart POST, and acts on the outcome. Success relocates the source
/// file into the show folder; 401/403 invalidates the stored token so the
/// next attempt re-authenticates.
pub struct Uploader {
    auth: Authenticator,
    catalog: MetadataCatalog,
    shows_folder: PathBuf,
    site_url: String,
    upload_url: String,
}

impl Uploader {
    pub fn new(
        auth: Authenticator,
        catalog: MetadataCatalog,
        shows_folder: PathBuf,
        site_url: String,
        upload_url: String,
    ) -> Self {
        Uploader {
            auth,
            catalog,
            shows_folder,
            site_url,
            upload_url,
        }
    }

    /// Uploads one file, reporting the outcome.
    ///
    /// Never returns an error: every failure is logged and mapped onto
    /// [`UploadResult`] so the poll loop always continues. No retry happens
    /// inside this call, not even after an auth failure.
    pub async fn upload(&mut self, mp3_path: &Path) -> UploadResult {
        let candidate = self.resolve_candidate(mp3_path).await;
        let meta = self
            .catalog
            .get(&candidate.show_name)
            .cloned()
            .unwrap_or_default();

        let token = match self.auth.get_token().await {
            Ok(token) => token,
            Err(e) => {
                warning!("Cannot obtain access token: {}", e);
                return UploadResult::OtherFailure;
            }
        };

        let form = match build_form(&candidate, &meta, &self.site_url).await {
            Ok(form) => form,
            Err(e) => {
                warning!("Cannot prepare upload for '{}': {}", mp3_path.display(), e);
                return UploadResult::OtherFailure;
            }
        };

        info!(
            "Uploading '{}' as show '{}'...",
            mp3_path.display(),
            candidate.show_name
        );

        // Mixcloud wants the token as a query parameter, not a header.
        let url = format!(
            "{upload_url}?access_token={token}",
            upload_url = self.upload_url,
            token = token
        );

        let client = Client::new();
        let response = match client.post(&url).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                warning!("Upload request failed: {}", e);
                return UploadResult::OtherFailure;
            }
        };

        match response.status() {
            StatusCode::OK => {
                success!("Upload successful");
                self.move_to_show_folder(mp3_path, &candidate.show_name)
                    .await;
                UploadResult::Success
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warning!("Access token invalid or expired - clearing saved token.");
                self.auth.invalidate().await;
                UploadResult::AuthFailure
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                warning!("Upload failed: {} {}", status, body);
                UploadResult::OtherFailure
            }
        }
    }

    /// Derives the upload candidate from the filename and a probe of the
    /// show folder for `picture.jpg`.
    async fn resolve_candidate(&self, mp3_path: &Path) -> UploadCandidate {
        let filename = mp3_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let parsed = utils::parse_filename(&filename);
        if let ParsedFilename::MalformedDate { fragment, .. } = &parsed {
            warning!(
                "Could not parse date from filename '{}': '{}' is not dd.mm.yyyy",
                filename,
                fragment
            );
        }

        let show_name = parsed.show_name().to_string();
        let date = parsed.date().cloned();

        let picture_path = self.shows_folder.join(&show_name).join("picture.jpg");
        let artwork_path = match async_fs::metadata(&picture_path).await {
            Ok(_) => Some(picture_path),
            Err(_) => None,
        };

        UploadCandidate {
            source_path: mp3_path.to_path_buf(),
            show_name,
            date,
            artwork_path,
        }
    }

    /// Moves an uploaded file into `<shows_folder>/<show_name>/`, creating
    /// the folder if needed. A move failure is logged but does not demote
    /// the upload outcome.
    async fn move_to_show_folder(&self, mp3_path: &Path, show_name: &str) {
        let dest_folder = self.shows_folder.join(show_name);
        if let Err(e) = async_fs::create_dir_all(&dest_folder).await {
            warning!("Failed to create '{}': {}", dest_folder.display(), e);
            return;
        }

        let dest_path = match mp3_path.file_name() {
            Some(name) => dest_folder.join(name),
            None => return,
        };

        match async_fs::rename(mp3_path, &dest_path).await {
            Ok(()) => info!("Moved MP3 to '{}'", dest_path.display()),
            Err(e) => warning!("Failed to move MP3: {}", e),
        }
    }
}

/// Builds the multipart form for one candidate.
///
/// File contents are read into memory up front, so no handle outlives this
/// function regardless of how the network call ends. Artwork that exists but
/// cannot be read is skipped with a warning rather than failing the upload.
async fn build_form(
    candidate: &UploadCandidate,
    meta: &ShowMetadata,
    site_url: &str,
) -> Result<Form, String> {
    let title = utils::build_title(&candidate.show_name, candidate.date.as_ref(), &meta.host);
    let description = utils::build_description(
        &meta.bio,
        &candidate.show_name,
        candidate.date.as_ref(),
        site_url,
    );

    let audio = async_fs::read(&candidate.source_path)
        .await
        .map_err(|e| e.to_string())?;
    let filename = candidate
        .source_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let audio_part = Part::bytes(audio)
        .file_name(filename)
        .mime_str("audio/mpeg")
        .map_err(|e| e.to_string())?;

    let mut form = Form::new()
        .part("mp3", audio_part)
        .text("name", title)
        .text("description", description);

    for (field, tag) in utils::tag_fields(&meta.tags) {
        form = form.text(field, tag);
    }

    if let Some(picture_path) = &candidate.artwork_path {
        match async_fs::read(picture_path).await {
            Ok(picture) => {
                let picture_part = Part::bytes(picture)
                    .file_name("picture.jpg")
                    .mime_str("image/jpeg")
                    .map_err(|e| e.to_string())?;
                form = form.part("picture", picture_part);
            }
            Err(e) => warning!("Skipping artwork '{}': {}", picture_path.display(), e),
        }
    }

    Ok(form)
}

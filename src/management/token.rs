use std::path::PathBuf;

/// Persists the bearer token on disk.
///
/// The token file is plain text containing exactly the token string, nothing
/// else. It is overwritten wholesale on renewal and deleted on invalidation.
/// This type never touches the network; the authenticator decides when a
/// token is obtained or discarded.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        TokenStore { path }
    }

    /// Reads the persisted token, if any.
    ///
    /// A missing file and an empty or whitespace-only file both yield
    /// `Ok(None)`; only an actual read failure is an error.
    pub async fn load(&self) -> Result<Option<String>, String> {
        match async_fs::read_to_string(&self.path).await {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Writes `token` to the store, replacing any previous value.
    pub async fn persist(&self, token: &str) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        async_fs::write(&self.path, token)
            .await
            .map_err(|e| e.to_string())
    }

    /// Removes the token file. Deleting an already-absent file is not an
    /// error; callers log any other failure as a warning and move on.
    pub async fn delete(&self) -> Result<(), String> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

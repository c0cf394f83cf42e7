use std::{collections::HashMap, path::Path};

use crate::{
    info,
    types::{CatalogRow, ShowMetadata},
    warning,
};

/// The show metadata catalog, keyed by exact show name.
///
/// Loaded once at startup from a CSV file with the header row
/// `show,bio,host,tags`; pure data, no network access. Lookups are
/// case-sensitive string matches against the `show` column.
pub struct MetadataCatalog {
    shows: HashMap<String, ShowMetadata>,
}

impl MetadataCatalog {
    /// Loads the catalog from `path`.
    ///
    /// A missing file is not fatal: a warning is logged and an empty catalog
    /// is returned, so uploads proceed with empty bio/host/tags. Rows with a
    /// blank show name are skipped with a notice; a row that does not
    /// deserialize is skipped with a warning. Duplicate show names follow
    /// last-write-wins.
    pub async fn load(path: &Path) -> Self {
        let content = match async_fs::read_to_string(path).await {
            Ok(content) => content,
            Err(_) => {
                warning!("Metadata file not found: {}", path.display());
                return MetadataCatalog {
                    shows: HashMap::new(),
                };
            }
        };

        let mut shows = HashMap::new();
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        for record in reader.deserialize::<CatalogRow>() {
            let row = match record {
                Ok(row) => row,
                Err(e) => {
                    warning!("Skipping malformed metadata row: {}", e);
                    continue;
                }
            };

            let show_name = row.show.trim().to_string();
            if show_name.is_empty() {
                info!("Skipping metadata row without a show name");
                continue;
            }

            let tags: Vec<String> = row
                .tags
                .split(';')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();

            shows.insert(
                show_name,
                ShowMetadata {
                    bio: row.bio.trim().to_string(),
                    host: row.host.trim().to_string(),
                    tags,
                },
            );
        }

        info!("Loaded metadata for {} shows", shows.len());
        MetadataCatalog { shows }
    }

    /// Looks up a show by its exact name.
    pub fn get(&self, show_name: &str) -> Option<&ShowMetadata> {
        self.shows.get(show_name)
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ShowMetadata)> {
        self.shows.iter()
    }
}

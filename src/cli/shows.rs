use tabled::Table;

use crate::{config::Config, management::MetadataCatalog, types::ShowTableRow, warning};

/// Prints the metadata catalog as a table, optionally filtered by a
/// case-insensitive substring of the show name.
pub async fn shows(config: &Config, search: Option<String>) {
    let catalog = MetadataCatalog::load(&config.metadata_file).await;
    if catalog.is_empty() {
        warning!("No show metadata loaded from {}", config.metadata_file.display());
        return;
    }

    let mut rows: Vec<ShowTableRow> = catalog
        .iter()
        .map(|(name, meta)| ShowTableRow {
            show: name.clone(),
            host: meta.host.clone(),
            tags: meta
                .tags
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect();

    rows.sort_by(|a, b| a.show.to_lowercase().cmp(&b.show.to_lowercase()));

    if let Some(show_search) = search {
        let search_term = show_search.to_lowercase();
        rows.retain(|r| r.show.to_lowercase().contains(&search_term));
    }

    let table = Table::new(rows);
    println!("{}", table);
}

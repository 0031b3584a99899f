use scraper::{Html, Selector};
use tracing::debug;

use super::{errors::CatalogError, models::CatalogEntry};

/// Extracts catalog entries from a collection XML response.
///
/// Each `item` element yields one entry: id from its `objectid` attribute,
/// name from the text of its `name` child. Items without a name are skipped.
/// An `errors` payload (e.g. unknown username) is reported as a parse error.
pub fn parse_collection(body: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let document = Html::parse_document(body);
    let item_selector = selector("item")?;
    let name_selector = selector("name")?;
    let error_selector = selector("errors message")?;

    if let Some(message) = document.select(&error_selector).next() {
        let message = message.text().collect::<String>().trim().to_string();
        return Err(CatalogError::Parse(message));
    }

    let mut entries = Vec::new();
    for item in document.select(&item_selector) {
        let Some(name) = item.select(&name_selector).next() else {
            continue;
        };
        let name = name.text().collect::<String>().trim().to_string();
        if name.is_empty() {
            continue;
        }

        let entry = match item.value().attr("objectid") {
            Some(id) if !id.is_empty() => CatalogEntry::new(id, name),
            _ => CatalogEntry::curated(name),
        };
        entries.push(entry);
    }

    debug!(entry_count = entries.len(), "Parsed collection");
    Ok(entries)
}

fn selector(css: &str) -> Result<Selector, CatalogError> {
    Selector::parse(css).map_err(|e| CatalogError::Parse(format!("invalid selector '{css}': {e:?}")))
}

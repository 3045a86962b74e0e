use crate::{
    models::{Category, Query},
    Error, Result,
};
use tracing::debug;

/// Trim, lowercase and classify raw search input.
///
/// Aliases match the whole normalized string, never a substring of it:
/// `"beaches"` selects the beach collection, `"beachfront"` is free text.
pub fn normalize(raw: &str) -> Result<Query> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyQuery);
    }

    let key = trimmed.to_lowercase();
    let category = category_alias(&key);
    debug!("Query {:?} classified as {:?}", key, category);

    Ok(Query {
        raw: raw.to_string(),
        key,
        category,
    })
}

fn category_alias(key: &str) -> Option<Category> {
    match key {
        "beach" | "beaches" => Some(Category::Beach),
        "temple" | "temples" => Some(Category::Temple),
        "country" | "countries" => Some(Category::Country),
        _ => None,
    }
}

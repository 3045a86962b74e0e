// Turns a normalized query into an ordered result set
use crate::{
    models::{Catalog, Category, Destination, Query, ResultSet},
    query::normalize,
    store::CatalogStore,
    Error, Result,
};
use tracing::debug;

/// Select destinations for a query.
///
/// Category queries browse a whole collection unfiltered; only free-text
/// queries filter, by case-folded substring over names. Source order is
/// always preserved.
pub fn resolve(query: &Query, catalog: &Catalog) -> Result<ResultSet> {
    let results: ResultSet = match query.category {
        Some(Category::Beach) => catalog.beaches.clone(),
        Some(Category::Temple) => catalog.temples.clone(),
        Some(Category::Country) => catalog.cities().cloned().collect(),
        None => catalog
            .all_destinations()
            .filter(|destination| name_matches(destination, &query.key))
            .cloned()
            .collect(),
    };

    debug!("Query {:?} resolved to {} destinations", query.key, results.len());

    if results.is_empty() {
        return Err(Error::NoResults);
    }

    Ok(results)
}

/// The full pipeline for one search action.
///
/// Blank input is reported as `EmptyQuery` whatever state the store is in;
/// otherwise a store that is not ready (still loading, or failed) gives
/// `NotReady`, never `NoResults`.
pub fn search(raw: &str, store: &CatalogStore) -> Result<ResultSet> {
    let query = normalize(raw)?;
    let catalog = store.catalog().ok_or(Error::NotReady)?;
    resolve(&query, &catalog)
}

fn name_matches(destination: &Destination, key: &str) -> bool {
    destination.name.to_lowercase().contains(key)
}

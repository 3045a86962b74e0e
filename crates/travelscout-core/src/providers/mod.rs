// Catalog sources - bridges the transport crate with CatalogSource
pub mod file;
pub mod http;

pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;

use crate::{
    config::CatalogConfig,
    models::{Catalog, Country, Destination, DestinationId},
    source::CatalogSource,
    Result,
};
use std::time::Duration;
use travelscout_api::{CatalogDocument, DestinationRecord};

/// Pick a source for the configured location: URLs go over HTTP, anything
/// else is read from disk.
pub fn source_from_config(config: &CatalogConfig) -> Result<Box<dyn CatalogSource>> {
    if is_remote(&config.source) {
        let timeout = Duration::from_secs(config.timeout_secs);
        Ok(Box::new(HttpCatalogSource::new(&config.source, timeout)?))
    } else {
        Ok(Box::new(FileCatalogSource::new(&config.source)))
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Convert the wire document to our internal Catalog model
fn document_to_catalog(doc: CatalogDocument) -> Catalog {
    Catalog {
        countries: doc
            .countries
            .into_iter()
            .map(|country| Country {
                name: country.name,
                cities: country.cities.into_iter().map(record_to_destination).collect(),
            })
            .collect(),
        temples: doc.temples.into_iter().map(record_to_destination).collect(),
        beaches: doc.beaches.into_iter().map(record_to_destination).collect(),
    }
}

fn record_to_destination(record: DestinationRecord) -> Destination {
    Destination {
        id: DestinationId(record.id.to_string()),
        name: record.name,
        description: record.description,
        image_url: record.image_url,
        time_zone: record.time_zone.filter(|tz| !tz.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_detection() {
        assert!(is_remote("https://example.com/data.json"));
        assert!(is_remote("http://localhost:8080/data.json"));
        assert!(!is_remote("travel_recommendation_api.json"));
        assert!(!is_remote("/srv/http/data.json"));
    }

    #[test]
    fn test_document_conversion_keeps_order_and_drops_blank_zones() {
        let json = r#"{
            "countries": [{"name": "Japan", "cities": [
                {"id": 1, "name": "Tokyo", "timeZone": "Asia/Tokyo"},
                {"id": 2, "name": "Kyoto", "timeZone": "  "}
            ]}],
            "temples": [],
            "beaches": [{"id": "b1", "name": "Bora Bora"}]
        }"#;
        let doc = travelscout_api::parse_document(json.as_bytes()).unwrap();
        let catalog = document_to_catalog(doc);

        assert_eq!(catalog.countries[0].name, "Japan");
        assert_eq!(catalog.countries[0].cities[0].id, DestinationId::from("1"));
        assert_eq!(catalog.countries[0].cities[0].time_zone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(catalog.countries[0].cities[1].time_zone, None);
        assert_eq!(catalog.beaches[0].id, DestinationId::from("b1"));
    }
}

// Transport for the destination catalog - fetch and decode, nothing else
pub mod client;
pub mod document;
pub mod error;

pub use client::CatalogClient;
pub use document::{parse_document, CatalogDocument, CountryRecord, DestinationRecord, RecordId};
pub use error::{ApiError, Result};

// Core destination lookup logic: catalog, query, resolve, render
pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod providers;
pub mod query;
pub mod render;
pub mod resolver;
pub mod slots;
pub mod source;
pub mod store;
pub mod time;

pub use config::Config;
pub use contact::{ContactError, ContactForm};
pub use error::Error;
pub use models::{Catalog, CatalogCounts, Category, Country, Destination, DestinationId, Query, ResultSet};
pub use query::normalize;
pub use render::{render, Renderer, ViewRecord, FALLBACK_IMAGE_URL};
pub use resolver::{resolve, search};
pub use slots::{SlotState, TimeSlot, TimeSlots};
pub use source::CatalogSource;
pub use store::{CatalogStore, LoadState};
pub use time::{format_local_time, format_local_time_at};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;

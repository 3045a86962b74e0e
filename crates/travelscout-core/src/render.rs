// Maps a result set to view records for the presentation layer
use crate::models::{Destination, DestinationId};
use serde::Serialize;

/// Shown when a destination's own image fails to load
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1469474968028-56623f02e42e?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80";

/// One result card, ready to display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRecord {
    pub id: DestinationId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Substituted by the presentation layer if `image_url` fails to load
    pub fallback_image_url: String,
    /// Zone for the time slot keyed by `id`; `None` means no slot
    pub time_zone: Option<String>,
}

impl ViewRecord {
    pub fn has_time_slot(&self) -> bool {
        self.time_zone.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    fallback_image_url: String,
}

impl Renderer {
    pub fn new(fallback_image_url: impl Into<String>) -> Self {
        Self {
            fallback_image_url: fallback_image_url.into(),
        }
    }

    /// Never waits on time formatting; slots are filled separately
    pub fn render(&self, results: &[Destination]) -> Vec<ViewRecord> {
        results
            .iter()
            .map(|destination| ViewRecord {
                id: destination.id.clone(),
                name: destination.name.clone(),
                description: destination.description.clone(),
                image_url: destination.image_url.clone(),
                fallback_image_url: self.fallback_image_url.clone(),
                time_zone: destination.time_zone.clone(),
            })
            .collect()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(FALLBACK_IMAGE_URL)
    }
}

/// Render with the default fallback image
pub fn render(results: &[Destination]) -> Vec<ViewRecord> {
    Renderer::default().render(results)
}

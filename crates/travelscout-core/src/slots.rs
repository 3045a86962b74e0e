// Per-result local time slots, filled independently of rendering
use crate::{models::DestinationId, render::ViewRecord, time::format_local_time_at};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const TIME_LOADING: &str = "Loading local time...";
pub const TIME_UNAVAILABLE: &str = "Timezone not available.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    Pending,
    Resolved(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub zone: String,
    pub state: SlotState,
}

impl TimeSlot {
    pub fn display_text(&self) -> String {
        match &self.state {
            SlotState::Pending => TIME_LOADING.to_string(),
            SlotState::Resolved(time) => format!("Local Time: {}", time),
            SlotState::Failed => TIME_UNAVAILABLE.to_string(),
        }
    }
}

/// Time slots for one rendered result set, keyed by destination id.
///
/// A failed slot only ever affects itself.
#[derive(Debug, Clone, Default)]
pub struct TimeSlots {
    slots: HashMap<DestinationId, TimeSlot>,
}

impl TimeSlots {
    /// One pending slot per record that carries a time zone.
    /// If two records share an id the first one's zone owns the slot.
    pub fn for_records(records: &[ViewRecord]) -> Self {
        let mut slots = HashMap::new();
        for record in records {
            if let Some(zone) = &record.time_zone {
                if slots.contains_key(&record.id) {
                    debug!("Duplicate destination id {}, sharing its time slot", record.id);
                    continue;
                }
                slots.insert(
                    record.id.clone(),
                    TimeSlot {
                        zone: zone.clone(),
                        state: SlotState::Pending,
                    },
                );
            }
        }
        Self { slots }
    }

    pub fn get(&self, id: &DestinationId) -> Option<&TimeSlot> {
        self.slots.get(id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn pending_ids(&self) -> Vec<DestinationId> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.state == SlotState::Pending)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Resolve one slot. An unknown zone marks the slot failed; it never errors.
    pub fn fill(&mut self, id: &DestinationId, now: DateTime<Utc>) -> Option<&SlotState> {
        let slot = self.slots.get_mut(id)?;
        slot.state = match format_local_time_at(&slot.zone, now) {
            Ok(time) => SlotState::Resolved(time),
            Err(e) => {
                warn!("Invalid time zone for {}: {}", id, e);
                SlotState::Failed
            }
        };
        Some(&slot.state)
    }

    pub fn fill_all(&mut self, now: DateTime<Utc>) {
        for id in self.pending_ids() {
            self.fill(&id, now);
        }
    }

    /// Text for the slot keyed by `id`, if that record has one
    pub fn display_text(&self, id: &DestinationId) -> Option<String> {
        self.slots.get(id).map(TimeSlot::display_text)
    }
}

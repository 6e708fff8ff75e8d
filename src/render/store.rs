use crate::rsroc::model::EventFields;
use std::collections::HashMap;

/// Parsed details per event link, looked up when the user hovers an event
#[derive(Debug, Default)]
pub struct EventDetailsStore {
    details: HashMap<String, EventFields>,
}

impl EventDetailsStore {
    pub fn insert(&mut self, link: String, fields: EventFields) {
        self.details.insert(link, fields);
    }

    pub fn get(&self, link: &str) -> Option<&EventFields> {
        self.details.get(link)
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

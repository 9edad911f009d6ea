//! URL builder for the participant REST endpoints

use crate::model::{EventId, ParticipantId};

/// Builds the REST API URLs relative to a server origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base_url: String,
}

impl ApiRoutes {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET: participants linked to the event
    pub fn participants(&self, event: EventId) -> String {
        format!("{}/api/events/{}/participants", self.base_url, event)
    }

    /// GET: participants that can still be linked to the event
    pub fn available_participants(&self, event: EventId) -> String {
        format!("{}/api/events/{}/available-participants", self.base_url, event)
    }

    /// POST links, DELETE unlinks
    pub fn event_participant(&self, event: EventId, person: ParticipantId) -> String {
        format!(
            "{}/api/events/{}/participants/{}/",
            self.base_url, event, person
        )
    }

    /// PUT: save participant edits
    pub fn participant(&self, person: ParticipantId) -> String {
        format!("{}/api/participants/{}/", self.base_url, person)
    }
}

//! Participant API client with the panel's load, save and link semantics
//!
//! Loads are fire-and-forget from the UI's point of view: the `_or_empty`
//! forms log and swallow failures. A failed save raises one alert. Link and
//! unlink reload the page on success and stay silent on failure.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::io::{HttpClient, PageEffects};
use crate::model::{EventId, Participant, ParticipantId};
use crate::routes::ApiRoutes;
use crate::Result;

/// Client for the participant endpoints of one server
#[derive(Debug, Clone)]
pub struct ParticipantClient<H, P> {
    routes: ApiRoutes,
    http: H,
    page: P,
}

impl<H: HttpClient, P: PageEffects> ParticipantClient<H, P> {
    pub fn new(routes: ApiRoutes, http: H, page: P) -> Self {
        Self { routes, http, page }
    }

    pub fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Participants currently linked to the event
    pub async fn load_participants(&self, event: EventId) -> Result<Vec<Participant>> {
        self.get_json(&self.routes.participants(event)).await
    }

    /// Participants that exist but are not linked to the event
    pub async fn load_available(&self, event: EventId) -> Result<Vec<Participant>> {
        self.get_json(&self.routes.available_participants(event))
            .await
    }

    /// Linked participants, or an empty list when the request fails
    pub async fn fetch_participants_or_empty(&self, event: EventId) -> Vec<Participant> {
        self.load_participants(event).await.unwrap_or_else(|e| {
            warn!("Loading participants for event {} failed: {}", event, e);
            Vec::new()
        })
    }

    /// Available participants, or an empty list when the request fails
    pub async fn fetch_available_or_empty(&self, event: EventId) -> Vec<Participant> {
        self.load_available(event).await.unwrap_or_else(|e| {
            warn!(
                "Loading available participants for event {} failed: {}",
                event, e
            );
            Vec::new()
        })
    }

    /// PUT the whole participant back to the server
    ///
    /// Any failure is shown with one alert carrying the raw error text. A
    /// success changes nothing on the page.
    pub async fn save_person(&self, participant: &Participant) -> Result<()> {
        let url = self.routes.participant(participant.id);
        let outcome = match serde_json::to_string(participant) {
            Ok(body) => match self.http.put_json(&url, &body).await {
                Ok(response) => response.error_for_status().map(|_| ()),
                Err(e) => Err(e),
            },
            Err(e) => Err(e.into()),
        };

        match outcome {
            Ok(()) => {
                info!("Saved participant {}", participant.id);
                Ok(())
            }
            Err(e) => {
                warn!("Saving participant {} failed: {}", participant.id, e);
                self.page.alert(&e.alert_text());
                Err(e)
            }
        }
    }

    /// Link a participant to the event, reloading the page on success
    pub async fn link_person(&self, event: EventId, person: ParticipantId) -> Result<()> {
        let url = self.routes.event_participant(event, person);
        let outcome = match self.http.post(&url).await {
            Ok(response) => response.error_for_status().map(|_| ()),
            Err(e) => Err(e),
        };
        self.reload_on_success("link", event, person, outcome)
    }

    /// Unlink a participant from the event, reloading the page on success
    pub async fn unlink_person(&self, event: EventId, person: ParticipantId) -> Result<()> {
        let url = self.routes.event_participant(event, person);
        let outcome = match self.http.delete(&url).await {
            Ok(response) => response.error_for_status().map(|_| ()),
            Err(e) => Err(e),
        };
        self.reload_on_success("unlink", event, person, outcome)
    }

    fn reload_on_success(
        &self,
        action: &str,
        event: EventId,
        person: ParticipantId,
        outcome: Result<()>,
    ) -> Result<()> {
        match outcome {
            Ok(()) => {
                info!("{} of participant {} to event {} done", action, person, event);
                self.page.reload();
                Ok(())
            }
            Err(e) => {
                warn!(
                    "{} of participant {} to event {} failed: {}",
                    action, person, event, e
                );
                Err(e)
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).await?.error_for_status()?;
        debug!("Decoding {} bytes from {}", response.body.len(), url);
        Ok(serde_json::from_str(&response.body)?)
    }
}

//! Elements the event page must provide before the panel mounts

/// Hidden input holding the current event's id
pub const EVENT_ID_INPUT: &str = "event_id";

/// Table the attendee rows are appended to
pub const ATTENDEE_TABLE: &str = "attendee-table";

/// Container the available-participant selector is appended to
pub const AVAILABLE_CONTAINER: &str = "available-participants";

#[cfg(feature = "csr")]
mod browser {
    use streetcrm_participants::{EventId, PanelError, Result};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, HtmlInputElement};

    pub fn document() -> Result<Document> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PanelError::MissingElement("document".to_string()))
    }

    pub fn html_element(document: &Document, id: &str) -> Result<HtmlElement> {
        document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| PanelError::MissingElement(id.to_string()))
    }

    /// Parse the event id out of the page's hidden input
    pub fn read_event_id(document: &Document) -> Result<EventId> {
        let input = document
            .get_element_by_id(super::EVENT_ID_INPUT)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            .ok_or_else(|| PanelError::MissingElement(super::EVENT_ID_INPUT.to_string()))?;
        input.value().parse()
    }
}

#[cfg(feature = "csr")]
pub use browser::{document, html_element, read_event_id};

//! streetcrm participants - client side of the event participant panel
//!
//! Fetches the participants linked to an event and those still available,
//! projects them into editable attendee rows, and sends link, unlink and
//! save requests to the streetcrm REST API. The crate builds for native
//! targets and for `wasm32`; the browser front end supplies its own
//! transport through [`io::HttpClient`].

pub mod client;
pub mod error;
pub mod io;
pub mod model;
pub mod panel;
pub mod routes;
pub mod row;

pub use client::ParticipantClient;
pub use error::{PanelError, Result};
pub use model::{Address, EventId, Institution, Participant, ParticipantId, Text};
pub use panel::{ParticipantPanel, RowAction, RowControls, RowMode};
pub use routes::ApiRoutes;
pub use row::{RowField, RowView};

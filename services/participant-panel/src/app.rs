//! Panel wiring: one shared state signal, two mount points, two loads

use leptos::prelude::*;
use leptos::task::spawn_local;
use streetcrm_participants::ParticipantPanel;

use crate::api::BrowserClient;

/// Fetch both participant lists for the panel's event
///
/// The requests are independent and fire-and-forget: a failure leaves its
/// section empty, and nothing orders the two responses.
pub fn load(panel: RwSignal<ParticipantPanel>, client: BrowserClient) {
    let event = panel.with_untracked(|p| p.event_id());

    let rows_client = client.clone();
    spawn_local(async move {
        let records = rows_client.fetch_participants_or_empty(event).await;
        tracing::debug!("Rendering {} participants", records.len());
        panel.update(|p| p.render_rows(records));
    });

    spawn_local(async move {
        let available = client.fetch_available_or_empty(event).await;
        panel.update(|p| p.set_available(available));
    });
}

/// Mount the attendee rows and the selector into the current page
#[cfg(feature = "csr")]
pub fn mount_panel() -> streetcrm_participants::Result<()> {
    use crate::components::attendee_rows::AttendeeRows;
    use crate::components::available_selector::AvailableSelector;
    use crate::dom;

    let document = dom::document()?;
    let event = dom::read_event_id(&document)?;
    let table = dom::html_element(&document, dom::ATTENDEE_TABLE)?;
    let container = dom::html_element(&document, dom::AVAILABLE_CONTAINER)?;

    let client = crate::api::browser_client();
    let panel = RwSignal::new(ParticipantPanel::new(event));

    let rows_client = client.clone();
    leptos::mount::mount_to(table, move || {
        view! { <AttendeeRows panel=panel client=rows_client /> }
    })
    .forget();

    let selector_client = client.clone();
    leptos::mount::mount_to(container, move || {
        view! { <AvailableSelector panel=panel client=selector_client /> }
    })
    .forget();

    tracing::info!("Participant panel mounted for event {}", event);
    load(panel, client);
    Ok(())
}

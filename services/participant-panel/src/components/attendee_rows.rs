//! Attendee table body

use leptos::prelude::*;
use streetcrm_participants::ParticipantPanel;

use crate::api::BrowserClient;
use crate::components::participant_row::ParticipantRow;

/// One row per rendered participant, in render order
///
/// Only the row count is tracked here, so typing into a row's inputs does not
/// rebuild the table.
#[component]
pub fn AttendeeRows(panel: RwSignal<ParticipantPanel>, client: BrowserClient) -> impl IntoView {
    let row_count = Memo::new(move |_| panel.with(|p| p.rows().len()));

    view! {
        <tbody class="attendees">
            {move || {
                (0..row_count.get())
                    .map(|index| {
                        view! { <ParticipantRow panel=panel index=index client=client.clone() /> }
                    })
                    .collect::<Vec<_>>()
            }}
        </tbody>
    }
}

//! Selector for participants not yet linked to the event

use leptos::prelude::*;
use leptos::task::spawn_local;
use streetcrm_participants::{Participant, ParticipantId, ParticipantPanel};

use crate::api::BrowserClient;

/// Drop-down of available participants and an Add button that links the
/// selected one
#[component]
pub fn AvailableSelector(
    panel: RwSignal<ParticipantPanel>,
    client: BrowserClient,
) -> impl IntoView {
    let available = Memo::new(move |_| panel.with(|p| p.available().to_vec()));
    let selected = RwSignal::new(None::<ParticipantId>);
    let event = panel.with_untracked(|p| p.event_id());

    let link_selected = move |_| {
        let Some(person) = selected.get_untracked() else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            client.link_person(event, person).await.ok();
        });
    };

    view! {
        <select
            name="available_participant"
            on:change=move |ev| {
                selected.set(event_target_value(&ev).parse::<u64>().ok().map(ParticipantId));
            }
        >
            <option value="">"Select a participant"</option>
            {move || {
                available
                    .get()
                    .into_iter()
                    .map(|person: Participant| {
                        view! { <option value=person.id.to_string()>{person.full_name()}</option> }
                    })
                    .collect::<Vec<_>>()
            }}
        </select>
        <button type="button" on:click=link_selected>"Add"</button>
    }
}

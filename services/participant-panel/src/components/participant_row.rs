//! A single attendee row with its display text, inputs and actions

use leptos::prelude::*;
use leptos::task::spawn_local;
use streetcrm_participants::{ParticipantPanel, RowAction, RowControls, RowField, RowMode};

use crate::api::BrowserClient;

fn display(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "none"
    }
}

fn draft_value(panel: RwSignal<ParticipantPanel>, index: usize, field: RowField) -> String {
    panel.with(|p| {
        p.row(index)
            .map(|row| row.draft().get(field).to_string())
            .unwrap_or_default()
    })
}

/// Row `index` of the panel
///
/// The text is a snapshot taken when the row was rendered; only visibility
/// and input values react to the panel.
#[component]
pub fn ParticipantRow(
    panel: RwSignal<ParticipantPanel>,
    index: usize,
    client: BrowserClient,
) -> impl IntoView {
    let Some(snapshot) = panel.with_untracked(|p| p.row(index).map(|row| row.view().clone()))
    else {
        return ().into_any();
    };
    let controls = Memo::new(move |_| {
        panel.with(|p| {
            p.row(index)
                .map(|row| row.controls())
                .unwrap_or_else(|| RowControls::for_mode(RowMode::Display))
        })
    });

    let simple_fields = [
        RowField::FirstName,
        RowField::LastName,
        RowField::Institution,
        RowField::PhoneNumber,
    ];
    let address_inputs = RowField::ALL
        .into_iter()
        .filter(|field| field.is_address())
        .map(|field| view! { <FieldInput panel=panel index=index field=field controls=controls /> })
        .collect::<Vec<_>>();
    let address_line = snapshot.address_line();
    let hidden_id = snapshot.hidden_id();

    view! {
        <tr class="attendee">
            {simple_fields
                .into_iter()
                .map(|field| {
                    let text = snapshot.display(field).to_string();
                    view! {
                        <td class=field.key()>
                            <span class="display-only" style:display=move || display(controls.get().text_visible)>
                                {text}
                            </span>
                            <FieldInput panel=panel index=index field=field controls=controls />
                        </td>
                    }
                })
                .collect::<Vec<_>>()}
            <td class="address">
                <span class="display-only" style:display=move || display(controls.get().text_visible)>
                    {address_line}
                </span>
                {address_inputs}
            </td>
            <td class="actions">
                <input type="hidden" name="participant_id" value=hidden_id />
                {RowAction::ALL
                    .into_iter()
                    .map(|action| {
                        let client = client.clone();
                        view! {
                            <button
                                type="button"
                                class=action.label().to_lowercase()
                                style:display=move || display(controls.get().shows(action))
                                on:click=move |_| run_action(action, panel, index, &client)
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </td>
        </tr>
    }
    .into_any()
}

/// Text input bound to one field of the row's draft
#[component]
fn FieldInput(
    panel: RwSignal<ParticipantPanel>,
    index: usize,
    field: RowField,
    controls: Memo<RowControls>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="editable"
            name=field.key()
            style:display=move || display(controls.get().inputs_visible)
            prop:value=move || draft_value(panel, index, field)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                panel.update(|p| p.edit_field(index, field, &value));
            }
        />
    }
}

/// Handler behind each row button, scoped to the row it was built for
fn run_action(
    action: RowAction,
    panel: RwSignal<ParticipantPanel>,
    index: usize,
    client: &BrowserClient,
) {
    let Some(row) = panel.with_untracked(|p| p.row(index).cloned()) else {
        return;
    };
    let id = row.participant_id();

    match action {
        RowAction::Edit => {
            panel.update(|p| {
                p.make_editable(id);
            });
        }
        RowAction::Cancel => {
            panel.update(|p| {
                p.cancel_edit(id);
            });
        }
        RowAction::Save => {
            let client = client.clone();
            let participant = row.edited_participant();
            spawn_local(async move {
                client.save_person(&participant).await.ok();
            });
        }
        RowAction::Remove => {
            let client = client.clone();
            let event = row.view().event_id;
            spawn_local(async move {
                client.unlink_person(event, id).await.ok();
            });
        }
    }
}

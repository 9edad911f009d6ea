//! Attendee table state: rendered rows, edit mode and the available list
//!
//! All state lives in one `ParticipantPanel`, mutated only from the UI event
//! loop. Rows are a display-only projection of what the server returned at
//! fetch time; local edits stay in each row's draft until saved.

use crate::model::{EventId, Participant, ParticipantId};
use crate::row::{RowDraft, RowField, RowView};

/// Whether a row shows static text or its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Display,
    Editing,
}

/// Controls a row can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Save,
    Cancel,
    Remove,
}

impl RowAction {
    pub const ALL: [RowAction; 4] = [
        RowAction::Edit,
        RowAction::Save,
        RowAction::Cancel,
        RowAction::Remove,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Save => "Save",
            RowAction::Cancel => "Cancel",
            RowAction::Remove => "Remove",
        }
    }
}

/// Visibility of the pieces of a row for its current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowControls {
    pub text_visible: bool,
    pub inputs_visible: bool,
    pub edit: bool,
    pub save: bool,
    pub cancel: bool,
    pub remove: bool,
}

impl RowControls {
    pub fn for_mode(mode: RowMode) -> Self {
        let editing = mode == RowMode::Editing;
        Self {
            text_visible: !editing,
            inputs_visible: editing,
            edit: !editing,
            save: editing,
            cancel: editing,
            remove: !editing,
        }
    }

    pub fn shows(&self, action: RowAction) -> bool {
        match action {
            RowAction::Edit => self.edit,
            RowAction::Save => self.save,
            RowAction::Cancel => self.cancel,
            RowAction::Remove => self.remove,
        }
    }
}

/// One rendered attendee row
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRow {
    view: RowView,
    original: Participant,
    draft: RowDraft,
    mode: RowMode,
}

impl PanelRow {
    fn new(participant: Participant, event_id: EventId) -> Self {
        Self {
            view: RowView::project(&participant, event_id),
            draft: RowDraft::from_participant(&participant),
            original: participant,
            mode: RowMode::Display,
        }
    }

    pub fn participant_id(&self) -> ParticipantId {
        self.original.id
    }

    pub fn view(&self) -> &RowView {
        &self.view
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn controls(&self) -> RowControls {
        RowControls::for_mode(self.mode)
    }

    pub fn draft(&self) -> &RowDraft {
        &self.draft
    }

    /// The object a save sends: the fetched record with local edits applied
    pub fn edited_participant(&self) -> Participant {
        self.draft.apply_to(&self.original)
    }
}

/// State behind the attendee table and the available-participant selector
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantPanel {
    event_id: EventId,
    rows: Vec<PanelRow>,
    available: Vec<Participant>,
}

impl ParticipantPanel {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            rows: Vec::new(),
            available: Vec::new(),
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&PanelRow> {
        self.rows.get(index)
    }

    pub fn available(&self) -> &[Participant] {
        &self.available
    }

    /// Append a row for a participant
    ///
    /// Every row is forced back to display mode before and after the append,
    /// so edit state never survives a render. Rows for the same participant
    /// are not de-duplicated.
    pub fn render_row(&mut self, participant: Participant) {
        self.hide_editable();
        tracing::debug!(
            "Rendering row for participant {} in event {}",
            participant.id,
            self.event_id
        );
        self.rows.push(PanelRow::new(participant, self.event_id));
        self.hide_editable();
    }

    pub fn render_rows(&mut self, participants: impl IntoIterator<Item = Participant>) {
        for participant in participants {
            self.render_row(participant);
        }
    }

    pub fn set_available(&mut self, participants: Vec<Participant>) {
        self.available = participants;
    }

    /// Drop every row and the available list
    pub fn clear(&mut self) {
        self.rows.clear();
        self.available.clear();
    }

    /// Show inputs and Save/Cancel for every row of this participant
    ///
    /// Returns the number of rows switched.
    pub fn make_editable(&mut self, id: ParticipantId) -> usize {
        self.set_mode(id, RowMode::Editing)
    }

    /// Show text and Edit/Remove for every row of this participant
    ///
    /// Local input edits are kept. Returns the number of rows switched.
    pub fn make_display_only(&mut self, id: ParticipantId) -> usize {
        self.set_mode(id, RowMode::Display)
    }

    /// Discard local edits and return to display mode
    pub fn cancel_edit(&mut self, id: ParticipantId) -> usize {
        for row in self.rows.iter_mut().filter(|r| r.participant_id() == id) {
            row.draft = RowDraft::from_participant(&row.original);
        }
        self.make_display_only(id)
    }

    /// Record a keystroke in one row's input
    pub fn edit_field(&mut self, index: usize, field: RowField, value: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.draft.set(field, value);
        }
    }

    fn set_mode(&mut self, id: ParticipantId, mode: RowMode) -> usize {
        let mut switched = 0;
        for row in self.rows.iter_mut().filter(|r| r.participant_id() == id) {
            row.mode = mode;
            switched += 1;
        }
        if switched == 0 {
            tracing::debug!("No rendered row for participant {}", id);
        }
        switched
    }

    fn hide_editable(&mut self) {
        for row in &mut self.rows {
            row.mode = RowMode::Display;
        }
    }
}

//! Projection of a participant into one attendee table row

use std::collections::BTreeMap;

use crate::model::{EventId, Participant, ParticipantId};

/// Editable columns of an attendee row, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowField {
    FirstName,
    LastName,
    Institution,
    PhoneNumber,
    AddressNumber,
    AddressDirection,
    AddressName,
    AddressType,
}

impl RowField {
    pub const ALL: [RowField; 8] = [
        RowField::FirstName,
        RowField::LastName,
        RowField::Institution,
        RowField::PhoneNumber,
        RowField::AddressNumber,
        RowField::AddressDirection,
        RowField::AddressName,
        RowField::AddressType,
    ];

    /// Input name, also used as the column's CSS hook
    pub fn key(self) -> &'static str {
        match self {
            RowField::FirstName => "first_name",
            RowField::LastName => "last_name",
            RowField::Institution => "institution",
            RowField::PhoneNumber => "phone_number",
            RowField::AddressNumber => "address_number",
            RowField::AddressDirection => "address_direction",
            RowField::AddressName => "address_name",
            RowField::AddressType => "address_type",
        }
    }

    pub fn is_address(self) -> bool {
        matches!(
            self,
            RowField::AddressNumber
                | RowField::AddressDirection
                | RowField::AddressName
                | RowField::AddressType
        )
    }

    /// Current value of this field on a participant
    pub fn read(self, participant: &Participant) -> String {
        let part = |i: usize| {
            participant
                .address()
                .map(|a| a.parts()[i].clone())
                .unwrap_or_default()
        };
        match self {
            RowField::FirstName => participant.first_name.text(),
            RowField::LastName => participant.last_name.text(),
            RowField::Institution => participant.institution_name(),
            RowField::PhoneNumber => participant.phone(),
            RowField::AddressNumber => part(0),
            RowField::AddressDirection => part(1),
            RowField::AddressName => part(2),
            RowField::AddressType => part(3),
        }
    }

    /// Write a value from an input back onto a participant
    pub fn write(self, participant: &mut Participant, value: &str) {
        match self {
            RowField::FirstName => participant.first_name.set(value),
            RowField::LastName => participant.last_name.set(value),
            RowField::Institution => participant.institution_mut().name.set(value),
            RowField::PhoneNumber => participant.phone_number.set(value),
            RowField::AddressNumber => participant.address_mut().number.set(value),
            RowField::AddressDirection => participant.address_mut().direction.set(value),
            RowField::AddressName => participant.address_mut().name.set(value),
            RowField::AddressType => participant.address_mut().kind.set(value),
        }
    }
}

/// Display text and input value of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCell {
    pub field: RowField,
    pub display: String,
    pub input: String,
}

/// What a rendered row shows for a participant at fetch time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub participant_id: ParticipantId,
    pub event_id: EventId,
    fields: Vec<FieldCell>,
}

impl RowView {
    pub fn project(participant: &Participant, event_id: EventId) -> Self {
        let fields = RowField::ALL
            .iter()
            .map(|&field| {
                let value = field.read(participant);
                FieldCell {
                    field,
                    display: value.clone(),
                    input: value,
                }
            })
            .collect();

        Self {
            participant_id: participant.id,
            event_id,
            fields,
        }
    }

    /// Cells in table order, one per `RowField`
    pub fn fields(&self) -> &[FieldCell] {
        &self.fields
    }

    pub fn field(&self, field: RowField) -> Option<&FieldCell> {
        self.fields.iter().find(|cell| cell.field == field)
    }

    /// Display text of a field, empty when the row has no such cell
    pub fn display(&self, field: RowField) -> &str {
        self.field(field).map(|cell| cell.display.as_str()).unwrap_or("")
    }

    /// Value of the hidden id input
    pub fn hidden_id(&self) -> String {
        self.participant_id.to_string()
    }

    /// Visible cells: first name, last name, institution, phone, address
    pub fn cells(&self) -> [String; 5] {
        [
            self.display(RowField::FirstName).to_string(),
            self.display(RowField::LastName).to_string(),
            self.display(RowField::Institution).to_string(),
            self.display(RowField::PhoneNumber).to_string(),
            self.address_line(),
        ]
    }

    pub fn address_line(&self) -> String {
        self.fields
            .iter()
            .filter(|cell| cell.field.is_address())
            .map(|cell| cell.display.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Local input values of a row, pending a save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDraft {
    values: BTreeMap<RowField, String>,
}

impl RowDraft {
    pub fn from_participant(participant: &Participant) -> Self {
        Self {
            values: RowField::ALL
                .iter()
                .map(|&field| (field, field.read(participant)))
                .collect(),
        }
    }

    pub fn get(&self, field: RowField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: RowField, value: &str) {
        self.values.insert(field, value.to_string());
    }

    /// The participant with every changed input written over it
    ///
    /// Unchanged fields are left alone, so absent optional members stay absent.
    pub fn apply_to(&self, original: &Participant) -> Participant {
        let mut edited = original.clone();
        for (&field, value) in &self.values {
            if field.read(original) != *value {
                field.write(&mut edited, value);
            }
        }
        edited
    }
}

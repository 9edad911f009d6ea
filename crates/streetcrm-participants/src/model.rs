//! Participant and event types as served by the streetcrm REST API
//!
//! Records are owned by the server. Members this crate does not know about
//! are kept in `extra` so a save sends them back untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::PanelError;

/// Identifier of the event whose participants are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = PanelError;

    /// Parse the value of the page's hidden event input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(EventId)
            .map_err(|_| PanelError::InvalidEventId(s.to_string()))
    }
}

/// Server-assigned participant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scalar member kept exactly as the server sent it
///
/// The server writes null for empty nullable columns and may send numbers
/// for address parts. Any JSON value is accepted and written back unchanged;
/// Absent members are left out of the serialized object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text(Option<Value>);

impl Text {
    /// A member not present on the record
    pub const ABSENT: Text = Text(None);

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Display form: strings as-is, numbers and booleans printed, anything else empty
    pub fn text(&self) -> String {
        match &self.0 {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn set(&mut self, value: &str) {
        self.0 = Some(Value::String(value.to_string()));
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(Some(Value::String(value.to_string())))
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Text(Some(value)))
    }
}

/// Keeps an explicit null apart from a missing member: `Some(None)` is null
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A person who can be linked to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(default, skip_serializing_if = "Text::is_absent")]
    pub first_name: Text,
    #[serde(default, skip_serializing_if = "Text::is_absent")]
    pub last_name: Text,
    #[serde(default, skip_serializing_if = "Text::is_absent")]
    pub phone_number: Text,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub institution: Option<Option<Institution>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<Option<Address>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Participant {
    /// A participant with only an id and a name, everything else absent
    pub fn new(id: u64, first_name: &str, last_name: &str) -> Self {
        Self {
            id: ParticipantId(id),
            first_name: Text::from(first_name),
            last_name: Text::from(last_name),
            phone_number: Text::ABSENT,
            institution: None,
            address: None,
            extra: Map::new(),
        }
    }

    /// "First Last", used by the available-participant selector
    pub fn full_name(&self) -> String {
        [self.first_name.text(), self.last_name.text()]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn institution(&self) -> Option<&Institution> {
        self.institution.as_ref().and_then(Option::as_ref)
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref().and_then(Option::as_ref)
    }

    /// The institution, created empty when absent or null
    pub fn institution_mut(&mut self) -> &mut Institution {
        self.institution
            .get_or_insert(None)
            .get_or_insert_with(Institution::default)
    }

    /// The address, created empty when absent or null
    pub fn address_mut(&mut self) -> &mut Address {
        self.address
            .get_or_insert(None)
            .get_or_insert_with(Address::default)
    }

    pub fn institution_name(&self) -> String {
        self.institution()
            .map(|i| i.name.text())
            .unwrap_or_default()
    }

    pub fn phone(&self) -> String {
        self.phone_number.text()
    }
}

/// Institution a participant belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(default, skip_serializing_if = "Text::is_absent")]
    pub name: Text,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Street address split the way the server stores it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Text::is_absent")]
    pub number: Text,
    #[serde(default, skip_serializing_if = "Text::is_absent")]
    pub direction: Text,
    #[serde(default, skip_serializing_if = "Text::is_absent")]
    pub name: Text,
    #[serde(default, rename = "type", skip_serializing_if = "Text::is_absent")]
    pub kind: Text,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    /// Subfields in display order: number, direction, name, type
    pub fn parts(&self) -> [String; 4] {
        [
            self.number.text(),
            self.direction.text(),
            self.name.text(),
            self.kind.text(),
        ]
    }

    /// Single-line address; empty subfields are skipped
    pub fn line(&self) -> String {
        self.parts()
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

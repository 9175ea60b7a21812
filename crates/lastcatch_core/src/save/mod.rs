pub mod document;

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldSource, FieldValue};

pub use document::SaveDocument;

/// Largest party the games allow.
pub const MAX_PARTY_SIZE: usize = 6;

/// Upper bound on slots per storage box. Games store at most 30.
pub const MAX_BOX_SLOTS: usize = 32;

/// Read-only view of a decoded save.
///
/// Trainer id fields differ between game generations, so they are reached by
/// name through [`FieldSource`] rather than through dedicated accessors.
pub trait SaveModel: FieldSource {
    fn trainer_name(&self) -> &str;
    fn money(&self) -> u32;
    fn play_time(&self) -> PlayTime;
    fn version_label(&self) -> &str;
    fn generation(&self) -> u8;

    fn party_count(&self) -> usize;
    fn party_slot(&self, index: usize) -> Option<&CreatureSlot>;

    fn box_count(&self) -> usize;
    fn box_slot_count(&self) -> usize;
    fn box_slot(&self, box_index: usize, slot: usize) -> Option<&CreatureSlot>;

    fn has_pokedex(&self) -> bool;
    fn seen_count(&self) -> u32;
    fn caught_count(&self) -> u32;
    fn max_species(&self) -> u16;
    fn is_seen(&self, species: u16) -> bool;
    fn is_caught(&self, species: u16) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayTime {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
}

impl fmt::Display for PlayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreatureSlot {
    pub species: u16,
    pub species_name: Option<String>,
    pub nickname: String,
    pub ot_name: String,
    pub met_date: Option<NaiveDate>,
    pub level: u8,
    pub encounter_type: i32,
    pub met_location: i32,
    pub egg_location: i32,
    pub ball: i32,
    pub is_egg: bool,
    pub attributes: BTreeMap<String, FieldValue>,
}

impl CreatureSlot {
    pub fn is_empty(&self) -> bool {
        self.species == 0
    }

    /// Species label for display; the numeric id when no name is known.
    pub fn species_label(&self) -> String {
        match &self.species_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self.species.to_string(),
        }
    }
}

impl FieldSource for CreatureSlot {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.attributes.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_time_pads_minutes_and_seconds() {
        let t = PlayTime {
            hours: 102,
            minutes: 4,
            seconds: 9,
        };
        assert_eq!(t.to_string(), "102:04:09");
    }

    #[test]
    fn species_label_falls_back_to_id() {
        let mut slot = CreatureSlot {
            species: 25,
            ..CreatureSlot::default()
        };
        assert_eq!(slot.species_label(), "25");
        slot.species_name = Some("Pikachu".to_string());
        assert_eq!(slot.species_label(), "Pikachu");
    }

    #[test]
    fn misspelled_slot_field_is_rejected() {
        let err = serde_json::from_str::<CreatureSlot>(r#"{"species": 129, "met_dat": "2018-03-01"}"#)
            .expect_err("unknown slot field");
        assert!(err.to_string().contains("met_dat"));
    }

    #[test]
    fn odd_attribute_shapes_still_parse() {
        let slot: CreatureSlot = serde_json::from_str(
            r#"{"species": 129, "attributes": {"ribbons": [1, 2], "memory": {"kind": 4}, "ht_friendship": 70}}"#,
        )
        .expect("slot parses");
        assert_eq!(
            crate::fields::resolve_int(&slot, &crate::fields::FRIENDSHIP_FIELDS, crate::fields::UNKNOWN),
            70
        );
    }
}

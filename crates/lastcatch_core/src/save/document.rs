use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Read};

use serde::{Deserialize, Serialize};

use super::{CreatureSlot, MAX_BOX_SLOTS, MAX_PARTY_SIZE, PlayTime, SaveModel};
use crate::fields::{FieldSource, FieldValue};

pub const FORMAT_VERSION: u32 = 1;

/// A decoded save serialized as JSON by an external dumper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveDocument {
    pub format_version: u32,
    pub trainer: TrainerRecord,
    #[serde(default)]
    pub party: Vec<Option<CreatureSlot>>,
    #[serde(default)]
    pub boxes: BoxStorage,
    #[serde(default)]
    pub pokedex: DexRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerRecord {
    pub name: String,
    #[serde(default)]
    pub money: u32,
    #[serde(default)]
    pub play_time: PlayTime,
    pub version: String,
    pub generation: u8,
    #[serde(default)]
    pub attributes: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxStorage {
    pub slot_count: usize,
    #[serde(default)]
    pub boxes: Vec<Vec<Option<CreatureSlot>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DexRecord {
    pub enabled: bool,
    pub max_species: u16,
    #[serde(default)]
    pub seen: BTreeSet<u16>,
    #[serde(default)]
    pub caught: BTreeSet<u16>,
}

impl SaveDocument {
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let doc: Self = serde_json::from_reader(reader)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn from_slice(bytes: &[u8]) -> io::Result<Self> {
        Self::from_reader(bytes)
    }

    pub fn validate(&self) -> io::Result<()> {
        if self.format_version != FORMAT_VERSION {
            return Err(invalid(format!(
                "unsupported snapshot format_version {}, expected {FORMAT_VERSION}",
                self.format_version
            )));
        }
        if !(1..=9).contains(&self.trainer.generation) {
            return Err(invalid(format!(
                "generation {} out of range 1-9",
                self.trainer.generation
            )));
        }
        let t = self.trainer.play_time;
        if t.minutes >= 60 || t.seconds >= 60 {
            return Err(invalid(format!("invalid play time {t}")));
        }
        if self.party.len() > MAX_PARTY_SIZE {
            return Err(invalid(format!(
                "party holds {} slots, at most {MAX_PARTY_SIZE} supported",
                self.party.len()
            )));
        }
        if self.boxes.slot_count > MAX_BOX_SLOTS {
            return Err(invalid(format!(
                "box slot_count {} exceeds {MAX_BOX_SLOTS}",
                self.boxes.slot_count
            )));
        }
        for (index, row) in self.boxes.boxes.iter().enumerate() {
            if row.len() > self.boxes.slot_count {
                return Err(invalid(format!(
                    "box {index} holds {} slots, slot_count is {}",
                    row.len(),
                    self.boxes.slot_count
                )));
            }
        }
        let max = self.pokedex.max_species;
        for (label, ids) in [("seen", &self.pokedex.seen), ("caught", &self.pokedex.caught)] {
            if let Some(bad) = ids.iter().find(|&&id| id == 0 || id > max) {
                return Err(invalid(format!(
                    "{label} species {bad} outside 1-{max}"
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

impl FieldSource for SaveDocument {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.trainer.attributes.get(name)
    }
}

impl SaveModel for SaveDocument {
    fn trainer_name(&self) -> &str {
        &self.trainer.name
    }

    fn money(&self) -> u32 {
        self.trainer.money
    }

    fn play_time(&self) -> PlayTime {
        self.trainer.play_time
    }

    fn version_label(&self) -> &str {
        &self.trainer.version
    }

    fn generation(&self) -> u8 {
        self.trainer.generation
    }

    fn party_count(&self) -> usize {
        self.party.len()
    }

    fn party_slot(&self, index: usize) -> Option<&CreatureSlot> {
        self.party.get(index)?.as_ref()
    }

    fn box_count(&self) -> usize {
        self.boxes.boxes.len()
    }

    fn box_slot_count(&self) -> usize {
        self.boxes.slot_count
    }

    fn box_slot(&self, box_index: usize, slot: usize) -> Option<&CreatureSlot> {
        self.boxes.boxes.get(box_index)?.get(slot)?.as_ref()
    }

    fn has_pokedex(&self) -> bool {
        self.pokedex.enabled
    }

    fn seen_count(&self) -> u32 {
        self.pokedex.seen.len() as u32
    }

    fn caught_count(&self) -> u32 {
        self.pokedex.caught.len() as u32
    }

    fn max_species(&self) -> u16 {
        self.pokedex.max_species
    }

    fn is_seen(&self, species: u16) -> bool {
        self.pokedex.seen.contains(&species)
    }

    fn is_caught(&self, species: u16) -> bool {
        self.pokedex.caught.contains(&species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "format_version": 1,
        "trainer": { "name": "Red", "version": "Red", "generation": 1 }
    }"#;

    fn with_body(extra: &str) -> String {
        format!(
            r#"{{"format_version": 1,
                "trainer": {{ "name": "Red", "version": "Red", "generation": 1 }},
                {extra}}}"#
        )
    }

    #[test]
    fn minimal_document_has_empty_storage() {
        let doc = SaveDocument::from_slice(MINIMAL.as_bytes()).expect("minimal doc parses");
        assert_eq!(doc.party_count(), 0);
        assert_eq!(doc.box_count(), 0);
        assert!(!doc.has_pokedex());
        assert_eq!(doc.play_time(), PlayTime::default());
    }

    #[test]
    fn short_box_rows_read_as_empty_slots() {
        let json = with_body(
            r#""boxes": { "slot_count": 30, "boxes": [[{ "species": 1 }, null]] }"#,
        );
        let doc = SaveDocument::from_slice(json.as_bytes()).expect("doc parses");
        assert_eq!(doc.box_slot(0, 0).map(|s| s.species), Some(1));
        assert!(doc.box_slot(0, 1).is_none());
        assert!(doc.box_slot(0, 29).is_none());
        assert!(doc.box_slot(1, 0).is_none());
    }

    #[test]
    fn rejects_oversized_party() {
        let json = with_body(r#""party": [null, null, null, null, null, null, null]"#);
        let err = SaveDocument::from_slice(json.as_bytes()).expect_err("party too large");
        assert!(err.to_string().contains("party holds 7 slots"));
    }

    #[test]
    fn rejects_oversized_box_slot_count() {
        let json = with_body(r#""boxes": { "slot_count": 1000000000000, "boxes": [[]] }"#);
        let err = SaveDocument::from_slice(json.as_bytes()).expect_err("slot_count too large");
        assert!(err.to_string().contains("slot_count 1000000000000 exceeds 32"));

        let json = with_body(r#""boxes": { "slot_count": 32, "boxes": [[]] }"#);
        assert!(SaveDocument::from_slice(json.as_bytes()).is_ok());
    }

    #[test]
    fn rejects_dex_ids_beyond_max_species() {
        let json = with_body(r#""pokedex": { "enabled": true, "max_species": 151, "seen": [152] }"#);
        let err = SaveDocument::from_slice(json.as_bytes()).expect_err("id out of range");
        assert!(err.to_string().contains("seen species 152"));
    }

    #[test]
    fn rejects_unknown_format_version() {
        let json = MINIMAL.replace("\"format_version\": 1", "\"format_version\": 2");
        let err = SaveDocument::from_slice(json.as_bytes()).expect_err("bad version");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn dex_counts_ignore_duplicates() {
        let json = with_body(
            r#""pokedex": { "enabled": true, "max_species": 10, "seen": [3, 3, 1], "caught": [3] }"#,
        );
        let doc = SaveDocument::from_slice(json.as_bytes()).expect("doc parses");
        assert_eq!(doc.seen_count(), 2);
        assert_eq!(doc.caught_count(), 1);
        assert!(doc.is_seen(1));
        assert!(!doc.is_caught(1));
    }
}

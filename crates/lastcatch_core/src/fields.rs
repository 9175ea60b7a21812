//! Named numeric fields whose presence depends on where a record came from.
//!
//! A creature traded in from another trainer carries a different friendship
//! field than one hatched locally, and older saves only expose the legacy
//! trainer id fields. Callers resolve such values through an ordered list of
//! candidate names and a fallback instead of probing each shape by hand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reported for any numeric field that could not be resolved.
pub const UNKNOWN: i32 = -1;

pub const FRIENDSHIP_FIELDS: [&str; 3] = ["current_friendship", "ot_friendship", "ht_friendship"];
pub const TRAINER_ID_FIELDS: [&str; 2] = ["tid16", "tid"];
pub const SECRET_ID_FIELDS: [&str; 2] = ["sid16", "sid"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Arrays and objects. Kept so an unusual attribute never fails the save.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Integer view of the value, or `None` when it is null or does not fit.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(i32::from(*b)),
            Self::Int(v) => i32::try_from(*v).ok(),
            Self::Float(v) => {
                if !v.is_finite() {
                    return None;
                }
                let rounded = v.round_ties_even();
                if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
                    return None;
                }
                Some(rounded as i32)
            }
            Self::Text(s) => s.trim().parse::<i32>().ok(),
            Self::Other(_) => None,
        }
    }
}

pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&FieldValue>;
}

impl FieldSource for BTreeMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

/// Value of the first candidate that is present, non-null and fits in an
/// `i32`, else `fallback`.
pub fn resolve_int<S: FieldSource + ?Sized>(source: &S, candidates: &[&str], fallback: i32) -> i32 {
    candidates
        .iter()
        .find_map(|name| source.field(name).and_then(FieldValue::as_i32))
        .unwrap_or(fallback)
}

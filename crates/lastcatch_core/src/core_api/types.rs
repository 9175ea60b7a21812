use serde::{Deserialize, Serialize};

/// Summary of one save, built in a single scan and never modified after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
    pub trainer: TrainerSummary,
    pub pokedex: PokedexSummary,
    pub last: CreatureSummary,
    pub party: Vec<PartyMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerSummary {
    pub name: String,
    pub tid: i32,
    pub sid: i32,
    pub money: u32,
    pub play_time: String,
    pub game_version: String,
    pub generation: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PokedexSummary {
    pub enabled: bool,
    pub seen: u32,
    pub caught: u32,
    pub max_species: u16,
    pub seen_percent: f64,
    pub caught_percent: f64,
    pub seen_species: Vec<u16>,
    pub caught_species: Vec<u16>,
}

/// The most recently acquired creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatureSummary {
    pub species_id: u16,
    pub species: String,
    pub nickname: String,
    pub met_date: String,
    pub level: u8,
    pub ot: String,
    pub friendship: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartyMember {
    pub species_id: u16,
    pub species: String,
    pub nickname: String,
    pub met_date: Option<String>,
    pub level: u8,
    pub ot: String,
    pub encounter_type: i32,
    pub met_location: i32,
    pub egg_location: i32,
    pub ball: i32,
    pub is_egg: bool,
    pub friendship: i32,
}

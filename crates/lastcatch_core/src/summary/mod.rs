//! Single-pass aggregation of a [`SaveModel`] into a [`Report`].

pub mod latest;
pub mod pokedex;
pub mod scan;

use chrono::NaiveDate;

use crate::core_api::{CreatureSummary, PartyMember, Report, TrainerSummary};
use crate::fields::{FRIENDSHIP_FIELDS, SECRET_ID_FIELDS, TRAINER_ID_FIELDS, UNKNOWN, resolve_int};
use crate::save::{CreatureSlot, SaveModel};

pub use latest::LatestAcquisition;
pub use pokedex::{percent, summarize_pokedex};
pub use scan::{ScannedSlot, SlotLocation, scan_slots};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Scans every slot once and assembles the report.
///
/// Returns `None` when no occupied slot carries an acquisition date, in which
/// case there is no "last" creature to report.
pub fn summarize<M: SaveModel + ?Sized>(model: &M) -> Option<Report> {
    let mut party = Vec::new();
    let mut latest = LatestAcquisition::new();
    let mut occupied = 0usize;

    for scanned in scan_slots(model) {
        occupied += 1;
        if let SlotLocation::Party { .. } = scanned.location {
            party.push(party_member(scanned.slot));
        }
        if let Some(date) = scanned.slot.met_date {
            if latest.offer(date, scanned) {
                tracing::trace!(location = ?scanned.location, %date, "new latest acquisition");
            }
        }
    }

    let Some((date, winner)) = latest.into_best() else {
        tracing::debug!(occupied, "no occupied slot carries an acquisition date");
        return None;
    };
    tracing::debug!(occupied, location = ?winner.location, %date, "latest acquisition");

    Some(Report {
        trainer: summarize_trainer(model),
        pokedex: summarize_pokedex(model),
        last: creature_summary(winner.slot, date),
        party,
    })
}

pub fn summarize_trainer<M: SaveModel + ?Sized>(model: &M) -> TrainerSummary {
    TrainerSummary {
        name: model.trainer_name().to_string(),
        tid: resolve_int(model, &TRAINER_ID_FIELDS, UNKNOWN),
        sid: resolve_int(model, &SECRET_ID_FIELDS, UNKNOWN),
        money: model.money(),
        play_time: model.play_time().to_string(),
        game_version: model.version_label().to_string(),
        generation: model.generation(),
    }
}

pub fn friendship(slot: &CreatureSlot) -> i32 {
    resolve_int(slot, &FRIENDSHIP_FIELDS, UNKNOWN)
}

fn creature_summary(slot: &CreatureSlot, met_date: NaiveDate) -> CreatureSummary {
    CreatureSummary {
        species_id: slot.species,
        species: slot.species_label(),
        nickname: slot.nickname.clone(),
        met_date: format_date(met_date),
        level: slot.level,
        ot: slot.ot_name.clone(),
        friendship: friendship(slot),
    }
}

fn party_member(slot: &CreatureSlot) -> PartyMember {
    PartyMember {
        species_id: slot.species,
        species: slot.species_label(),
        nickname: slot.nickname.clone(),
        met_date: slot.met_date.map(format_date),
        level: slot.level,
        ot: slot.ot_name.clone(),
        encounter_type: slot.encounter_type,
        met_location: slot.met_location,
        egg_location: slot.egg_location,
        ball: slot.ball,
        is_egg: slot.is_egg,
        friendship: friendship(slot),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

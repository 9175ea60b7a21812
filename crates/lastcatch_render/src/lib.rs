use std::fmt::Write as _;

use lastcatch_core::core_api::{CreatureSummary, PartyMember, PokedexSummary, Report, TrainerSummary};
use lastcatch_core::fields::UNKNOWN;
use serde_json::{Map as JsonMap, Value as JsonValue};

const NAME_COL_WIDTH: usize = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// PascalCase keys as consumed by existing team viewers.
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    TrainerCard,
}

/// `None` renders as the empty object.
pub fn render_json(report: Option<&Report>, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(match report {
            Some(report) => canonical_json(report),
            None => JsonMap::new(),
        }),
    }
}

pub fn render_text(report: Option<&Report>, style: TextStyle) -> String {
    match style {
        TextStyle::TrainerCard => match report {
            Some(report) => render_trainer_card(report),
            None => "No creature with a recorded acquisition date.\n".to_string(),
        },
    }
}

fn canonical_json(report: &Report) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();
    out.insert("Trainer".to_string(), trainer_to_json(&report.trainer));
    out.insert("Pokedex".to_string(), pokedex_to_json(&report.pokedex));
    out.insert("Last".to_string(), last_to_json(&report.last));
    out.insert(
        "Party".to_string(),
        JsonValue::Array(report.party.iter().map(party_member_to_json).collect()),
    );
    out
}

fn trainer_to_json(t: &TrainerSummary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("Name".to_string(), JsonValue::String(t.name.clone()));
    m.insert("TID".to_string(), JsonValue::from(t.tid));
    m.insert("SID".to_string(), JsonValue::from(t.sid));
    m.insert("Money".to_string(), JsonValue::from(t.money));
    m.insert("PlayTime".to_string(), JsonValue::String(t.play_time.clone()));
    m.insert(
        "GameVersion".to_string(),
        JsonValue::String(t.game_version.clone()),
    );
    m.insert("Generation".to_string(), JsonValue::from(t.generation));
    JsonValue::Object(m)
}

fn pokedex_to_json(d: &PokedexSummary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("Enabled".to_string(), JsonValue::Bool(d.enabled));
    m.insert("Seen".to_string(), JsonValue::from(d.seen));
    m.insert("Caught".to_string(), JsonValue::from(d.caught));
    m.insert("MaxSpecies".to_string(), JsonValue::from(d.max_species));
    m.insert("SeenPercent".to_string(), JsonValue::from(d.seen_percent));
    m.insert("CaughtPercent".to_string(), JsonValue::from(d.caught_percent));
    m.insert("SeenSpecies".to_string(), species_list(&d.seen_species));
    m.insert("CaughtSpecies".to_string(), species_list(&d.caught_species));
    JsonValue::Object(m)
}

fn species_list(ids: &[u16]) -> JsonValue {
    JsonValue::Array(ids.iter().map(|&id| JsonValue::from(id)).collect())
}

fn last_to_json(c: &CreatureSummary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("SpeciesId".to_string(), JsonValue::from(c.species_id));
    m.insert("Species".to_string(), JsonValue::String(c.species.clone()));
    m.insert("Nickname".to_string(), JsonValue::String(c.nickname.clone()));
    m.insert("MetDate".to_string(), JsonValue::String(c.met_date.clone()));
    m.insert("Level".to_string(), JsonValue::from(c.level));
    m.insert("OT".to_string(), JsonValue::String(c.ot.clone()));
    m.insert("Friendship".to_string(), JsonValue::from(c.friendship));
    JsonValue::Object(m)
}

fn party_member_to_json(p: &PartyMember) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("SpeciesId".to_string(), JsonValue::from(p.species_id));
    m.insert("Species".to_string(), JsonValue::String(p.species.clone()));
    m.insert("Nickname".to_string(), JsonValue::String(p.nickname.clone()));
    m.insert(
        "MetDate".to_string(),
        match &p.met_date {
            Some(date) => JsonValue::String(date.clone()),
            None => JsonValue::Null,
        },
    );
    m.insert("Level".to_string(), JsonValue::from(p.level));
    m.insert("OT".to_string(), JsonValue::String(p.ot.clone()));
    m.insert("EncounterType".to_string(), JsonValue::from(p.encounter_type));
    m.insert("MetLocation".to_string(), JsonValue::from(p.met_location));
    m.insert("EggLocation".to_string(), JsonValue::from(p.egg_location));
    m.insert("Ball".to_string(), JsonValue::from(p.ball));
    m.insert("IsEgg".to_string(), JsonValue::Bool(p.is_egg));
    m.insert("Friendship".to_string(), JsonValue::from(p.friendship));
    JsonValue::Object(m)
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn render_trainer_card(report: &Report) -> String {
    let t = &report.trainer;
    let mut out = String::new();

    writeln!(
        &mut out,
        "  Trainer: {}  TID: {}  SID: {}",
        t.name,
        format_id(t.tid),
        format_id(t.sid)
    )
    .expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "  Game: {} (Gen {})  Money: ${}  Play time: {}",
        t.game_version,
        t.generation,
        format_number_with_commas(t.money),
        t.play_time
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    write_pokedex_section(&mut out, &report.pokedex);
    writeln!(&mut out).expect("writing to String cannot fail");
    write_party_section(&mut out, &report.party);
    writeln!(&mut out).expect("writing to String cannot fail");

    let last = &report.last;
    writeln!(out, " ::: Last Caught :::").expect("writing to String cannot fail");
    writeln!(
        out,
        "  {} Lv. {}, met {}, OT {}, friendship {}",
        display_name(&last.nickname, &last.species),
        last.level,
        last.met_date,
        last.ot,
        format_friendship(last.friendship)
    )
    .expect("writing to String cannot fail");

    out
}

fn write_pokedex_section(out: &mut String, dex: &PokedexSummary) {
    writeln!(out, " ::: Pokedex :::").expect("writing to String cannot fail");
    if !dex.enabled {
        writeln!(out, "  not obtained").expect("writing to String cannot fail");
        return;
    }
    writeln!(
        out,
        "  Seen:   {}/{} ({:.2}%)",
        dex.seen, dex.max_species, dex.seen_percent
    )
    .expect("writing to String cannot fail");
    writeln!(
        out,
        "  Caught: {}/{} ({:.2}%)",
        dex.caught, dex.max_species, dex.caught_percent
    )
    .expect("writing to String cannot fail");
}

fn write_party_section(out: &mut String, party: &[PartyMember]) {
    writeln!(out, " ::: Party :::").expect("writing to String cannot fail");
    if party.is_empty() {
        writeln!(out, "  none").expect("writing to String cannot fail");
        return;
    }

    for (index, member) in party.iter().enumerate() {
        let mut name = display_name(&member.nickname, &member.species);
        if member.is_egg {
            name.push_str(" [Egg]");
        }
        writeln!(
            out,
            "  {}. {:<w$}Lv. {:>3}  met {}  friendship {}",
            index + 1,
            fit_column(&name, NAME_COL_WIDTH),
            member.level,
            member.met_date.as_deref().unwrap_or("----------"),
            format_friendship(member.friendship),
            w = NAME_COL_WIDTH
        )
        .expect("writing to String cannot fail");
    }
}

fn display_name(nickname: &str, species: &str) -> String {
    if nickname.is_empty() || nickname == species {
        species.to_string()
    } else {
        format!("{nickname} ({species})")
    }
}

fn format_id(id: i32) -> String {
    if id == UNKNOWN {
        "unknown".to_string()
    } else {
        format!("{id:05}")
    }
}

fn format_friendship(value: i32) -> String {
    if value == UNKNOWN {
        "?".to_string()
    } else {
        value.to_string()
    }
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

fn format_number_with_commas(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

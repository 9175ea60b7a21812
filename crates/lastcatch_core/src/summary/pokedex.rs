use crate::core_api::PokedexSummary;
use crate::save::SaveModel;

/// Share of `max_species` covered by `count`, as a percentage rounded
/// half-to-even to two decimals. Zero when there is nothing to divide by.
pub fn percent(count: u32, max_species: u16) -> f64 {
    if max_species == 0 {
        return 0.0;
    }
    let raw = f64::from(count) * 100.0 / f64::from(max_species);
    (raw * 100.0).round_ties_even() / 100.0
}

pub fn summarize_pokedex<M: SaveModel + ?Sized>(model: &M) -> PokedexSummary {
    let enabled = model.has_pokedex();
    let max_species = model.max_species();
    let (seen, caught) = if enabled {
        (model.seen_count(), model.caught_count())
    } else {
        (0, 0)
    };

    let mut seen_species = Vec::new();
    let mut caught_species = Vec::new();
    if enabled {
        for species in 1..=max_species {
            if model.is_seen(species) {
                seen_species.push(species);
            }
            if model.is_caught(species) {
                caught_species.push(species);
            }
        }
    }

    PokedexSummary {
        enabled,
        seen,
        caught,
        max_species,
        seen_percent: percent(seen, max_species),
        caught_percent: percent(caught, max_species),
        seen_species,
        caught_species,
    }
}

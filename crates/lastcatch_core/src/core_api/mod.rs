mod engine;
mod error;
mod types;

pub use engine::{Engine, SaveFormat, Session};
pub use error::{CoreError, CoreErrorCode};
pub use types::{CreatureSummary, PartyMember, PokedexSummary, Report, TrainerSummary};

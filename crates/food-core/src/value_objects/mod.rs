//! Value objects - immutable types that represent domain concepts

mod actor;
mod coordinates;
mod field;
mod ids;
mod participant_set;

pub use actor::Actor;
pub use coordinates::Coordinates;
pub use field::{ParticipationField, UnknownField};
pub use ids::{IdParseError, PostId, UserId};
pub use participant_set::ParticipantSet;

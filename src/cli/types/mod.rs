//! Type-safe wrappers and enums for Puppy Bowl data.

pub mod ids;
pub mod status;

pub use ids::{PlayerId, TeamId};
pub use status::PlayerStatus;

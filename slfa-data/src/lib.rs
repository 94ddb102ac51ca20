mod builtin;
pub mod documents;
mod error;
pub mod fixtures;
pub mod news;
pub mod players;
pub mod roster;

pub use crate::error::{LookupError, RosterError};
pub use crate::roster::Roster;

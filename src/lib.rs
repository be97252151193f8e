//! Core transition logic for Game-of-Life-family cellular automata.
//!
//! A [`Cell`] holds a [`Vitality`] and a [`RuleSet`]. Given a neighbor
//! collection it computes its next vitality with the birth rule when dead and
//! the death rule when alive. Grids, topologies and rendering live elsewhere;
//! [`generation`] only offers double-buffered helpers over caller wiring.

pub mod cell;
pub mod enc;
pub mod engine;
pub mod error;
pub mod generation;
pub mod rule;
pub mod vitality;

pub use cell::Cell;
pub use enc::{BirthSurvival, RuleCodec, SurvivalBirth};
pub use engine::{Rule, RuleTable, conway_table, evaluate};
pub use error::RuleError;
pub use generation::Census;
pub use rule::{Rate, RuleSet};
pub use vitality::{Health, Living, Vitality};

//! Domain model for the contest client.
//!
//! Covers the pieces a strategy works with each turn:
//! - Static parameters (turn count, coins, unit type tables)
//! - The battlefield grid and its spawn geometry
//! - Immutable per-turn snapshots of active units
//! - The per-turn decision recorder

mod actor;
mod board;
mod config;
mod decisions;
mod position;
mod snapshot;

pub use actor::{Attacker, AttackerType, Attributes, Defender, DefenderType, TypeId, UnitId};
pub use board::Board;
pub use config::GameConfig;
pub use decisions::TurnDecisions;
pub use position::Position;
pub use snapshot::Snapshot;

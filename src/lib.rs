// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Rampart: a client for turn-based tower siege programming contests.
//!
//! The harness drives the client over a line-oriented integer protocol:
//! static game parameters and the battlefield grid arrive once, then every
//! turn a full state snapshot comes in and a full decision set goes out.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              Session (turn loop)          │
//! ├──────────────┬──────────────┬─────────────┤
//! │  Protocol    │  Game model  │  Strategy   │
//! │  (lexer +    │  (config,    │  (pluggable │
//! │   emitters)  │   board,     │   policy)   │
//! │              │   snapshots) │             │
//! └──────────────┴──────────────┴─────────────┘
//! ```
//!
//! The decision policy is deliberately replaceable: implement
//! [`Strategy`] and hand it to [`run_session`]. Everything else — parsing
//! order, defender id assignment, spawn geometry, per-turn decision
//! recording — is contract, not policy.

pub mod error;
pub mod game;
pub mod protocol;
pub mod session;
pub mod strategy;
pub mod transcript;

pub use error::{ProtocolError, ProtocolResult};

// Re-export key types at crate root for convenience
pub use game::{
    Attacker, AttackerType, Attributes, Board, Defender, DefenderType, GameConfig, Position,
    Snapshot, TurnDecisions, TypeId, UnitId,
};
pub use session::run_session;
pub use strategy::{Idle, RoundRobinSpawner, Strategy};
pub use transcript::Transcript;

//! Per-turn decision strategies.
//!
//! A strategy is the replaceable policy layer: the session hands it each
//! turn's snapshot and it returns the turn's decisions. Anything a strategy
//! wants to remember between turns lives in the strategy value itself — the
//! session owns the value and threads it across calls, so there is no
//! ambient cross-turn state anywhere in the client.

use crate::game::{Board, GameConfig, Snapshot, TurnDecisions};

/// A per-turn decision policy.
pub trait Strategy {
    /// Plan one turn from the given snapshot.
    fn plan(&mut self, config: &GameConfig, board: &Board, snapshot: &Snapshot) -> TurnDecisions;
}

/// The null policy: never spawns, never targets, never logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl Strategy for Idle {
    fn plan(&mut self, _config: &GameConfig, _board: &Board, _snapshot: &Snapshot) -> TurnDecisions {
        TurnDecisions::new()
    }
}

/// The bundled example policy: one spawn attempt per attacker type per
/// turn, walking a cursor around the board perimeter.
///
/// Illustrative only — nothing in the client depends on this particular
/// policy. Each turn it:
/// - spawns nothing while no defenders remain, conserving coins;
/// - otherwise, for each attacker type id in ascending order, attempts to
///   spawn at the cursor's perimeter position, skipping positions that are
///   invalid or already requested this turn, and advances the cursor
///   (mod perimeter length) whether or not the spawn was recorded;
/// - targets the first listed attacker at the first listed defender;
/// - logs every attempt and every recorded spawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinSpawner {
    cursor: usize,
}

impl RoundRobinSpawner {
    /// Create the spawner with its cursor at the start of the perimeter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for RoundRobinSpawner {
    fn plan(&mut self, config: &GameConfig, board: &Board, snapshot: &Snapshot) -> TurnDecisions {
        let mut decisions = TurnDecisions::new();

        // No defenders left: every coin spent now is wasted.
        if snapshot.defenders.is_empty() {
            return decisions;
        }

        let spawn_positions = board.spawn_positions();
        if spawn_positions.is_empty() {
            return decisions;
        }

        for type_id in config.attacker_type_ids() {
            let position = spawn_positions[self.cursor];
            if let Some(attacker_type) = config.attacker_type(type_id) {
                let hp = attacker_type.attributes.hp;
                let power = attacker_type.attributes.attack_power;
                decisions.log(&format!("try type {type_id} ({hp} hp, {power} ap) at {position}"));
            }

            if board.is_spawn_position(position) && !decisions.is_already_spawned_at(position) {
                decisions.spawn_attacker(type_id, position);
            }

            self.cursor = (self.cursor + 1) % spawn_positions.len();
        }

        if let (Some(attacker), Some(defender)) =
            (snapshot.attackers.first(), snapshot.defenders.first())
        {
            decisions.set_target(attacker.id, defender.id);
        }

        let spawned: Vec<String> = decisions
            .spawns()
            .iter()
            .map(|(type_id, position)| format!("spawned type {type_id} at {position}"))
            .collect();
        for line in &spawned {
            decisions.log(line);
        }

        decisions
    }
}

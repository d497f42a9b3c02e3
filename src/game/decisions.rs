//! Per-turn decision recorder.

use std::collections::{BTreeMap, HashSet};

use crate::game::{Position, TypeId, UnitId};

/// Scratchpad for one turn's decisions, filled by a strategy and consumed
/// by the emitter.
///
/// Every operation is a total function over in-memory state; nothing here
/// performs I/O or validates game-rule legality. Duplicate or illegal
/// spawns are forwarded as-is and penalized by the external simulator; the
/// recorder only offers [`TurnDecisions::is_already_spawned_at`] so a
/// strategy can self-police.
#[derive(Debug, Clone, Default)]
pub struct TurnDecisions {
    spawns: Vec<(TypeId, Position)>,
    requested_positions: HashSet<Position>,
    targets: BTreeMap<UnitId, UnitId>,
    log_buffer: String,
}

impl TurnDecisions {
    /// Create an empty recorder for a new turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an attacker spawn of `type_id` at `position`.
    ///
    /// Requests accumulate in call order, which is also the emission order.
    /// The position is remembered for the duplicate query but repeats are
    /// never blocked here.
    pub fn spawn_attacker(&mut self, type_id: TypeId, position: Position) {
        self.spawns.push((type_id, position));
        self.requested_positions.insert(position);
    }

    /// Whether a spawn was already requested at `position` this turn.
    #[must_use]
    pub fn is_already_spawned_at(&self, position: Position) -> bool {
        self.requested_positions.contains(&position)
    }

    /// Assign `defender_id` as the target of `attacker_id`.
    ///
    /// A later call for the same attacker overwrites the earlier one.
    pub fn set_target(&mut self, attacker_id: UnitId, defender_id: UnitId) {
        self.targets.insert(attacker_id, defender_id);
    }

    /// Append one line to the turn's log.
    pub fn log(&mut self, line: &str) {
        self.log_buffer.push_str(line);
        self.log_buffer.push('\n');
    }

    /// The accumulated log text.
    #[must_use]
    pub fn log_text(&self) -> &str {
        &self.log_buffer
    }

    /// Discard the accumulated log text. Spawn and target data are untouched.
    pub fn clear_log(&mut self) {
        self.log_buffer.clear();
    }

    /// Spawn requests in call order.
    #[must_use]
    pub fn spawns(&self) -> &[(TypeId, Position)] {
        &self.spawns
    }

    /// Target assignments, keyed by attacker id.
    ///
    /// Iteration (and thus emission) order is ascending attacker id; no
    /// downstream consumer requires a particular order, so the map trades
    /// insertion order for determinism.
    #[must_use]
    pub const fn targets(&self) -> &BTreeMap<UnitId, UnitId> {
        &self.targets
    }
}

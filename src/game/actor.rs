//! Unit types and per-turn unit snapshots.

use crate::game::Position;

/// Identifier for a unit type in the static tables.
///
/// Valid ids start at 1; id 0 is never used by the protocol.
pub type TypeId = u32;

/// Identifier for a unit on the field, assigned by the external simulator.
///
/// Ids are opaque and unique within one snapshot only; a given id may or
/// may not persist across turns.
pub type UnitId = u32;

/// Combat attributes shared by every unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    /// Starting hit points.
    pub hp: u32,
    /// Attack range in grid cells.
    pub range: u32,
    /// Damage dealt per attack.
    pub attack_power: u32,
    /// Spawn cost in coins.
    pub price: u32,
}

/// An attacker unit type: shared attributes plus movement speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackerType {
    /// Shared combat attributes.
    pub attributes: Attributes,
    /// Cells moved per turn.
    pub speed: u32,
}

/// A defender unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefenderType {
    /// Shared combat attributes.
    pub attributes: Attributes,
}

/// An attacker on the field, as reported in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attacker {
    /// Simulator-assigned unit id.
    pub id: UnitId,
    /// Current hit points.
    pub hp: u32,
    /// Type id into the attacker table.
    pub type_id: TypeId,
    /// Current position.
    pub position: Position,
}

/// A defender on the field, as reported in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defender {
    /// Simulator-assigned unit id.
    pub id: UnitId,
    /// Current hit points.
    pub hp: u32,
    /// Type id into the defender table.
    pub type_id: TypeId,
    /// Current position.
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacker_is_value_snapshot() {
        let a = Attacker {
            id: 7,
            hp: 10,
            type_id: 1,
            position: Position::new(0, 3),
        };
        let copy = a;
        assert_eq!(a, copy);
    }
}

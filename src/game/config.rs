//! Static game parameters.

use std::io::BufRead;

use crate::error::ProtocolResult;
use crate::game::{AttackerType, Attributes, DefenderType, TypeId};
use crate::protocol::TokenReader;

/// Once-per-process game parameters read ahead of the first turn.
///
/// The tables are immutable after construction and are passed by reference
/// wherever they are needed; constructing the value consumes the protocol
/// prefix, so it can only happen once per stream.
#[derive(Debug, Clone)]
pub struct GameConfig {
    turn_count: u32,
    max_coins: u32,
    attacker_types: Vec<AttackerType>,
    defender_types: Vec<DefenderType>,
}

impl GameConfig {
    /// Read the static parameter block from the protocol stream.
    ///
    /// Consumes, in fixed order: `turn_count max_coins`, the attacker type
    /// count and one `hp range attack_power speed price` row per type, then
    /// the defender type count and one `hp range attack_power ignored price`
    /// row per type. Type rows are keyed 1..=N in read order.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is short or contains a non-integer
    /// token. The protocol is trusted, so the failure is fatal to the caller.
    pub fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> ProtocolResult<Self> {
        let turn_count = tokens.next_u32()?;
        let max_coins = tokens.next_u32()?;

        let attacker_type_count = tokens.next_usize()?;
        let mut attacker_types = Vec::with_capacity(attacker_type_count);
        for _ in 0..attacker_type_count {
            let hp = tokens.next_u32()?;
            let range = tokens.next_u32()?;
            let attack_power = tokens.next_u32()?;
            let speed = tokens.next_u32()?;
            let price = tokens.next_u32()?;
            attacker_types.push(AttackerType {
                attributes: Attributes {
                    hp,
                    range,
                    attack_power,
                    price,
                },
                speed,
            });
        }

        let defender_type_count = tokens.next_usize()?;
        let mut defender_types = Vec::with_capacity(defender_type_count);
        for _ in 0..defender_type_count {
            let hp = tokens.next_u32()?;
            let range = tokens.next_u32()?;
            let attack_power = tokens.next_u32()?;
            let _ignored = tokens.next_u32()?;
            let price = tokens.next_u32()?;
            defender_types.push(DefenderType {
                attributes: Attributes {
                    hp,
                    range,
                    attack_power,
                    price,
                },
            });
        }

        Ok(Self {
            turn_count,
            max_coins,
            attacker_types,
            defender_types,
        })
    }

    /// Number of turns after the initial turn 0.
    #[must_use]
    pub const fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Coin balance at the start of the match.
    #[must_use]
    pub const fn max_coins(&self) -> u32 {
        self.max_coins
    }

    /// Look up an attacker type. Valid ids are 1..=N; id 0 is never used.
    #[must_use]
    pub fn attacker_type(&self, id: TypeId) -> Option<AttackerType> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.attacker_types.get(index).copied()
    }

    /// Look up a defender type. Valid ids are 1..=N; id 0 is never used.
    #[must_use]
    pub fn defender_type(&self, id: TypeId) -> Option<DefenderType> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.defender_types.get(index).copied()
    }

    /// All valid attacker type ids, in ascending order.
    pub fn attacker_type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        (1u32..).zip(self.attacker_types.iter()).map(|(id, _)| id)
    }
}

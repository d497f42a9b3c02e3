//! Immutable per-turn view of the battlefield.

use std::io::BufRead;

use crate::error::ProtocolResult;
use crate::game::{Attacker, Defender, Position};
use crate::protocol::TokenReader;

/// The full battlefield state for one turn.
///
/// A snapshot fully replaces the previous turn's view; nothing is diffed or
/// carried over. It is constructed once per turn and never mutated.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Active attackers, in protocol order.
    pub attackers: Vec<Attacker>,
    /// Active defenders, in protocol order.
    pub defenders: Vec<Defender>,
    /// Coins remaining for the controlled side.
    pub coins_left: u32,
    /// Turn index, starting at 0.
    pub turn_no: u32,
}

impl Snapshot {
    /// The synthetic turn-0 snapshot: no attackers yet, the board-derived
    /// defenders, and the full starting coin balance.
    #[must_use]
    pub const fn initial(defenders: Vec<Defender>, max_coins: u32) -> Self {
        Self {
            attackers: Vec::new(),
            defenders,
            coins_left: max_coins,
            turn_no: 0,
        }
    }

    /// Read the next turn's snapshot from the protocol stream.
    ///
    /// Consumes the attacker count and one `id x y type_id hp` row per
    /// attacker, the defender count and one row per defender in the same
    /// shape, then the remaining-coins line.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is short or contains a non-integer
    /// token. The protocol is trusted, so the failure is fatal to the caller.
    pub fn read<R: BufRead>(tokens: &mut TokenReader<R>, turn_no: u32) -> ProtocolResult<Self> {
        let attacker_count = tokens.next_usize()?;
        let mut attackers = Vec::with_capacity(attacker_count);
        for _ in 0..attacker_count {
            let id = tokens.next_u32()?;
            let x = tokens.next_i32()?;
            let y = tokens.next_i32()?;
            let type_id = tokens.next_u32()?;
            let hp = tokens.next_u32()?;
            attackers.push(Attacker {
                id,
                hp,
                type_id,
                position: Position::new(x, y),
            });
        }

        let defender_count = tokens.next_usize()?;
        let mut defenders = Vec::with_capacity(defender_count);
        for _ in 0..defender_count {
            let id = tokens.next_u32()?;
            let x = tokens.next_i32()?;
            let y = tokens.next_i32()?;
            let type_id = tokens.next_u32()?;
            let hp = tokens.next_u32()?;
            defenders.push(Defender {
                id,
                hp,
                type_id,
                position: Position::new(x, y),
            });
        }

        let coins_left = tokens.next_u32()?;

        Ok(Self {
            attackers,
            defenders,
            coins_left,
            turn_no,
        })
    }
}

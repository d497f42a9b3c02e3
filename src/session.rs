//! The turn loop.
//!
//! One synchronous exchange per turn: block on the next snapshot, hand it
//! to the strategy, emit the decisions, repeat. There is no concurrency, no
//! timeout, and no recovery — a read or parse failure ends the process, as
//! the stream comes from a trusted harness.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::ProtocolResult;
use crate::game::{Board, GameConfig, Snapshot};
use crate::protocol::{TokenReader, write_decisions, write_turn_log};
use crate::strategy::Strategy;
use crate::transcript::Transcript;

/// Run a full match over the given streams.
///
/// Reads the static parameter block and the grid, synthesizes the turn-0
/// snapshot from board-derived defenders and the starting coin balance,
/// then alternates snapshot reads and decision emissions until
/// `turn_count + 1` turns have been emitted. The strategy value carries any
/// cross-turn state; it is borrowed for the whole match.
///
/// Returns the match transcript for optional post-game inspection.
///
/// # Errors
///
/// Returns an error on any malformed or truncated input and on any failed
/// write. All errors are fatal; no partial-turn recovery is attempted.
pub fn run_session<R, W, D, S>(
    input: R,
    mut output: W,
    mut diag: D,
    strategy: &mut S,
) -> ProtocolResult<Transcript>
where
    R: BufRead,
    W: Write,
    D: Write,
    S: Strategy + ?Sized,
{
    let mut tokens = TokenReader::new(input);

    let config = GameConfig::read(&mut tokens)?;
    let board = Board::read(&mut tokens)?;
    info!(
        turns = config.turn_count(),
        coins = config.max_coins(),
        rows = board.rows(),
        cols = board.cols(),
        "match initialized"
    );

    let mut transcript = Transcript::new();
    let mut snapshot = Snapshot::initial(board.spawn_defenders(&config), config.max_coins());

    loop {
        let decisions = strategy.plan(&config, &board, &snapshot);
        debug!(
            turn = snapshot.turn_no,
            spawns = decisions.spawns().len(),
            targets = decisions.targets().len(),
            "turn planned"
        );

        write_decisions(&mut output, &decisions)?;
        write_turn_log(&mut diag, snapshot.turn_no, decisions.log_text())?;
        transcript.record_turn(&snapshot, &decisions);

        if snapshot.turn_no == config.turn_count() {
            break;
        }
        snapshot = Snapshot::read(&mut tokens, snapshot.turn_no + 1)?;
    }

    info!(turns_emitted = transcript.turns.len(), "match complete");
    Ok(transcript)
}

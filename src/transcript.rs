//! Match transcript recording.
//!
//! A transcript is a pure observer of the session: for each emitted turn it
//! keeps a summary of the parsed snapshot and the decisions that went out.
//! Saved as JSON for post-game debugging; the harness never sees it.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{Snapshot, TurnDecisions};

/// One recorded spawn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRecord {
    /// Attacker type id.
    pub type_id: u32,
    /// Spawn column.
    pub x: i32,
    /// Spawn row.
    pub y: i32,
}

/// One recorded target assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    /// Attacker being directed.
    pub attacker_id: u32,
    /// Defender it should act against.
    pub defender_id: u32,
}

/// Summary of one emitted turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn index.
    pub turn_no: u32,
    /// Coins remaining when the turn was planned.
    pub coins_left: u32,
    /// Active attackers in the snapshot.
    pub attacker_count: usize,
    /// Active defenders in the snapshot.
    pub defender_count: usize,
    /// Emitted spawn requests, in emission order.
    pub spawns: Vec<SpawnRecord>,
    /// Emitted target assignments, in emission order.
    pub targets: Vec<TargetRecord>,
    /// The turn's log text.
    pub log: String,
}

/// Full record of a match, one entry per emitted turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Recorded turns, in emission order.
    pub turns: Vec<TurnRecord>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one emitted turn.
    pub fn record_turn(&mut self, snapshot: &Snapshot, decisions: &TurnDecisions) {
        let spawns = decisions
            .spawns()
            .iter()
            .map(|&(type_id, position)| SpawnRecord {
                type_id,
                x: position.x,
                y: position.y,
            })
            .collect();

        let targets = decisions
            .targets()
            .iter()
            .map(|(&attacker_id, &defender_id)| TargetRecord {
                attacker_id,
                defender_id,
            })
            .collect();

        self.turns.push(TurnRecord {
            turn_no: snapshot.turn_no,
            coins_left: snapshot.coins_left,
            attacker_count: snapshot.attackers.len(),
            defender_count: snapshot.defenders.len(),
            spawns,
            targets,
            log: decisions.log_text().to_string(),
        });
    }

    /// Save the transcript as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load a transcript saved by [`Transcript::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// transcript.
    pub fn load(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn sample_transcript() -> Transcript {
        let mut decisions = TurnDecisions::new();
        decisions.spawn_attacker(1, Position::new(0, 2));
        decisions.set_target(5, 0);
        decisions.log("one line");

        let snapshot = Snapshot::initial(Vec::new(), 300);

        let mut transcript = Transcript::new();
        transcript.record_turn(&snapshot, &decisions);
        transcript
    }

    #[test]
    fn test_record_turn_summary() {
        let transcript = sample_transcript();
        assert_eq!(transcript.turns.len(), 1);

        let turn = &transcript.turns[0];
        assert_eq!(turn.turn_no, 0);
        assert_eq!(turn.coins_left, 300);
        assert_eq!(turn.attacker_count, 0);
        assert_eq!(
            turn.spawns,
            vec![SpawnRecord {
                type_id: 1,
                x: 0,
                y: 2
            }]
        );
        assert_eq!(
            turn.targets,
            vec![TargetRecord {
                attacker_id: 5,
                defender_id: 0
            }]
        );
        assert_eq!(turn.log, "one line\n");
    }

    #[test]
    fn test_save_load_round_trip() {
        let transcript = sample_transcript();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.json");

        transcript.save(&path).unwrap();
        let loaded = Transcript::load(&path).unwrap();
        assert_eq!(loaded, transcript);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Transcript::load(&path).is_err());
    }
}

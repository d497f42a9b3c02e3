//! Line-oriented integer protocol over the harness streams.
//!
//! Input is whitespace-separated integers; line boundaries carry no meaning
//! beyond separating tokens. The stream is trusted, so malformed input is
//! fatal and surfaces as a [`ProtocolError`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{ProtocolError, ProtocolResult};
use crate::game::TurnDecisions;

/// Pull-based integer lexer over a buffered reader.
///
/// Tokens are maximal runs of non-whitespace bytes; the reader refills its
/// line buffer as needed and blocks until the harness supplies more input.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    line: String,
    cursor: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Create a lexer over a buffered reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Locate the next token, refilling the line buffer as needed.
    ///
    /// Returns the token's `(start, len)` within the current line buffer.
    fn token_span(&mut self) -> ProtocolResult<(usize, usize)> {
        loop {
            let rest = &self.line[self.cursor..];
            if let Some(offset) = rest.find(|c: char| !c.is_whitespace()) {
                let start = self.cursor + offset;
                let tail = &self.line[start..];
                let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                self.cursor = start + len;
                return Ok((start, len));
            }

            self.line.clear();
            self.cursor = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(ProtocolError::UnexpectedEof);
            }
        }
    }

    fn parse_next<T>(&mut self) -> ProtocolResult<T>
    where
        T: FromStr,
    {
        let (start, len) = self.token_span()?;
        let token = &self.line[start..start + len];
        token.parse().map_err(|_| ProtocolError::InvalidToken {
            token: token.to_string(),
        })
    }

    /// Read the next token as a `u32`.
    ///
    /// # Errors
    ///
    /// Returns an error on end of input, a non-integer token, or a failed read.
    pub fn next_u32(&mut self) -> ProtocolResult<u32> {
        self.parse_next()
    }

    /// Read the next token as an `i32`.
    ///
    /// # Errors
    ///
    /// Returns an error on end of input, a non-integer token, or a failed read.
    pub fn next_i32(&mut self) -> ProtocolResult<i32> {
        self.parse_next()
    }

    /// Read the next token as a `usize` (element counts).
    ///
    /// # Errors
    ///
    /// Returns an error on end of input, a non-integer token, or a failed read.
    pub fn next_usize(&mut self) -> ProtocolResult<usize> {
        self.parse_next()
    }
}

/// Emit one turn's decisions on the primary channel.
///
/// Format: spawn count, one `type_id x y` line per request in call order,
/// target count, one `attacker_id defender_id` line per assignment in
/// ascending attacker-id order. Flushes, since the harness blocks on the
/// complete turn output.
///
/// # Errors
///
/// Returns an error if writing to the channel fails.
pub fn write_decisions<W: Write>(writer: &mut W, decisions: &TurnDecisions) -> std::io::Result<()> {
    let spawns = decisions.spawns();
    writeln!(writer, "{}", spawns.len())?;
    for (type_id, position) in spawns {
        let (x, y) = (position.x, position.y);
        writeln!(writer, "{type_id} {x} {y}")?;
    }

    let targets = decisions.targets();
    writeln!(writer, "{}", targets.len())?;
    for (attacker_id, defender_id) in targets {
        writeln!(writer, "{attacker_id} {defender_id}")?;
    }

    writer.flush()
}

/// Emit one turn's log block on the diagnostic channel.
///
/// Nothing is written when the log is empty. Otherwise the block is framed
/// as `TURN <turn_no>` ... `ENDLOG` so the harness can attribute lines to
/// the turn they were produced in.
///
/// # Errors
///
/// Returns an error if writing to the channel fails.
pub fn write_turn_log<W: Write>(writer: &mut W, turn_no: u32, log: &str) -> std::io::Result<()> {
    if log.is_empty() {
        return Ok(());
    }
    write!(writer, "TURN {turn_no}\n{log}ENDLOG\n")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_tokens_within_one_line() {
        let mut tokens = TokenReader::new("3 14 15\n".as_bytes());
        assert_eq!(tokens.next_u32().unwrap(), 3);
        assert_eq!(tokens.next_u32().unwrap(), 14);
        assert_eq!(tokens.next_u32().unwrap(), 15);
    }

    #[test]
    fn test_tokens_across_lines() {
        let mut tokens = TokenReader::new("1\n  2\n\n3 4\n".as_bytes());
        for expected in 1..=4 {
            assert_eq!(tokens.next_u32().unwrap(), expected);
        }
    }

    #[test]
    fn test_negative_token() {
        let mut tokens = TokenReader::new("-7\n".as_bytes());
        assert_eq!(tokens.next_i32().unwrap(), -7);
    }

    #[test]
    fn test_eof_is_fatal() {
        let mut tokens = TokenReader::new("5\n".as_bytes());
        assert_eq!(tokens.next_u32().unwrap(), 5);
        assert!(matches!(
            tokens.next_u32(),
            Err(ProtocolError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_non_integer_token() {
        let mut tokens = TokenReader::new("abc\n".as_bytes());
        let err = tokens.next_u32().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidToken { token } if token == "abc"));
    }

    #[test]
    fn test_no_trailing_newline() {
        let mut tokens = TokenReader::new("42".as_bytes());
        assert_eq!(tokens.next_u32().unwrap(), 42);
    }

    #[test]
    fn test_write_empty_decisions() {
        let mut out = Vec::new();
        write_decisions(&mut out, &TurnDecisions::new()).unwrap();
        assert_eq!(out, b"0\n0\n");
    }

    #[test]
    fn test_write_decisions_orders() {
        let mut decisions = TurnDecisions::new();
        decisions.spawn_attacker(2, Position::new(0, 3));
        decisions.spawn_attacker(1, Position::new(5, 0));
        decisions.set_target(9, 1);
        decisions.set_target(4, 2);

        let mut out = Vec::new();
        write_decisions(&mut out, &decisions).unwrap();

        // Spawns in call order; targets in ascending attacker-id order.
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2\n2 0 3\n1 5 0\n2\n4 2\n9 1\n"
        );
    }

    #[test]
    fn test_write_turn_log_empty_is_silent() {
        let mut diag = Vec::new();
        write_turn_log(&mut diag, 3, "").unwrap();
        assert!(diag.is_empty());
    }

    #[test]
    fn test_write_turn_log_framing() {
        let mut diag = Vec::new();
        write_turn_log(&mut diag, 12, "first\nsecond\n").unwrap();
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "TURN 12\nfirst\nsecond\nENDLOG\n"
        );
    }
}

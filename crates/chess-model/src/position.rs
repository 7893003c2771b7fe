//! Board coordinate representation.
//!
//! Coordinates are 1-indexed: rank 1 is White's back rank, rank 8 is
//! Black's, file 1 is the a-file. Construction is validated, so a
//! `Position` held anywhere in the engine is always on the board.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error produced when constructing a position outside the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("position out of bounds: rank {rank}, file {file} (both must be 1-8)")]
    OutOfBounds { rank: u8, file: u8 },
}

/// A validated (rank, file) coordinate, each in 1..=8.
///
/// Equality and hashing are structural. Off-board coordinates are
/// unrepresentable; movement helpers return `None` instead of wrapping
/// or clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    rank: u8,
    file: u8,
}

impl Position {
    /// Creates a position, failing if either coordinate is outside 1..=8.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Result<Self, PositionError> {
        if rank >= 1 && rank <= 8 && file >= 1 && file <= 8 {
            Ok(Position { rank, file })
        } else {
            Err(PositionError::OutOfBounds { rank, file })
        }
    }

    /// Returns the rank (1-8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the file (1-8).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the position shifted by (rank, file) deltas, or `None` if
    /// the result would leave the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (1..=8).contains(&rank) && (1..=8).contains(&file) {
            Some(Position {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 squares, rank 1 to 8, file 1 to 8 within each rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Position { rank, file }))
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match bytes[0].to_ascii_lowercase() {
            f @ b'a'..=b'h' => f - b'a' + 1,
            _ => return None,
        };
        let rank = match bytes[1] {
            r @ b'1'..=b'8' => r - b'0',
            _ => return None,
        };
        Some(Position { rank, file })
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!(
            "{}{}",
            (b'a' + self.file - 1) as char,
            (b'0' + self.rank) as char
        )
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        Position::new(rank, file)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.rank, pos.file)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_out_of_bounds() {
        assert!(Position::new(0, 4).is_err());
        assert!(Position::new(4, 0).is_err());
        assert!(Position::new(9, 4).is_err());
        assert!(Position::new(4, 9).is_err());
        assert_eq!(
            Position::new(0, 9),
            Err(PositionError::OutOfBounds { rank: 0, file: 9 })
        );
    }

    #[test]
    fn offset_excludes_off_board() {
        let a1 = Position::new(1, 1).unwrap();
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(1, 1), Some(Position::new(2, 2).unwrap()));

        let h8 = Position::new(8, 8).unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
    }

    #[test]
    fn all_covers_the_board_once() {
        let squares: Vec<Position> = Position::all().collect();
        assert_eq!(squares.len(), 64);
        let unique: std::collections::HashSet<Position> = squares.into_iter().collect();
        assert_eq!(unique.len(), 64);
    }

    #[test]
    fn algebraic_round_trip() {
        assert_eq!(
            Position::from_algebraic("a1"),
            Some(Position::new(1, 1).unwrap())
        );
        assert_eq!(
            Position::from_algebraic("e4"),
            Some(Position::new(4, 5).unwrap())
        );
        assert_eq!(
            Position::from_algebraic("h8"),
            Some(Position::new(8, 8).unwrap())
        );
        assert_eq!(Position::from_algebraic("i1"), None);
        assert_eq!(Position::from_algebraic("a9"), None);
        assert_eq!(Position::from_algebraic(""), None);

        assert_eq!(Position::new(4, 5).unwrap().to_algebraic(), "e4");
        assert_eq!(Position::new(8, 8).unwrap().to_algebraic(), "h8");
    }

    #[test]
    fn serde_rejects_invalid_coordinates() {
        let ok: Position = serde_json::from_str("[3,7]").unwrap();
        assert_eq!(ok, Position::new(3, 7).unwrap());
        assert!(serde_json::from_str::<Position>("[9,1]").is_err());
        assert!(serde_json::from_str::<Position>("[1,0]").is_err());
    }

    proptest! {
        #[test]
        fn construction_succeeds_exactly_on_the_board(rank in 0u8..=20, file in 0u8..=20) {
            let on_board = (1..=8).contains(&rank) && (1..=8).contains(&file);
            prop_assert_eq!(Position::new(rank, file).is_ok(), on_board);
        }

        #[test]
        fn serde_round_trip(rank in 1u8..=8, file in 1u8..=8) {
            let pos = Position::new(rank, file).unwrap();
            let json = serde_json::to_string(&pos).unwrap();
            let back: Position = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(pos, back);
        }
    }
}

//! Move representation.

use crate::{PieceType, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chess move: start square, end square, and an optional promotion type.
///
/// The promotion type is set only on pawn moves that end on the opposing
/// back rank; for every other move it is `None`. Two moves between the
/// same squares with different promotion choices are distinct moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Creates a non-promoting move.
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a promoting move.
    #[inline]
    pub const fn promoting(from: Position, to: Position, kind: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Parses a move from UCI notation.
    pub fn from_uci(s: &str) -> Option<Self> {
        if s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Position::from_algebraic(&s[0..2])?;
        let to = Position::from_algebraic(&s[2..4])?;
        let promotion = match s.chars().nth(4) {
            Some(c) => match PieceType::from_char(c) {
                Some(kind) if PieceType::PROMOTIONS.contains(&kind) => Some(kind),
                _ => return None,
            },
            None => None,
        };
        Some(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn move_uci() {
        let m = Move::new(pos("e2"), pos("e4"));
        assert_eq!(m.to_uci(), "e2e4");

        let promo = Move::promoting(pos("e7"), pos("e8"), PieceType::Queen);
        assert_eq!(promo.to_uci(), "e7e8q");
    }

    #[test]
    fn move_from_uci() {
        let m = Move::from_uci("e2e4").unwrap();
        assert_eq!(m.from, pos("e2"));
        assert_eq!(m.to, pos("e4"));
        assert_eq!(m.promotion, None);

        let promo = Move::from_uci("a7a8n").unwrap();
        assert_eq!(promo.promotion, Some(PieceType::Knight));

        assert!(Move::from_uci("invalid").is_none());
        assert!(Move::from_uci("e2e9").is_none());
        // A pawn cannot promote to a king or stay a pawn.
        assert!(Move::from_uci("e7e8k").is_none());
        assert!(Move::from_uci("e7e8p").is_none());
    }

    #[test]
    fn promotion_choices_are_distinct_moves() {
        let queen = Move::promoting(pos("a7"), pos("a8"), PieceType::Queen);
        let rook = Move::promoting(pos("a7"), pos("a8"), PieceType::Rook);
        assert_ne!(queen, rook);
        assert_ne!(queen, Move::new(pos("a7"), pos("a8")));
    }
}

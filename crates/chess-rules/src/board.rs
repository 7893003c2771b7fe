//! Board state representation.

use chess_model::{Color, Piece, PieceType, Position};
use serde::{Deserialize, Serialize};

/// The back-rank piece order, a-file to h-file.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8×8 mailbox board: one optional piece per square.
///
/// The board is a plain value container. It accepts any placement without
/// legality checking; legality is the [`Game`](crate::Game) layer's job.
/// `Clone` produces a fully independent copy, and equality and hashing
/// are structural, so cloned boards used for move simulation never alias
/// or compare by identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// Creates a board with the standard 32-piece opening setup.
    pub fn starting() -> Self {
        let mut board = Board::new();
        board.reset_to_start();
        board
    }

    /// Returns the piece at the given position, if any.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[(pos.rank() - 1) as usize][(pos.file() - 1) as usize]
    }

    /// Places a piece (or empties the square) at the given position,
    /// unconditionally overwriting whatever was there.
    #[inline]
    pub fn place(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[(pos.rank() - 1) as usize][(pos.file() - 1) as usize] = piece;
    }

    /// Clears every square, then places the standard starting arrangement:
    /// White on ranks 1-2, Black on ranks 7-8, pawns in front of the
    /// rook-knight-bishop-queen-king back rank.
    pub fn reset_to_start(&mut self) {
        self.squares = [[None; 8]; 8];
        for file in 0..8 {
            self.squares[0][file] = Some(Piece::new(Color::White, BACK_RANK[file]));
            self.squares[1][file] = Some(Piece::new(Color::White, PieceType::Pawn));
            self.squares[6][file] = Some(Piece::new(Color::Black, PieceType::Pawn));
            self.squares[7][file] = Some(Piece::new(Color::Black, BACK_RANK[file]));
        }
    }

    /// Iterates over every occupied square as a (position, piece) pair.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Returns the position of the given color's king, or `None` if that
    /// king is absent (test boards may omit kings).
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceType::King)
            .map(|(pos, _)| pos)
    }
}

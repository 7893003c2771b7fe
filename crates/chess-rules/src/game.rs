//! Turn handling, legality filtering, and terminal-state queries.

use crate::movegen::{king_in_check, pseudo_legal_moves};
use crate::Board;
use chess_model::{Color, Move, Piece, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for rejected moves. Rejection never mutates the game.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPieceAtStart(Position),
    #[error("it is not {0}'s turn")]
    WrongTurn(Color),
    #[error("move {0} is not legal for this piece")]
    IllegalMove(Move),
}

/// A chess game: one board plus the color to move.
///
/// The game starts from the standard position with White to move and is
/// mutated only through [`make_move`](Game::make_move). Checkmate and
/// stalemate are computed on demand, never cached, and the engine never
/// refuses further moves after checkmate; stopping play is the caller's
/// policy. The engine performs no locking, so callers that share one
/// game across threads must serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::starting(),
            turn: Color::White,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board. Used by the persistence layer when restoring
    /// a serialized game state.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Returns the color whose turn it is.
    pub fn team_turn(&self) -> Color {
        self.turn
    }

    /// Sets the color whose turn it is.
    pub fn set_team_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Returns the legal moves for the piece at `from`, or `None` if the
    /// square is empty.
    ///
    /// Each pseudo-legal candidate is simulated on a cloned board and
    /// kept only if the moving side's own king is safe afterwards. The
    /// filter is deliberately independent of whose turn it is: it answers
    /// "would this piece's own king be safe," which also serves
    /// exploratory queries about the side not on move.
    pub fn valid_moves(&self, from: Position) -> Option<Vec<Move>> {
        let piece = self.board.piece_at(from)?;

        let legal = pseudo_legal_moves(&self.board, from)
            .into_iter()
            .filter(|&m| {
                let mut probe = self.board.clone();
                apply_move(&mut probe, m);
                !king_in_check(&probe, piece.color)
            })
            .collect();
        Some(legal)
    }

    /// Applies a move for the side to move.
    ///
    /// Fails without side effects if the start square is empty, the piece
    /// belongs to the side not on move, or the move is not in
    /// [`valid_moves`](Game::valid_moves) for the start square. On
    /// success the board is updated (including promotion substitution)
    /// and the turn flips.
    pub fn make_move(&mut self, m: Move) -> Result<(), MoveError> {
        let piece = self
            .board
            .piece_at(m.from)
            .ok_or(MoveError::NoPieceAtStart(m.from))?;

        if piece.color != self.turn {
            return Err(MoveError::WrongTurn(piece.color));
        }

        let legal = self.valid_moves(m.from).unwrap_or_default();
        if !legal.contains(&m) {
            return Err(MoveError::IllegalMove(m));
        }

        apply_move(&mut self.board, m);
        self.turn = self.turn.opposite();
        Ok(())
    }

    /// Returns true if the given color's king is attacked. A board
    /// without that king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        king_in_check(&self.board, color)
    }

    /// Returns true if the given color is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Returns true if the given color is not in check and has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    fn has_any_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .any(|(pos, _)| {
                self.valid_moves(pos)
                    .is_some_and(|moves| !moves.is_empty())
            })
    }
}

/// Moves the piece from start to end on `board`, overwriting any captured
/// piece and substituting the promotion piece when the move carries one.
/// Shared by the committed path and the check-simulation path; assumes
/// the start square is occupied.
fn apply_move(board: &mut Board, m: Move) {
    let Some(piece) = board.piece_at(m.from) else {
        return;
    };
    let landed = match m.promotion {
        Some(kind) => Piece::new(piece.color, kind),
        None => piece,
    };
    board.place(m.to, Some(landed));
    board.place(m.from, None);
}

//! Pseudo-legal move generation.
//!
//! Moves produced here obey piece geometry and occupancy rules only.
//! Filtering out moves that leave the mover's own king in check is the
//! [`Game`](crate::Game) layer's responsibility.

use crate::Board;
use chess_model::{Color, Move, Piece, PieceType, Position};

/// (rank, file) deltas for orthogonal sliding.
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// (rank, file) deltas for diagonal sliding.
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Queen and king share the eight unit directions.
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Generates all pseudo-legal moves for the piece at `from`.
///
/// Returns an empty list if the square is unoccupied. Destinations off
/// the board are never generated; promotion moves are expanded into one
/// move per promotion choice.
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceType::Pawn => pawn_moves(board, from, piece, &mut moves),
        PieceType::Knight => step_moves(board, from, piece, &KNIGHT_JUMPS, &mut moves),
        PieceType::King => step_moves(board, from, piece, &QUEEN_DIRS, &mut moves),
        PieceType::Bishop => sliding_moves(board, from, piece, &BISHOP_DIRS, &mut moves),
        PieceType::Rook => sliding_moves(board, from, piece, &ROOK_DIRS, &mut moves),
        PieceType::Queen => sliding_moves(board, from, piece, &QUEEN_DIRS, &mut moves),
    }
    moves
}

/// Returns true if the king of the given color is attacked by any
/// opposing piece's pseudo-legal move. A board with no such king is
/// never in check.
pub fn king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_pos) = board.find_king(color) else {
        return false;
    };

    board
        .pieces()
        .filter(|(_, piece)| piece.color != color)
        .any(|(pos, _)| {
            pseudo_legal_moves(board, pos)
                .iter()
                .any(|m| m.to == king_pos)
        })
}

fn pawn_moves(board: &Board, from: Position, piece: Piece, moves: &mut Vec<Move>) {
    let dir = piece.color.pawn_direction();

    // Single push, and double push only when the single push square is empty.
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            push_pawn_move(from, one, moves);
            if from.rank() == piece.color.pawn_start_rank() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for d_file in [-1, 1] {
        if let Some(target) = from.offset(dir, d_file) {
            if matches!(board.piece_at(target), Some(p) if p.color != piece.color) {
                push_pawn_move(from, target, moves);
            }
        }
    }
}

/// Adds a pawn move, expanding it into the four promotion choices when
/// it ends on either back rank.
fn push_pawn_move(from: Position, to: Position, moves: &mut Vec<Move>) {
    if to.rank() == 1 || to.rank() == 8 {
        for kind in PieceType::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Single-step movers (knight and king): each offset is a destination if
/// it is on the board and not occupied by a friendly piece.
fn step_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, df) in offsets {
        if let Some(to) = from.offset(dr, df) {
            match board.piece_at(to) {
                Some(p) if p.color == piece.color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
}

/// Sliding movers (bishop, rook, queen): walk each direction until the
/// edge, stopping on the first occupied square; an enemy square is a
/// capture destination, a friendly square is not.
fn sliding_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, df) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(dr, df) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(p) => {
                    if p.color != piece.color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

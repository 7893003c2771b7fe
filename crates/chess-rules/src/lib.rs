//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8×8 mailbox board with value semantics
//! - [`Game`] - turn handling, move legality, and terminal-state queries
//! - [`pseudo_legal_moves`] and [`king_in_check`] - per-piece geometry
//!   and check detection
//!
//! # Architecture
//!
//! Move generation is layered. [`pseudo_legal_moves`] knows only piece
//! geometry and occupancy; [`Game::valid_moves`] simulates each candidate
//! on a cloned board and discards any that leave the mover's own king in
//! check. [`Game::make_move`] re-validates turn and legality before
//! mutating anything, so a rejected move has no side effects.
//!
//! The engine is single-threaded and synchronous, holds no shared state,
//! and exposes no notation, network, or storage surface. Persistence
//! collaborators round-trip board and turn through serde.
//!
//! # Example
//!
//! ```
//! use chess_model::{Move, Position};
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! let e2 = Position::new(2, 5).unwrap();
//! let moves = game.valid_moves(e2).unwrap();
//! assert_eq!(moves.len(), 2); // single and double pawn push
//! game.make_move(Move::from_uci("e2e4").unwrap()).unwrap();
//! ```

mod board;
mod game;
mod movegen;

pub use board::Board;
pub use game::{Game, MoveError};
pub use movegen::{king_in_check, pseudo_legal_moves};

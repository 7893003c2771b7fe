//! Core value types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`], [`PieceType`], and [`Color`] for piece representation
//! - [`Position`] for validated 1-indexed board coordinates
//! - [`Move`] for move representation
//!
//! All types are immutable values with structural equality and serde
//! support; board state and game logic live in the `chess-rules` crate.

mod color;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceType};
pub use position::{Position, PositionError};

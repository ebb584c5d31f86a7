//! Chess position model and legal move generation.
//!
//! [`Position`] is a small `Copy` value holding the full game state: piece
//! placement, side to move, castling rights, en passant target, and move
//! counters. [`legal_moves`] produces exactly the moves the rules of chess
//! allow, and [`Position::apply`] plays one of them. FEN decoding and
//! encoding go through `FromStr` and `Display` on `Position`.

mod apply;
mod attacks;
mod castle_rights;
mod color;
mod error;
mod fen;
mod movegen;
mod moves;
mod perft;
mod piece;
mod position;
mod rules;
mod square;

pub use apply::Undo;
pub use attacks::is_attacked;
pub use castle_rights::{CastleRights, CastleSide};
pub use color::Color;
pub use error::{FenError, PositionError};
pub use fen::STARTING_FEN;
pub use movegen::{in_check, is_checkmate, is_stalemate, legal_moves};
pub use moves::{Move, MoveKind};
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use position::{Position, PrettyPosition};
pub use rules::pseudo_legal_moves;
pub use square::Square;

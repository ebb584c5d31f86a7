//! Error types for geometry, rules queries, and position validation.

use crate::color::Color;
use crate::moves::Move;
use crate::square::Square;

/// Errors raised by geometry construction, rules queries, and structural
/// position validation.
///
/// Every failure is local and synchronous; the library never retries or
/// silently recovers — callers decide what to do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// Coordinates outside the 8x8 board.
    #[error("coordinates off the board: rank {rank}, file {file}")]
    InvalidCoordinate {
        /// Requested rank (valid range 0..=7).
        rank: i8,
        /// Requested file (valid range 0..=7).
        file: i8,
    },
    /// A rules query against a square that holds no piece of the side to move.
    #[error("no piece of the side to move on {square}")]
    InvalidQuery {
        /// The offending square.
        square: Square,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 {} king, found {count}", .color.name())]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn occupies the first or eighth rank.
    #[error("pawn on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn sits.
        square: Square,
    },
    /// A move was applied that the generator would not have produced.
    ///
    /// The applier trusts its input and does not raise this itself; it exists
    /// for callers that choose to validate defensively.
    #[error("move {mv} is not legal in this position")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },
}

/// Errors that occur when decoding a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not describe exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A placement rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {width} squares, expected 8")]
    BadRankWidth {
        /// Zero-based index into the FEN rank list (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        width: usize,
    },
    /// An unrecognized character in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid field text.
        found: String,
    },
    /// An unrecognized character in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid field text.
        found: String,
    },
    /// The halfmove clock or fullmove number is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidCounter {
        /// Which counter field failed ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid field text.
        found: String,
    },
    /// The decoded position fails structural validation.
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] PositionError),
}

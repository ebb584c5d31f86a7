//! Move representation: a pure data record describing a position transition.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::PieceKind;
use crate::square::Square;

/// The category of a move, for the cases the applier must treat specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move or an ordinary capture.
    Normal,
    /// A pawn advancing two squares from its starting rank.
    DoublePush,
    /// A pawn capturing onto the en-passant target square.
    EnPassant,
    /// The king castling toward the given wing.
    Castle(CastleSide),
}

/// A move: origin, destination, optional promotion kind, and flags.
///
/// A move describes a transition; it is not tied to a specific [`Position`]
/// beyond that. Two moves compare equal iff every component matches.
///
/// [`Position`]: crate::position::Position
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    kind: MoveKind,
    capture: bool,
}

impl Move {
    /// Create a quiet (non-capturing) move.
    pub const fn quiet(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::Normal,
            capture: false,
        }
    }

    /// Create an ordinary capture.
    pub const fn capture(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::Normal,
            capture: true,
        }
    }

    /// Create a double pawn push.
    pub const fn double_push(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::DoublePush,
            capture: false,
        }
    }

    /// Create an en-passant capture onto the target square.
    pub const fn en_passant(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::EnPassant,
            capture: true,
        }
    }

    /// Create a promotion, capturing or not.
    pub const fn promotion(from: Square, to: Square, kind: PieceKind, capture: bool) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
            kind: MoveKind::Normal,
            capture,
        }
    }

    /// Create a castle move, described by the king's origin and destination.
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Move {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::Castle(side),
            capture: false,
        }
    }

    /// The origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// The destination square. For castling, the king's destination.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece a pawn promotes to, if this is a promotion.
    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        self.promotion
    }

    /// The move category.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Return `true` if this move captures a piece (including en passant).
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.capture
    }

    /// Return `true` if this is an en-passant capture.
    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Return `true` if this is a castle move (either wing).
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// Return `true` if this is a double pawn push.
    #[inline]
    pub const fn is_double_push(self) -> bool {
        matches!(self.kind, MoveKind::DoublePush)
    }

    /// Render as origin + destination + optional promotion letter ("e2e4",
    /// "e7e8q"), the form a UI or PGN layer consumes.
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.fen_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?}", self, self.kind)?;
        if self.capture {
            write!(f, " capture")?;
        }
        write!(f, ")")
    }
}

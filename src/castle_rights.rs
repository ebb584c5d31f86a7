//! Castling rights: four independent booleans, one per side and wing.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;

/// Which wing of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Per-side, per-wing castling eligibility.
///
/// Rights are cleared permanently when the relevant king or rook moves, or
/// when the relevant rook is captured; they are never restored.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    white_king_side: bool,
    white_queen_side: bool,
    black_king_side: bool,
    black_queen_side: bool,
}

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    /// All four castling rights, as at the start of a game.
    pub const ALL: CastleRights = CastleRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    /// Return `true` if `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side,
            (Color::Black, CastleSide::KingSide) => self.black_king_side,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side,
        }
    }

    /// Return `true` if no rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !self.white_king_side
            && !self.white_queen_side
            && !self.black_king_side
            && !self.black_queen_side
    }

    /// Return new rights with one right cleared.
    #[must_use]
    pub const fn without(self, color: Color, side: CastleSide) -> CastleRights {
        let mut rights = self;
        match (color, side) {
            (Color::White, CastleSide::KingSide) => rights.white_king_side = false,
            (Color::White, CastleSide::QueenSide) => rights.white_queen_side = false,
            (Color::Black, CastleSide::KingSide) => rights.black_king_side = false,
            (Color::Black, CastleSide::QueenSide) => rights.black_queen_side = false,
        }
        rights
    }

    /// Return new rights with both of `color`'s rights cleared.
    #[must_use]
    pub const fn without_color(self, color: Color) -> CastleRights {
        self.without(color, CastleSide::KingSide)
            .without(color, CastleSide::QueenSide)
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            match c {
                'K' => rights.white_king_side = true,
                'Q' => rights.white_queen_side = true,
                'k' => rights.black_king_side = true,
                'q' => rights.black_queen_side = true,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            }
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        let mut s = String::with_capacity(4);
        if self.white_king_side {
            s.push('K');
        }
        if self.white_queen_side {
            s.push('Q');
        }
        if self.black_king_side {
            s.push('k');
        }
        if self.black_queen_side {
            s.push('q');
        }
        s
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;

    #[test]
    fn all_and_none() {
        for color in Color::ALL {
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                assert!(CastleRights::ALL.has(color, side));
                assert!(!CastleRights::NONE.has(color, side));
            }
        }
        assert!(CastleRights::NONE.is_empty());
        assert!(!CastleRights::ALL.is_empty());
    }

    #[test]
    fn without_clears_one_right() {
        let rights = CastleRights::ALL.without(Color::White, CastleSide::KingSide);
        assert!(!rights.has(Color::White, CastleSide::KingSide));
        assert!(rights.has(Color::White, CastleSide::QueenSide));
        assert!(rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn without_color_clears_both_wings() {
        let rights = CastleRights::ALL.without_color(Color::Black);
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(!rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn from_fen_to_fen_roundtrip() {
        for fen in ["KQkq", "Kq", "k", "-", "KQ", "kq", "Qk"] {
            let rights = CastleRights::from_fen(fen).unwrap();
            let reparsed = CastleRights::from_fen(&rights.to_fen()).unwrap();
            assert_eq!(rights, reparsed, "roundtrip failed for {fen}");
        }
    }

    #[test]
    fn from_fen_starting_and_empty() {
        assert_eq!(CastleRights::from_fen("KQkq").unwrap(), CastleRights::ALL);
        assert_eq!(CastleRights::from_fen("-").unwrap(), CastleRights::NONE);
    }

    #[test]
    fn from_fen_invalid() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("1").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", CastleRights::ALL), "KQkq");
        assert_eq!(format!("{}", CastleRights::NONE), "-");
        assert_eq!(
            format!("{}", CastleRights::ALL.without_color(Color::White)),
            "kq"
        );
    }
}

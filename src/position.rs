//! The position: piece placement, side to move, castling, en passant, counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::PositionError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Complete game-state snapshot.
///
/// A `Position` is a value: it is `Copy`, and copying produces an independent
/// state. Mutation happens only through [`apply`]/[`undo`]; move generation
/// and attack queries are read-only consumers.
///
/// [`apply`]: Position::apply
/// [`undo`]: Position::undo
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// One optional piece per square, indexed by [`Square::index`].
    board: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Current castling rights.
    castling: CastleRights,
    /// En-passant target square, set only immediately after a double pawn push.
    en_passant: Option<Square>,
    /// Halfmoves since the last capture or pawn move, for the fifty-move rule.
    halfmove_clock: u16,
    /// Fullmove number; starts at 1, incremented after Black moves.
    fullmove_number: u16,
}

impl Position {
    /// Return an empty board with White to move. Not a valid playable
    /// position until kings are placed; used by FEN decoding.
    pub(crate) fn empty() -> Position {
        Position {
            board: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Position {
        let mut pos = Position::empty();
        pos.castling = CastleRights::ALL;

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            let file = file as i8;
            pos.board[Square::from_coords(0, file).unwrap().index()] =
                Some(Piece::new(Color::White, kind));
            pos.board[Square::from_coords(1, file).unwrap().index()] =
                Some(Piece::new(Color::White, PieceKind::Pawn));
            pos.board[Square::from_coords(6, file).unwrap().index()] =
                Some(Piece::new(Color::Black, PieceKind::Pawn));
            pos.board[Square::from_coords(7, file).unwrap().index()] =
                Some(Piece::new(Color::Black, kind));
        }
        pos
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.board[sq.index()].is_some()
    }

    /// Place a piece, overwriting whatever was there.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.board[sq.index()] = Some(piece);
    }

    /// Remove and return the piece on a square.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.board[sq.index()].take()
    }

    /// Iterate over all occupied squares of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.board[sq.index()]
                .filter(|piece| piece.color() == color)
                .map(|piece| (sq, piece))
        })
    }

    /// Return the square of `color`'s king.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::InvalidKingCount`] if the king is missing —
    /// check detection is undefined without it.
    pub fn king_square(&self, color: Color) -> Result<Square, PositionError> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.is(PieceKind::King))
            .map(|(sq, _)| sq)
            .ok_or(PositionError::InvalidKingCount { color, count: 0 })
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en-passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Validate structural invariants: exactly one king per side, no pawns on
    /// the back ranks.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.is(PieceKind::King))
                .count();
            if count != 1 {
                return Err(PositionError::InvalidKingCount { color, count });
            }
        }

        for sq in Square::all() {
            if sq.rank() == 0 || sq.rank() == 7 {
                if let Some(piece) = self.piece_at(sq)
                    && piece.is(PieceKind::Pawn)
                {
                    return Err(PositionError::PawnOnBackRank { square: sq });
                }
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

/// Wrapper for printing a position as an 8x8 grid.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8i8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..8i8 {
                let sq = Square::from_coords(rank, file).expect("loop stays on board");
                let c = match self.0.piece_at(sq) {
                    Some(piece) => piece.fen_char(),
                    None => '.',
                };
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

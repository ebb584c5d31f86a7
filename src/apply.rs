//! Move application and reversal.

use tracing::trace;

use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::moves::{Move, MoveKind};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

/// State saved by [`Position::apply`] that [`Position::undo`] needs to reverse
/// it. The position keeps no history of its own, so the caller must hold onto
/// this between apply and undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    /// The captured piece and the square it stood on (which differs from the
    /// move destination for en passant), if the move captured.
    captured: Option<(Square, Piece)>,
    /// Castling rights before the move.
    castling: CastleRights,
    /// En-passant target before the move.
    en_passant: Option<Square>,
    /// Halfmove clock before the move.
    halfmove_clock: u16,
}

/// Post-castling rook relocation for a castle move described by the king's
/// destination square.
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to {
        Square::G1 => (Square::H1, Square::F1),
        Square::C1 => (Square::A1, Square::D1),
        Square::G8 => (Square::H8, Square::F8),
        Square::C8 => (Square::A8, Square::D8),
        _ => unreachable!("castle move with king destination {king_to}"),
    }
}

/// Castling rights revoked when a move touches the given square: moving the
/// king or a rook off its home square, or capturing a rook on one, clears the
/// affected rights permanently.
fn revoked_rights(rights: CastleRights, sq: Square) -> CastleRights {
    match sq {
        Square::E1 => rights.without_color(Color::White),
        Square::A1 => rights.without(Color::White, CastleSide::QueenSide),
        Square::H1 => rights.without(Color::White, CastleSide::KingSide),
        Square::E8 => rights.without_color(Color::Black),
        Square::A8 => rights.without(Color::Black, CastleSide::QueenSide),
        Square::H8 => rights.without(Color::Black, CastleSide::KingSide),
        _ => rights,
    }
}

impl Position {
    /// Apply a move in place, returning the [`Undo`] record that reverses it.
    ///
    /// Precondition: `mv` is legal in this position (a member of
    /// [`legal_moves`]). The applier trusts its input and does not validate —
    /// legality is the generator's responsibility. Applying an illegal move
    /// leaves the position in an unspecified but structurally sound state.
    ///
    /// [`legal_moves`]: crate::movegen::legal_moves
    pub fn apply(&mut self, mv: Move) -> Undo {
        let us = self.side_to_move();
        let them = us.other();

        let mut undo = Undo {
            captured: None,
            castling: self.castling(),
            en_passant: self.en_passant(),
            halfmove_clock: self.halfmove_clock(),
        };

        // En passant is only available for the reply to a double push.
        self.set_en_passant(None);

        let Some(piece) = self.take(mv.from()) else {
            debug_assert!(false, "apply on empty origin square {}", mv.from());
            return undo;
        };

        match mv.kind() {
            MoveKind::Normal => {
                if let Some(victim) = self.take(mv.to()) {
                    undo.captured = Some((mv.to(), victim));
                }
                let placed = match mv.promotion_kind() {
                    Some(kind) => Piece::new(us, kind),
                    None => piece,
                };
                self.put(mv.to(), placed);
            }

            MoveKind::DoublePush => {
                self.put(mv.to(), piece);
                // The square the pawn skipped becomes the en-passant target.
                let target = mv
                    .from()
                    .offset(us.pawn_direction(), 0)
                    .expect("double push origin has a forward square");
                self.set_en_passant(Some(target));
            }

            MoveKind::EnPassant => {
                self.put(mv.to(), piece);
                // The captured pawn sits behind the target square, on the
                // capturing side's origin rank.
                let victim_sq = mv
                    .to()
                    .offset(-us.pawn_direction(), 0)
                    .expect("en passant target has a square behind it");
                if let Some(victim) = self.take(victim_sq) {
                    undo.captured = Some((victim_sq, victim));
                }
            }

            MoveKind::Castle(_) => {
                self.put(mv.to(), piece);
                let (rook_from, rook_to) = castle_rook_squares(mv.to());
                if let Some(rook) = self.take(rook_from) {
                    self.put(rook_to, rook);
                }
            }
        }

        // Rights are revoked by anything touching a king or rook home square.
        let rights = revoked_rights(self.castling(), mv.from());
        let rights = revoked_rights(rights, mv.to());
        self.set_castling(rights);

        // Halfmove clock resets on captures and pawn moves.
        if mv.is_capture() || piece.is(PieceKind::Pawn) {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock() + 1);
        }

        self.set_side_to_move(them);
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number() + 1);
        }

        trace!(mv = %mv, side = %us, "applied move");
        undo
    }

    /// Reverse the most recent [`apply`](Position::apply) of `mv` using its
    /// `undo` record, restoring the position bit for bit.
    pub fn undo(&mut self, mv: Move, undo: Undo) {
        // The mover is the side that is no longer to move.
        let us = self.side_to_move().other();

        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number() - 1);
        }
        self.set_side_to_move(us);
        self.set_castling(undo.castling);
        self.set_en_passant(undo.en_passant);
        self.set_halfmove_clock(undo.halfmove_clock);

        if let Some(piece) = self.take(mv.to()) {
            // A promoted piece reverts to the pawn it was.
            let original = match mv.promotion_kind() {
                Some(_) => Piece::new(us, PieceKind::Pawn),
                None => piece,
            };
            self.put(mv.from(), original);
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(mv.to());
            if let Some(rook) = self.take(rook_to) {
                self.put(rook_from, rook);
            }
        }

        if let Some((victim_sq, victim)) = undo.captured {
            self.put(victim_sq, victim);
        }
    }
}

//! Legal move generation and game-state queries.

use tracing::trace;

use crate::attacks::is_attacked;
use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::error::PositionError;
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::rules::pseudo_legal_moves;
use crate::square::Square;

/// Generate every legal move for the side to move.
///
/// Each pseudo-legal candidate is applied to a scratch copy and kept only if
/// the mover's king is not attacked afterward. This one filter uniformly
/// handles pins, discovered checks, and moving into check. Castle moves are
/// added separately with their stricter safety rules.
///
/// The result is deterministic and stable for a given position. An empty
/// result means checkmate or stalemate, distinguished by [`in_check`].
///
/// # Errors
///
/// Returns [`PositionError::InvalidKingCount`] if the side to move has no
/// king; generation never fails for a structurally valid position.
pub fn legal_moves(pos: &Position) -> Result<Vec<Move>, PositionError> {
    let us = pos.side_to_move();
    let them = us.other();

    // Fail up front on a kingless position rather than mid-iteration.
    pos.king_square(us)?;

    let mut moves = Vec::with_capacity(48);
    for (from, _) in pos.pieces_of(us) {
        for mv in pseudo_legal_moves(pos, from)? {
            if !leaves_king_attacked(pos, mv, us, them) {
                moves.push(mv);
            }
        }
    }

    gen_castles(pos, us, them, &mut moves);

    trace!(side = %us, count = moves.len(), "generated legal moves");
    Ok(moves)
}

/// Apply `mv` on a scratch copy and test whether `us` ends up with the king
/// attacked. This also covers the en-passant edge case where removing the
/// captured pawn opens a line to the king: the scratch copy has that pawn
/// already gone.
fn leaves_king_attacked(pos: &Position, mv: Move, us: Color, them: Color) -> bool {
    let mut scratch = *pos;
    scratch.apply(mv);
    match scratch.king_square(us) {
        Ok(king_sq) => is_attacked(&scratch, king_sq, them),
        // Presence was checked before generation started.
        Err(_) => true,
    }
}

/// Add castle moves: rights present, king and rook on their home squares,
/// path empty, and none of the king's start/transit/destination squares
/// attacked.
fn gen_castles(pos: &Position, us: Color, them: Color, moves: &mut Vec<Move>) {
    let back = match us {
        Color::White => 0,
        Color::Black => 7,
    };
    let sq = |file: i8| Square::from_coords(back, file).expect("back rank square");

    let king_from = sq(4);
    if pos.piece_at(king_from) != Some(Piece::new(us, PieceKind::King)) {
        return;
    }
    // A king in check may not castle out of it.
    if is_attacked(pos, king_from, them) {
        return;
    }

    let rook = Piece::new(us, PieceKind::Rook);

    if pos.castling().has(us, CastleSide::KingSide)
        && pos.piece_at(sq(7)) == Some(rook)
        && !pos.is_occupied(sq(5))
        && !pos.is_occupied(sq(6))
        && !is_attacked(pos, sq(5), them)
        && !is_attacked(pos, sq(6), them)
    {
        moves.push(Move::castle(king_from, sq(6), CastleSide::KingSide));
    }

    if pos.castling().has(us, CastleSide::QueenSide)
        && pos.piece_at(sq(0)) == Some(rook)
        && !pos.is_occupied(sq(1))
        && !pos.is_occupied(sq(2))
        && !pos.is_occupied(sq(3))
        && !is_attacked(pos, sq(2), them)
        && !is_attacked(pos, sq(3), them)
    {
        moves.push(Move::castle(king_from, sq(2), CastleSide::QueenSide));
    }
}

/// Return `true` if the side to move is in check.
///
/// # Errors
///
/// Returns [`PositionError::InvalidKingCount`] if the side to move has no king.
pub fn in_check(pos: &Position) -> Result<bool, PositionError> {
    let us = pos.side_to_move();
    let king_sq = pos.king_square(us)?;
    Ok(is_attacked(pos, king_sq, us.other()))
}

/// Return `true` if the side to move is checkmated: no legal moves and in check.
pub fn is_checkmate(pos: &Position) -> Result<bool, PositionError> {
    Ok(legal_moves(pos)?.is_empty() && in_check(pos)?)
}

/// Return `true` if the side to move is stalemated: no legal moves and not in check.
pub fn is_stalemate(pos: &Position) -> Result<bool, PositionError> {
    Ok(legal_moves(pos)?.is_empty() && !in_check(pos)?)
}

//! Per-piece pseudo-legal move generation.
//!
//! A pseudo-legal move obeys the piece's movement pattern and occupancy
//! blocking, but has not yet been checked against leaving its own king
//! attacked — that filter lives in [`movegen`](crate::movegen). Castling is
//! also produced there, since it needs attack information.

use crate::color::Color;
use crate::error::PositionError;
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

/// The four orthogonal directions, as (rank, file) steps.
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal directions.
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jumps.
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The eight king steps (orthogonal + diagonal).
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Generate the pseudo-legal moves for the side-to-move piece on `from`.
///
/// # Errors
///
/// Returns [`PositionError::InvalidQuery`] if `from` is empty or holds an
/// opponent piece — querying it is a caller contract violation.
pub fn pseudo_legal_moves(pos: &Position, from: Square) -> Result<Vec<Move>, PositionError> {
    let piece = pos
        .piece_at(from)
        .filter(|piece| piece.color() == pos.side_to_move())
        .ok_or(PositionError::InvalidQuery { square: from })?;

    let mut moves = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(pos, from, piece.color(), &mut moves),
        PieceKind::Knight => leaper_moves(pos, from, piece.color(), &KNIGHT_JUMPS, &mut moves),
        PieceKind::King => leaper_moves(pos, from, piece.color(), &KING_STEPS, &mut moves),
        PieceKind::Bishop => slider_moves(pos, from, piece.color(), &DIAGONAL_DIRS, &mut moves),
        PieceKind::Rook => slider_moves(pos, from, piece.color(), &ORTHOGONAL_DIRS, &mut moves),
        PieceKind::Queen => {
            // Queen = rook rays + bishop rays.
            slider_moves(pos, from, piece.color(), &ORTHOGONAL_DIRS, &mut moves);
            slider_moves(pos, from, piece.color(), &DIAGONAL_DIRS, &mut moves);
        }
    }
    Ok(moves)
}

/// Pawn pushes, captures, en passant, and promotions.
fn pawn_moves(pos: &Position, from: Square, us: Color, moves: &mut Vec<Move>) {
    let dir = us.pawn_direction();
    let (start_rank, promo_rank) = match us {
        Color::White => (1, 7),
        Color::Black => (6, 0),
    };

    // Forward pushes. A push to the last rank becomes four promotions.
    if let Some(one) = from.offset(dir, 0)
        && !pos.is_occupied(one)
    {
        if one.rank() == promo_rank {
            for kind in PieceKind::PROMOTIONS {
                moves.push(Move::promotion(from, one, kind, false));
            }
        } else {
            moves.push(Move::quiet(from, one));
        }

        // Double push: only from the start rank, through an empty square.
        if from.rank() == start_rank
            && let Some(two) = one.offset(dir, 0)
            && !pos.is_occupied(two)
        {
            moves.push(Move::double_push(from, two));
        }
    }

    // Diagonal captures, including onto the en-passant target.
    for df in [-1, 1] {
        let Some(to) = from.offset(dir, df) else {
            continue;
        };

        match pos.piece_at(to) {
            Some(victim) if victim.color() != us => {
                if to.rank() == promo_rank {
                    for kind in PieceKind::PROMOTIONS {
                        moves.push(Move::promotion(from, to, kind, true));
                    }
                } else {
                    moves.push(Move::capture(from, to));
                }
            }
            Some(_) => {}
            None => {
                if pos.en_passant() == Some(to) {
                    moves.push(Move::en_passant(from, to));
                }
            }
        }
    }
}

/// Fixed-offset moves for knights and kings: step once, skip friendly squares.
fn leaper_moves(
    pos: &Position,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, df) in offsets {
        let Some(to) = from.offset(dr, df) else {
            continue;
        };
        match pos.piece_at(to) {
            None => moves.push(Move::quiet(from, to)),
            Some(victim) if victim.color() != us => moves.push(Move::capture(from, to)),
            Some(_) => {}
        }
    }
}

/// Ray casts for bishops, rooks, and queens: walk each direction until the
/// first occupied square — inclusive for an enemy (a capture), exclusive for
/// a friend.
fn slider_moves(
    pos: &Position,
    from: Square,
    us: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, df) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(dr, df) {
            match pos.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some(victim) => {
                    if victim.color() != us {
                        moves.push(Move::capture(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Return `true` if a `piece` standing on `from` could capture on `target`,
/// respecting occupancy blocking. Pawns use their capture pattern only, never
/// the forward push. Used by attack computation.
pub(crate) fn attacks_square(pos: &Position, piece: Piece, from: Square, target: Square) -> bool {
    match piece.kind() {
        PieceKind::Pawn => {
            let dir = piece.color().pawn_direction();
            [-1, 1]
                .into_iter()
                .any(|df| from.offset(dir, df) == Some(target))
        }
        PieceKind::Knight => KNIGHT_JUMPS
            .into_iter()
            .any(|(dr, df)| from.offset(dr, df) == Some(target)),
        PieceKind::King => KING_STEPS
            .into_iter()
            .any(|(dr, df)| from.offset(dr, df) == Some(target)),
        PieceKind::Bishop => ray_hits(pos, from, target, &DIAGONAL_DIRS),
        PieceKind::Rook => ray_hits(pos, from, target, &ORTHOGONAL_DIRS),
        PieceKind::Queen => {
            ray_hits(pos, from, target, &ORTHOGONAL_DIRS)
                || ray_hits(pos, from, target, &DIAGONAL_DIRS)
        }
    }
}

/// Walk rays from `from` and report whether `target` is the first reachable
/// stop (empty squares pass through, any piece blocks beyond itself).
fn ray_hits(pos: &Position, from: Square, target: Square, dirs: &[(i8, i8)]) -> bool {
    for &(dr, df) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            if next == target {
                return true;
            }
            if pos.is_occupied(next) {
                break;
            }
            current = next;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::error::PositionError;
    use crate::moves::Move;
    use crate::position::Position;
    use crate::square::Square;

    fn moves_from(fen: &str, from: Square) -> Vec<Move> {
        let pos: Position = fen.parse().unwrap();
        pseudo_legal_moves(&pos, from).unwrap()
    }

    fn destinations(moves: &[Move]) -> Vec<Square> {
        let mut dests: Vec<Square> = moves.iter().map(|mv| mv.to()).collect();
        dests.sort();
        dests.dedup();
        dests
    }

    #[test]
    fn empty_square_is_invalid_query() {
        let pos = Position::starting_position();
        assert_eq!(
            pseudo_legal_moves(&pos, Square::E4),
            Err(PositionError::InvalidQuery { square: Square::E4 })
        );
    }

    #[test]
    fn opponent_piece_is_invalid_query() {
        let pos = Position::starting_position();
        // White to move; e7 holds a black pawn.
        assert_eq!(
            pseudo_legal_moves(&pos, Square::E7),
            Err(PositionError::InvalidQuery { square: Square::E7 })
        );
    }

    #[test]
    fn pawn_single_and_double_push() {
        let moves = moves_from("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", Square::E2);
        assert_eq!(destinations(&moves), vec![Square::E3, Square::E4]);
        assert!(moves.iter().any(|mv| mv.is_double_push() && mv.to() == Square::E4));
    }

    #[test]
    fn pawn_double_push_blocked_by_intermediate() {
        // Black knight on e3 blocks both the single and the double push.
        let moves = moves_from("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", Square::E2);
        assert!(destinations(&moves).is_empty());
    }

    #[test]
    fn pawn_double_push_blocked_at_destination() {
        let moves = moves_from("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", Square::E2);
        assert_eq!(destinations(&moves), vec![Square::E3]);
    }

    #[test]
    fn pawn_not_on_start_rank_cannot_double_push() {
        let moves = moves_from("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1", Square::E3);
        assert_eq!(destinations(&moves), vec![Square::E4]);
    }

    #[test]
    fn pawn_captures_diagonally_only() {
        // Black pawns on d5 and e5: e4 pawn may capture d5 but not push to e5.
        let moves = moves_from("4k3/8/8/3pp3/4P3/8/8/4K3 w - - 0 1", Square::E4);
        assert_eq!(destinations(&moves), vec![Square::D5]);
        assert!(moves[0].is_capture());
    }

    #[test]
    fn pawn_cannot_capture_own_color() {
        let moves = moves_from("4k3/8/8/3P4/4P3/8/8/4K3 w - - 0 1", Square::E4);
        assert_eq!(destinations(&moves), vec![Square::E5]);
    }

    #[test]
    fn black_pawn_moves_down() {
        let moves = moves_from("4k3/4p3/8/8/8/8/8/4K3 b - - 0 1", Square::E7);
        assert_eq!(destinations(&moves), vec![Square::E5, Square::E6]);
    }

    #[test]
    fn pawn_en_passant_candidate() {
        let moves = moves_from("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", Square::E5);
        assert!(moves.iter().any(|mv| mv.is_en_passant() && mv.to() == Square::D6));
    }

    #[test]
    fn pawn_promotion_generates_four_kinds() {
        let moves = moves_from("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", Square::A7);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.promotion_kind().is_some()));
    }

    #[test]
    fn knight_jumps_and_blocking() {
        // Knight on b1 in the starting position: a3 and c3 only (d2 friendly).
        let pos = Position::starting_position();
        let moves = pseudo_legal_moves(&pos, Square::B1).unwrap();
        assert_eq!(destinations(&moves), vec![Square::A3, Square::C3]);
    }

    #[test]
    fn knight_in_corner_has_two_jumps() {
        let moves = moves_from("4k3/8/8/8/8/8/8/N3K3 w - - 0 1", Square::A1);
        assert_eq!(destinations(&moves), vec![Square::C2, Square::B3]);
    }

    #[test]
    fn rook_stops_at_blockers() {
        // Rook on a1, friendly king e1, black pawn a6.
        let moves = moves_from("4k3/8/p7/8/8/8/8/R3K3 w - - 0 1", Square::A1);
        let dests = destinations(&moves);
        assert!(dests.contains(&Square::A6), "capture on the blocker square");
        assert!(!dests.contains(&Square::A7), "no moves beyond the blocker");
        assert!(dests.contains(&Square::D1), "open file up to the king");
        assert!(!dests.contains(&Square::E1), "friendly square excluded");
    }

    #[test]
    fn bishop_moves_diagonally() {
        let moves = moves_from("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1", Square::D4);
        let dests = destinations(&moves);
        assert_eq!(dests.len(), 13);
        assert!(dests.contains(&Square::A1));
        assert!(dests.contains(&Square::H8));
        assert!(dests.contains(&Square::A7));
        assert!(!dests.contains(&Square::D5));
    }

    #[test]
    fn queen_unions_rook_and_bishop_rays() {
        let moves = moves_from("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1", Square::D4);
        assert_eq!(destinations(&moves).len(), 27);
    }

    #[test]
    fn king_steps_one_square() {
        let moves = moves_from("4k3/8/8/8/3K4/8/8/8 w - - 0 1", Square::D4);
        assert_eq!(destinations(&moves).len(), 8);
    }
}

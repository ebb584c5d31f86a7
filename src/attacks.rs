//! Attack computation: which squares a side attacks.

use crate::color::Color;
use crate::position::Position;
use crate::rules;
use crate::square::Square;

/// Return `true` if any piece of `by_color` attacks `sq`.
///
/// Attack patterns are the pieces' capture patterns: pawns count their
/// diagonal capture squares only (never the forward push), sliders are
/// blocked by occupancy, and the occupant of `sq` itself — if any — does not
/// block the attack on it. Pure function of the position; no state.
pub fn is_attacked(pos: &Position, sq: Square, by_color: Color) -> bool {
    pos.pieces_of(by_color)
        .any(|(from, piece)| rules::attacks_square(pos, piece, from, sq))
}

//! Perft: exhaustive legal-move tree counting.
//!
//! Counts every leaf of the legal move tree to a fixed depth. Node counts
//! for well-known positions are published, which makes perft the standard
//! correctness check for a move generator.

use crate::error::PositionError;
use crate::movegen::legal_moves;
use crate::moves::Move;
use crate::position::Position;

/// Count leaf nodes of the legal move tree at `depth` plies.
pub fn perft(pos: &Position, depth: u32) -> Result<u64, PositionError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(pos)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        let mut child = *pos;
        child.apply(mv);
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}

/// Perft split by root move: each legal move paired with the node count of
/// the subtree beneath it. Useful for diffing against another generator.
pub fn divide(pos: &Position, depth: u32) -> Result<Vec<(Move, u64)>, PositionError> {
    let mut results = Vec::new();
    for mv in legal_moves(pos)? {
        let mut child = *pos;
        child.apply(mv);
        results.push((mv, perft(&child, depth.saturating_sub(1))?));
    }
    Ok(results)
}

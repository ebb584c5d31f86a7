//! Integration tests for the public position API.
//!
//! Exercises FEN decoding and encoding, legal move generation, check
//! resolution, castling, and apply/undo consistency end to end through the
//! crate's public surface.

use arrocco::{
    Color, Move, Position, Square, STARTING_FEN, in_check, is_checkmate, is_stalemate,
    legal_moves, perft,
};

const SCHOLARS_MATE_FEN: &str =
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

const KIWIPETE_FEN: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

const BARE_KINGS_FEN: &str = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";

fn pos(fen: &str) -> Position {
    fen.parse().unwrap()
}

fn find_move(moves: &[Move], uci: &str) -> Option<Move> {
    moves.iter().copied().find(|mv| mv.to_uci() == uci)
}

// ── FEN ───────────────────────────────────────────────────────────────────────

#[test]
fn starting_fen_roundtrips() {
    let start = pos(STARTING_FEN);
    assert_eq!(format!("{start}"), STARTING_FEN);
    assert_eq!(start, Position::starting_position());
}

#[test]
fn fen_roundtrips_through_play() {
    let mut position = Position::starting_position();
    for uci in ["e2e4", "c7c5", "g1f3", "d7d6"] {
        let moves = legal_moves(&position).unwrap();
        let mv = find_move(&moves, uci).unwrap_or_else(|| panic!("{uci} should be legal"));
        position.apply(mv);
    }
    let encoded = format!("{position}");
    let reparsed: Position = encoded.parse().unwrap();
    assert_eq!(position, reparsed, "position should survive a FEN roundtrip");
}

#[test]
fn malformed_fen_is_rejected() {
    for bad in [
        "",
        "not a fen",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
    ] {
        assert!(bad.parse::<Position>().is_err(), "{bad:?} should not parse");
    }
}

// ── Move generation ───────────────────────────────────────────────────────────

#[test]
fn starting_position_has_twenty_moves() {
    let moves = legal_moves(&Position::starting_position()).unwrap();
    assert_eq!(moves.len(), 20);
}

#[test]
fn every_legal_reply_to_check_resolves_it() {
    // Bare white king on e1 stares down a black queen on e8.
    let position = pos("4k3/4q3/8/8/8/8/8/4K3 w - - 0 1");
    assert!(in_check(&position).unwrap());

    let moves = legal_moves(&position).unwrap();
    assert!(!moves.is_empty(), "the king has flight squares");
    for mv in &moves {
        assert_ne!(
            mv.to().file(),
            4,
            "{mv} leaves the king in the queen's line"
        );
        let mut child = position;
        child.apply(*mv);
        let king = child.king_square(Color::White).unwrap();
        assert!(
            !arrocco::is_attacked(&child, king, Color::Black),
            "{mv} leaves the white king in check"
        );
    }
}

#[test]
fn checkmate_and_stalemate_are_distinguished() {
    // Fool's mate.
    let mated = pos("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(is_checkmate(&mated).unwrap());
    assert!(!is_stalemate(&mated).unwrap());

    // Classic queen stalemate.
    let stuck = pos("8/8/8/8/8/1Q6/2K5/k7 b - - 0 1");
    assert!(is_stalemate(&stuck).unwrap());
    assert!(!is_checkmate(&stuck).unwrap());

    // Quiet positions are neither.
    let quiet = pos(BARE_KINGS_FEN);
    assert!(!is_checkmate(&quiet).unwrap());
    assert!(!is_stalemate(&quiet).unwrap());
}

#[test]
fn mate_in_one_is_available() {
    let position = pos(SCHOLARS_MATE_FEN);
    let moves = legal_moves(&position).unwrap();
    let qxf7 = find_move(&moves, "h5f7").expect("Qxf7 should be legal");
    let mut child = position;
    child.apply(qxf7);
    assert!(is_checkmate(&child).unwrap(), "Qxf7 delivers mate");
}

// ── Castling ──────────────────────────────────────────────────────────────────

#[test]
fn kiwipete_offers_both_white_castles() {
    let moves = legal_moves(&pos(KIWIPETE_FEN)).unwrap();
    assert!(find_move(&moves, "e1g1").is_some(), "O-O should be legal");
    assert!(find_move(&moves, "e1c1").is_some(), "O-O-O should be legal");
}

#[test]
fn castling_moves_both_king_and_rook() {
    let mut position = pos("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = legal_moves(&position).unwrap();
    let castle = find_move(&moves, "e1c1").unwrap();
    position.apply(castle);

    assert!(position.piece_at(Square::C1).is_some_and(|p| p.color() == Color::White));
    assert!(position.piece_at(Square::D1).is_some_and(|p| p.color() == Color::White));
    assert!(position.piece_at(Square::E1).is_none());
    assert!(position.piece_at(Square::A1).is_none());
    assert!(
        !position.castling().has(Color::White, arrocco::CastleSide::KingSide),
        "castling forfeits the other wing too"
    );
}

#[test]
fn moving_the_king_forfeits_castling() {
    let mut position = pos("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = legal_moves(&position).unwrap();
    position.apply(find_move(&moves, "e1d1").unwrap());
    assert!(position.castling().is_empty());
}

// ── Apply and undo ────────────────────────────────────────────────────────────

#[test]
fn apply_then_undo_restores_the_position() {
    let original = pos(KIWIPETE_FEN);
    for mv in legal_moves(&original).unwrap() {
        let mut position = original;
        let undo = position.apply(mv);
        position.undo(mv, undo);
        assert_eq!(position, original, "undo of {mv} must restore the position");
    }
}

#[test]
fn apply_flips_side_and_advances_counters() {
    let mut position = Position::starting_position();
    let moves = legal_moves(&position).unwrap();
    position.apply(find_move(&moves, "g1f3").unwrap());

    assert_eq!(position.side_to_move(), Color::Black);
    assert_eq!(position.halfmove_clock(), 1, "knight move is not a reset");
    assert_eq!(position.fullmove_number(), 1);

    let replies = legal_moves(&position).unwrap();
    position.apply(find_move(&replies, "d7d5").unwrap());
    assert_eq!(position.side_to_move(), Color::White);
    assert_eq!(position.halfmove_clock(), 0, "pawn move resets the clock");
    assert_eq!(position.fullmove_number(), 2);
    assert_eq!(position.en_passant(), Some(Square::D6));
}

// ── Perft spot check ──────────────────────────────────────────────────────────

#[test]
fn perft_matches_published_counts() {
    assert_eq!(perft(&Position::starting_position(), 3).unwrap(), 8_902);
    assert_eq!(perft(&pos(KIWIPETE_FEN), 2).unwrap(), 2_039);
}

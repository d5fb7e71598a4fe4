//! Test suite for quiet moves and the capture search
//!
//! Exercises the generators on hand-built positions, without a session.
//!
//! # Test Organization
//!
//! - `test_man_*` - quiet man moves
//! - `test_king_*` - quiet king slides
//! - `test_capture_man_*` - man captures, chains and mid-chain promotion
//! - `test_capture_king_*` - flying-king captures
//! - `test_capture_chain_*` - captured-set handling and termination

use super::*;
use crate::bitset::SquareSet;
use crate::board::Board;
use crate::types::{Piece, Side, Square};

const WM: Piece = Piece::Man(Side::White);
const WK: Piece = Piece::King(Side::White);
const BM: Piece = Piece::Man(Side::Black);
const BK: Piece = Piece::King(Side::Black);

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

/// Build a board from `(row, col, piece)` triples
fn board(pieces: &[(u8, u8, Piece)]) -> Board {
    let placements: Vec<_> = pieces
        .iter()
        .map(|&(row, col, piece)| (sq(row, col), piece))
        .collect();
    Board::from_pieces(&placements).expect("test placements are on dark squares")
}

fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort();
    squares
}

fn landings(captures: &[CaptureMove]) -> Vec<Square> {
    sorted(captures.iter().map(|capture| capture.landing).collect())
}

fn captures_from(board: &Board, from: Square) -> Vec<CaptureMove> {
    let piece = board.get(from).unwrap();
    generate_captures(board, from, piece, &SquareSet::new())
}

// ============================================================================
// Quiet Man Moves
// ============================================================================

#[test]
fn test_man_moves_forward_only() {
    //! White men step toward row 0, Black men toward row 7, never backwards.
    let b = board(&[(4, 3, WM), (3, 6, BM)]);

    assert_eq!(
        sorted(generate_simple_moves(&b, sq(4, 3))),
        vec![sq(3, 2), sq(3, 4)]
    );
    assert_eq!(
        sorted(generate_simple_moves(&b, sq(3, 6))),
        vec![sq(4, 5), sq(4, 7)]
    );
}

#[test]
fn test_man_blocked_by_any_piece() {
    let b = board(&[(4, 3, WM), (3, 2, WM), (3, 4, BM)]);
    assert!(generate_simple_moves(&b, sq(4, 3)).is_empty());
}

#[test]
fn test_man_on_edge_has_single_move() {
    let b = board(&[(5, 0, WM)]);
    assert_eq!(generate_simple_moves(&b, sq(5, 0)), vec![sq(4, 1)]);
}

#[test]
fn test_initial_position_has_seven_moves_per_side() {
    let b = Board::initial();
    let white: usize = b
        .pieces_of(Side::White)
        .map(|(square, _)| generate_simple_moves(&b, square).len())
        .sum();
    let black: usize = b
        .pieces_of(Side::Black)
        .map(|(square, _)| generate_simple_moves(&b, square).len())
        .sum();
    assert_eq!(white, 7);
    assert_eq!(black, 7);
}

#[test]
fn test_empty_square_has_no_moves() {
    let b = Board::initial();
    assert!(generate_simple_moves(&b, sq(4, 1)).is_empty());
    assert!(generate_simple_moves(&b, sq(4, 4)).is_empty(), "light square");
}

// ============================================================================
// Quiet King Moves
// ============================================================================

#[test]
fn test_king_slides_along_all_diagonals() {
    //! A lone king in the corner sees the whole long diagonal.
    let b = board(&[(7, 0, WK)]);
    assert_eq!(
        generate_simple_moves(&b, sq(7, 0)),
        vec![sq(6, 1), sq(5, 2), sq(4, 3), sq(3, 4), sq(2, 5), sq(1, 6), sq(0, 7)]
    );
}

#[test]
fn test_king_moves_backwards_too() {
    let b = board(&[(3, 2, BK)]);
    let moves = generate_simple_moves(&b, sq(3, 2));
    assert!(moves.contains(&sq(2, 1)), "black king may move toward row 0");
    assert!(moves.contains(&sq(7, 6)));
    assert_eq!(moves.len(), 11);
}

#[test]
fn test_king_stops_before_first_piece() {
    let b = board(&[(7, 0, WK), (4, 3, BM)]);
    assert_eq!(
        generate_simple_moves(&b, sq(7, 0)),
        vec![sq(6, 1), sq(5, 2)]
    );
}

// ============================================================================
// Man Captures
// ============================================================================

#[test]
fn test_capture_man_single_jump() {
    let b = board(&[(4, 1, WM), (3, 2, BM)]);
    let captures = captures_from(&b, sq(4, 1));

    assert_eq!(captures.len(), 1);
    let capture = &captures[0];
    assert_eq!(capture.landing, sq(2, 3));
    assert_eq!(capture.captured, sq(3, 2));
    assert!(capture.is_single_jump());
    assert!(!capture.promoted);
}

#[test]
fn test_capture_man_backwards() {
    //! Men capture in all four directions even though they only move forward.
    let b = board(&[(3, 2, WM), (4, 3, BM)]);
    assert_eq!(landings(&captures_from(&b, sq(3, 2))), vec![sq(5, 4)]);
}

#[test]
fn test_capture_man_needs_empty_landing() {
    let b = board(&[(4, 1, WM), (3, 2, BM), (2, 3, BM)]);
    assert!(captures_from(&b, sq(4, 1)).is_empty());
    assert!(!has_capture(&b, sq(4, 1), WM, &SquareSet::new()));
}

#[test]
fn test_capture_man_never_jumps_own_piece() {
    let b = board(&[(4, 1, WM), (3, 2, WM)]);
    assert!(captures_from(&b, sq(4, 1)).is_empty());
}

#[test]
fn test_capture_man_no_jump_off_board() {
    let b = board(&[(4, 1, WM), (3, 0, BM)]);
    assert!(captures_from(&b, sq(4, 1)).is_empty());
}

#[test]
fn test_capture_man_double_jump_reports_every_stop() {
    //! (6,1) x (5,2) -> (4,3) x (3,4) -> (2,5): both landings are listed,
    //! the second with the full captured set.
    let b = board(&[(6, 1, WM), (5, 2, BM), (3, 4, BM)]);
    let captures = captures_from(&b, sq(6, 1));

    assert_eq!(landings(&captures), vec![sq(2, 5), sq(4, 3)]);

    let deep = captures.iter().find(|c| c.landing == sq(2, 5)).unwrap();
    assert_eq!(deep.jumps(), 2);
    assert_eq!(deep.captured, sq(3, 4));
    assert!(deep.captured_set.contains(sq(5, 2)));
    assert!(deep.captured_set.contains(sq(3, 4)));
    assert_eq!(deep.path[0].landing, sq(4, 3));
}

#[test]
fn test_capture_man_branching_chain() {
    //! After the first jump the chain forks left and right.
    let b = board(&[(6, 3, WM), (5, 4, BM), (3, 4, BM), (3, 6, BM)]);
    let captures = captures_from(&b, sq(6, 3));

    assert_eq!(landings(&captures), vec![sq(2, 3), sq(2, 7), sq(4, 5)]);
    assert_eq!(captures.iter().filter(|c| c.is_single_jump()).count(), 1);
}

#[test]
fn test_capture_man_promotes_mid_chain() {
    //! A man that reaches row 0 mid-chain keeps capturing as a flying king:
    //! (2,1) x (1,2) -> (0,3), then slides over (1,4), (2,5) to take (3,6) -> (4,7).
    let b = board(&[(2, 1, WM), (1, 2, BM), (3, 6, BM)]);
    let captures = captures_from(&b, sq(2, 1));

    let crowned = captures.iter().find(|c| c.landing == sq(0, 3)).unwrap();
    assert!(crowned.promoted);

    let continued = captures
        .iter()
        .find(|c| c.landing == sq(4, 7))
        .expect("king-style continuation after promotion");
    assert_eq!(continued.jumps(), 2);
    assert!(continued.promoted);
    assert_eq!(continued.captured, sq(3, 6));
}

#[test]
fn test_capture_man_without_promotion_stays_man() {
    //! Same geometry one row lower: the man does not promote and cannot fly.
    let b = board(&[(3, 0, WM), (2, 1, BM), (4, 5, BM)]);
    let captures = captures_from(&b, sq(3, 0));
    assert_eq!(landings(&captures), vec![sq(1, 2)]);
}

// ============================================================================
// King Captures
// ============================================================================

#[test]
fn test_capture_king_lands_anywhere_beyond() {
    //! Every empty square behind the captured piece is a separate landing.
    let b = board(&[(7, 0, WK), (5, 2, BM)]);
    let captures = captures_from(&b, sq(7, 0));

    assert_eq!(
        landings(&captures),
        vec![sq(0, 7), sq(1, 6), sq(2, 5), sq(3, 4), sq(4, 3)]
    );
    assert!(captures.iter().all(|c| c.captured == sq(5, 2)));
}

#[test]
fn test_capture_king_landing_stops_at_obstruction() {
    let b = board(&[(7, 0, WK), (5, 2, BM), (2, 5, WM)]);
    assert_eq!(
        landings(&captures_from(&b, sq(7, 0))),
        vec![sq(3, 4), sq(4, 3)]
    );
}

#[test]
fn test_capture_king_cannot_jump_two_adjacent_pieces() {
    let b = board(&[(7, 0, WK), (5, 2, BM), (4, 3, BM)]);
    assert!(captures_from(&b, sq(7, 0)).is_empty());
}

#[test]
fn test_capture_king_blocked_by_own_piece() {
    let b = board(&[(7, 0, WK), (6, 1, WM), (4, 3, BM)]);
    assert!(captures_from(&b, sq(7, 0)).is_empty());
}

#[test]
fn test_capture_king_turns_mid_chain() {
    //! Only the (3,4) landing after taking (5,2) sees (2,3) on the crossing
    //! diagonal; the second jump lands on (1,2) or (0,1).
    let b = board(&[(7, 0, WK), (5, 2, BM), (2, 3, BM)]);
    let captures = captures_from(&b, sq(7, 0));

    let deep: Vec<_> = captures.iter().filter(|c| c.jumps() == 2).collect();
    assert!(!deep.is_empty());
    assert!(deep.iter().all(|c| c.captured == sq(2, 3)));
    assert_eq!(
        sorted(deep.iter().map(|c| c.landing).collect()),
        vec![sq(0, 1), sq(1, 2)]
    );
    assert!(deep.iter().all(|c| c.path[0].landing == sq(3, 4)));
}

// ============================================================================
// Chain Bookkeeping & Termination
// ============================================================================

#[test]
fn test_capture_chain_seed_blocks_recapture() {
    //! A square already captured in this chain is an obstacle, not a target.
    let b = board(&[(4, 1, WM), (3, 2, BM)]);
    let seed: SquareSet = [sq(3, 2)].iter().collect();
    assert!(generate_captures(&b, sq(4, 1), WM, &seed).is_empty());
    assert!(!has_capture(&b, sq(4, 1), WM, &seed));
}

#[test]
fn test_capture_chain_seed_square_is_not_a_landing() {
    //! A king cannot land on, or slide through, a square emptied earlier in the chain.
    let b = board(&[(7, 0, WK), (5, 2, BM)]);
    let seed: SquareSet = [sq(3, 4)].iter().collect();
    let captures = generate_captures(&b, sq(7, 0), WK, &seed);
    assert_eq!(landings(&captures), vec![sq(4, 3)]);
    assert!(captures.iter().all(|c| c.captured_set.contains(sq(3, 4))));
}

#[test]
fn test_capture_chain_each_piece_taken_once() {
    //! Four men around an open square let a king circle back to its start;
    //! no chain takes the same piece twice.
    let b = board(&[(5, 2, WK), (4, 3, BM), (2, 3, BM), (2, 1, BM), (4, 1, BM)]);
    let captures = captures_from(&b, sq(5, 2));

    assert!(!captures.is_empty());
    for capture in &captures {
        let mut taken: Vec<_> = capture.path.iter().map(|step| step.captured).collect();
        let total = taken.len();
        taken.sort();
        taken.dedup();
        assert_eq!(taken.len(), total, "piece captured twice in {:?}", capture.path);
        assert_eq!(capture.captured_set.len(), total);
    }
    assert!(captures.iter().any(|c| c.jumps() == 4));
}

#[test]
fn test_capture_chain_no_duplicate_landing_and_set() {
    let b = board(&[(5, 2, WK), (4, 3, BM), (2, 3, BM), (2, 1, BM), (4, 1, BM)]);
    let captures = captures_from(&b, sq(5, 2));

    let mut keys: Vec<_> = captures
        .iter()
        .map(|c| (c.landing, c.captured_set.iter().collect::<Vec<_>>()))
        .collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn test_capture_chain_terminates_with_facing_kings() {
    //! Kings of both sides scattered on open diagonals: the search must finish
    //! with a finite, bounded result.
    let b = board(&[
        (7, 0, WK),
        (0, 7, WK),
        (6, 3, WK),
        (5, 2, BK),
        (2, 5, BK),
        (3, 2, BK),
        (4, 5, BK),
        (1, 2, BK),
        (5, 6, BK),
    ]);
    for (square, piece) in b.pieces_of(Side::White) {
        let captures = generate_captures(&b, square, piece, &SquareSet::new());
        assert!(captures.len() < 10_000);
        assert!(captures
            .iter()
            .all(|c| c.jumps() <= crate::constants::MAX_CHAIN_DEPTH));
    }
}

#[test]
fn test_capture_origin_counts_as_vacant() {
    //! The moving king has left its square, so it may land on or pass over it.
    let b = board(&[(5, 2, WK), (4, 3, BM), (2, 3, BM), (2, 1, BM), (4, 1, BM)]);
    let captures = captures_from(&b, sq(5, 2));
    let back_home = captures
        .iter()
        .find(|c| c.landing == sq(5, 2))
        .expect("fourth jump lands on the origin");
    assert!([sq(4, 1), sq(4, 3)].contains(&back_home.captured));
    assert_eq!(back_home.jumps(), 4);
}

#[test]
fn test_has_capture_matches_search() {
    let b = board(&[(4, 1, WM), (3, 2, BM), (6, 5, WM), (7, 0, WK), (4, 3, BM)]);
    for (square, piece) in b.pieces_of(Side::White) {
        assert_eq!(
            has_capture(&b, square, piece, &SquareSet::new()),
            !generate_captures(&b, square, piece, &SquareSet::new()).is_empty(),
            "disagreement at {square}"
        );
    }
}

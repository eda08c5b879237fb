use othello_mcts::{Board, Color, Coord, OthelloError};

#[test]
fn initial_position_places_the_center_block() {
    let board = Board::new(8).unwrap();

    assert_eq!(board.cell(Coord::new(3, 3)), Some(Color::White));
    assert_eq!(board.cell(Coord::new(3, 4)), Some(Color::Black));
    assert_eq!(board.cell(Coord::new(4, 3)), Some(Color::Black));
    assert_eq!(board.cell(Coord::new(4, 4)), Some(Color::White));

    assert_eq!(board.score(), (2, 2));
    assert!(!board.is_full());
    assert!(!board.is_terminal());
}

#[test]
fn invalid_sizes_are_rejected() {
    for size in [0, 3, 5, 7, 9, 10, 16] {
        assert!(
            matches!(Board::new(size), Err(OthelloError::InvalidBoardSize(s)) if s == size),
            "size {} should be rejected",
            size
        );
    }
}

#[test]
fn initial_4x4_black_has_exactly_four_moves() {
    let board = Board::new(4).unwrap();
    let moves = board.valid_moves(Color::Black);

    // The standard corner-adjacent captures, in row-major order
    assert_eq!(
        moves,
        vec![
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(2, 3),
            Coord::new(3, 2),
        ]
    );
}

#[test]
fn valid_moves_land_only_on_empty_cells() {
    let mut board = Board::new(8).unwrap();
    assert!(board.apply_move(Coord::new(2, 3), Color::Black));

    for color in [Color::Black, Color::White] {
        for mv in board.valid_moves(color) {
            assert_eq!(board.cell(mv), None, "{} offered occupied cell {}", color, mv);
        }
    }
}

#[test]
fn applying_a_move_flips_the_flanked_run() {
    let mut board = Board::new(8).unwrap();

    assert!(board.apply_move(Coord::new(2, 3), Color::Black));

    assert_eq!(board.cell(Coord::new(2, 3)), Some(Color::Black));
    assert_eq!(board.cell(Coord::new(3, 3)), Some(Color::Black), "flanked disc flips");
    assert_eq!(board.score(), (4, 1));
}

#[test]
fn a_move_flips_only_former_opponent_discs_and_adds_one() {
    let board = Board::new(8).unwrap();
    let mv = Coord::new(2, 3);
    let flips = board.flips_for(mv, Color::Black);
    assert!(!flips.is_empty());
    for &flip in &flips {
        assert_eq!(board.cell(flip), Some(Color::White), "{} was not an opponent disc", flip);
    }

    let (black_before, white_before) = board.score();
    let mut after = board.clone();
    assert!(after.apply_move(mv, Color::Black));
    let (black_after, white_after) = after.score();

    // One disc placed; every flip converts white to black one-for-one
    assert_eq!(
        black_after + white_after,
        black_before + white_before + 1
    );
    assert_eq!(black_after, black_before + 1 + flips.len() as u32);
}

#[test]
fn illegal_moves_leave_the_board_untouched() {
    let mut board = Board::new(8).unwrap();
    let fresh = board.clone();

    // Occupied cell
    assert!(!board.apply_move(Coord::new(3, 3), Color::Black));
    // Empty cell with no flank
    assert!(!board.apply_move(Coord::new(0, 0), Color::Black));

    assert_eq!(board, fresh);
}

#[test]
fn cloned_boards_share_no_state() {
    let original = Board::new(8).unwrap();
    let mut copy = original.clone();

    assert!(copy.apply_move(Coord::new(2, 3), Color::Black));

    assert_eq!(original, Board::new(8).unwrap());
    assert_ne!(original, copy);
}

#[test]
fn a_full_board_is_terminal() {
    let board = Board::from_diagram(
        "X X X X
         X X O O
         O O O O
         O X X O",
    )
    .unwrap();

    assert!(board.is_full());
    assert!(board.is_terminal());
    assert_eq!(board.score(), (8, 8));
    assert_eq!(board.winner(), None, "equal discs tie");
}

#[test]
fn winner_is_the_color_with_more_discs() {
    let board = Board::from_diagram(
        "X X X X
         X X O O
         O O O O
         O X X X",
    )
    .unwrap();

    assert_eq!(board.score(), (9, 7));
    assert_eq!(board.winner(), Some(Color::Black));
}

#[test]
fn a_stuck_color_does_not_end_the_game_alone() {
    // Black has no move anywhere; White can still play c3
    let board = Board::from_diagram(
        "X X O O
         X X . .
         . . . .
         . . . .",
    )
    .unwrap();

    assert!(board.valid_moves(Color::Black).is_empty());
    assert_eq!(board.valid_moves(Color::White), vec![Coord::new(2, 0)]);
    assert!(!board.is_terminal(), "White can move, so the game goes on");
}

#[test]
fn both_colors_stuck_is_terminal_even_with_empty_cells() {
    let board = Board::from_diagram(
        "X X . .
         X X . .
         . . O O
         . . O O",
    )
    .unwrap();

    assert!(board.valid_moves(Color::Black).is_empty());
    assert!(board.valid_moves(Color::White).is_empty());
    assert!(!board.is_full());
    assert!(board.is_terminal());
}

#[test]
fn diagrams_parse_back_from_display_output() {
    let mut board = Board::new(6).unwrap();
    assert!(board.apply_move(Coord::new(1, 2), Color::Black));

    let rendered = format!("{}", board);
    let reparsed = Board::from_diagram(&rendered).unwrap();
    assert_eq!(board, reparsed);
}

#[test]
fn malformed_diagrams_are_rejected() {
    assert!(matches!(
        Board::from_diagram("X O . X O ."),
        Err(OthelloError::InvalidDiagram(_))
    ));
}

use othello_mcts::{
    Board, Color, Coord, MctsConfig, MctsPlayer, OthelloError, Player, RandomPlayer,
};

fn engine(color: Color, iterations: usize, seed: u64) -> MctsPlayer {
    let config = MctsConfig::default()
        .with_iterations(iterations)
        .with_seed(seed);
    MctsPlayer::new(color, config).unwrap()
}

#[test]
fn invalid_configurations_are_rejected() {
    let zero_iterations = MctsConfig::default().with_iterations(0);
    assert!(matches!(
        MctsPlayer::new(Color::Black, zero_iterations),
        Err(OthelloError::InvalidConfiguration(_))
    ));

    let nan_exploration = MctsConfig::default().with_exploration_constant(f64::NAN);
    assert!(matches!(
        MctsPlayer::new(Color::Black, nan_exploration),
        Err(OthelloError::InvalidConfiguration(_))
    ));

    let negative_exploration = MctsConfig::default().with_exploration_constant(-1.0);
    assert!(matches!(
        MctsPlayer::new(Color::Black, negative_exploration),
        Err(OthelloError::InvalidConfiguration(_))
    ));
}

#[test]
fn no_legal_moves_is_a_pass_not_a_search() {
    // Black has no move anywhere on this board
    let board = Board::from_diagram(
        "X X O O
         X X . .
         . . . .
         . . . .",
    )
    .unwrap();

    let mut player = engine(Color::Black, 500, 3);
    let mut reports = 0;
    let mv = player.choose_move_with_progress(&board, |_, _| reports += 1);

    assert_eq!(mv, None, "no legal moves must signal a pass");
    assert_eq!(reports, 0, "a pass must not run any search");
}

#[test]
fn a_single_legal_move_is_always_chosen() {
    // White's one legal move on this board is a3
    let board = Board::from_diagram(
        "X X O O
         X X . .
         . . . .
         . . . .",
    )
    .unwrap();

    let mut player = engine(Color::White, 20, 3);
    assert_eq!(player.choose_move(&board), Some(Coord::new(2, 0)));
}

#[test]
fn one_iteration_on_4x4_returns_an_opening_capture() {
    let board = Board::new(4).unwrap();
    let openings = board.valid_moves(Color::Black);
    assert_eq!(openings.len(), 4);

    let mut player = engine(Color::Black, 1, 99);
    let mv = player.choose_move(&board).expect("an opening exists");
    assert!(
        openings.contains(&mv),
        "{} is not one of the four openings",
        mv
    );
}

#[test]
fn search_does_not_mutate_the_callers_board() {
    let board = Board::new(8).unwrap();
    let mut player = engine(Color::Black, 200, 5);

    player.choose_move(&board).unwrap();
    assert_eq!(board, Board::new(8).unwrap());
}

#[test]
fn fixed_seed_means_fixed_answer() {
    let board = Board::new(8).unwrap();

    let first = engine(Color::Black, 300, 42).choose_move(&board);
    let second = engine(Color::Black, 300, 42).choose_move(&board);

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn progress_is_strictly_monotonic_and_completes_once() {
    let board = Board::new(6).unwrap();
    let mut player = engine(Color::Black, 50, 1);

    let mut reports = Vec::new();
    player
        .choose_move_with_progress(&board, |done, total| reports.push((done, total)))
        .unwrap();

    assert_eq!(reports.len(), 50);
    for window in reports.windows(2) {
        assert!(window[0].0 < window[1].0, "progress must strictly increase");
    }
    assert!(reports.iter().all(|&(_, total)| total == 50));
    assert_eq!(
        reports.iter().filter(|&&(done, _)| done == 50).count(),
        1,
        "completion must be reported exactly once"
    );
    assert_eq!(reports.last(), Some(&(50, 50)));
}

#[test]
fn statistics_reflect_the_last_search() {
    let board = Board::new(6).unwrap();
    let mut player = engine(Color::Black, 120, 8);

    player.choose_move(&board).unwrap();
    let stats = player.statistics();

    assert_eq!(stats.iterations, 120);
    assert!(stats.tree_size > 1, "the tree must have grown");
    assert!(stats.max_depth >= 1);
}

#[test]
fn a_full_game_against_random_terminates() {
    let mut board = Board::new(4).unwrap();
    let mut black = engine(Color::Black, 30, 7);
    let mut white = RandomPlayer::new(Color::White, Some(13));

    let mut to_move = Color::Black;
    let mut consecutive_passes = 0;
    let mut plies = 0;

    // A 4x4 board has 12 empty cells at the start; with passes in between,
    // twice the cell count generously bounds the turn loop.
    for _ in 0..32 {
        if board.is_terminal() || consecutive_passes == 2 {
            break;
        }

        let mv = if to_move == Color::Black {
            black.choose_move(&board)
        } else {
            white.choose_move(&board)
        };

        match mv {
            Some(mv) => {
                assert!(board.apply_move(mv, to_move), "player returned illegal move");
                consecutive_passes = 0;
                plies += 1;
            }
            None => consecutive_passes += 1,
        }
        to_move = to_move.opponent();
    }

    assert!(
        board.is_terminal() || consecutive_passes == 2,
        "game failed to finish"
    );
    assert!(plies <= 12, "more discs placed than empty cells existed");
}

#[test]
fn random_player_is_deterministic_under_a_fixed_seed() {
    let board = Board::new(8).unwrap();

    let a = RandomPlayer::new(Color::Black, Some(21)).choose_move(&board);
    let b = RandomPlayer::new(Color::Black, Some(21)).choose_move(&board);

    assert!(a.is_some());
    assert_eq!(a, b);
}

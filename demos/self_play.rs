//! Self-play demo: MCTS against a random player
//!
//! This example drives a full game on the console. The MCTS search runs on
//! a worker thread; progress reports and the chosen move come back over
//! channels, so the driving thread stays free while the engine thinks.
//!
//! Run with:
//!
//! ```bash
//! RUST_LOG=debug cargo run --example self_play
//! ```

use std::sync::mpsc;
use std::thread;

use othello_mcts::{Board, Color, Coord, MctsConfig, MctsPlayer, Player, RandomPlayer};

/// Runs one search on a worker thread, draining progress reports as they
/// arrive, and returns the engine and its chosen move.
fn think_in_background(mut engine: MctsPlayer, board: &Board) -> (MctsPlayer, Option<Coord>) {
    let (progress_tx, progress_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let snapshot = board.clone();

    thread::spawn(move || {
        let mv = engine.choose_move_with_progress(&snapshot, |done, total| {
            // Dropped receivers just mean nobody is watching anymore
            let _ = progress_tx.send((done, total));
        });
        let _ = result_tx.send((engine, mv));
    });

    let mut last_percent = 0;
    for (done, total) in progress_rx {
        let percent = done * 100 / total;
        if percent >= last_percent + 25 {
            println!("  thinking... {}%", percent);
            last_percent = percent;
        }
    }

    result_rx.recv().expect("search thread panicked")
}

fn main() -> othello_mcts::Result<()> {
    env_logger::init();

    println!("Othello: MCTS (X) vs random (O)");
    println!("===============================");
    println!();

    let mut board = Board::new(8)?;

    let config = MctsConfig::default()
        .with_iterations(2_000)
        .with_exploration_constant(1.4)
        .with_seed(17)
        .with_tree_reuse(true);
    let mut engine = MctsPlayer::new(Color::Black, config)?;
    let mut opponent = RandomPlayer::new(Color::White, Some(23));

    let mut to_move = Color::Black;
    let mut consecutive_passes = 0;

    while !board.is_terminal() && consecutive_passes < 2 {
        println!("{}", board);

        let mv = if to_move == engine.color() {
            let (returned, mv) = think_in_background(engine, &board);
            engine = returned;
            mv
        } else {
            opponent.choose_move(&board)
        };

        match mv {
            Some(mv) => {
                let applied = board.apply_move(mv, to_move);
                assert!(applied, "player returned an illegal move");
                println!("{} plays {}", to_move, mv);
                consecutive_passes = 0;
            }
            None => {
                println!("{} passes", to_move);
                consecutive_passes += 1;
            }
        }

        // Keep the engine's retained tree in step with the game
        engine.notify_move(mv);
        to_move = to_move.opponent();
    }

    println!("{}", board);
    let (black, white) = board.score();
    println!("Final score: X {} - O {}", black, white);
    match board.winner() {
        Some(winner) => println!("{} wins", winner),
        None => println!("Tie game"),
    }

    Ok(())
}

//! Property tests for the game state machines

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use game_cave::board::connect_four::{COLS, ROWS};
use game_cave::board::minesweeper::Minesweeper;
use game_cave::board::{ConnectFour, Outcome, TicTacToe};
use game_cave::consts::*;
use game_cave::sim::{ArenaGame, BrickBreaker, GameEvent, GamePhase, Pong, TickInput};
use game_cave::words::NumberGuesser;

/// Runs of `run` equal marks, found by brute force over every window
fn has_run<P: Copy + PartialEq>(cells: &[Option<P>], w: usize, h: usize, run: usize, p: P) -> bool {
    let at = |r: isize, c: isize| -> Option<P> {
        if r < 0 || c < 0 || r >= h as isize || c >= w as isize {
            None
        } else {
            cells[r as usize * w + c as usize]
        }
    };
    for r in 0..h as isize {
        for c in 0..w as isize {
            for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                if (0..run as isize).all(|i| at(r + dr * i, c + dc * i) == Some(p)) {
                    return true;
                }
            }
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pong_ball_stays_in_field(seed in any::<u64>(), inputs in prop::collection::vec(-100.0f32..500.0, 1..400)) {
        let mut pong = Pong::new(seed);
        pong.start();
        let field = Pong::field();
        for offset in inputs.iter().cycle().take(3000) {
            pong.step(&TickInput::paddle(*offset));
            prop_assert!(field.contains_rect(&pong.ball.bounds()), "ball escaped: {:?}", pong.ball);
            if pong.phase.is_over() {
                break;
            }
        }
    }

    #[test]
    fn breakout_ball_stays_in_field(seed in any::<u64>(), jitter in prop::collection::vec(-60.0f32..60.0, 1..200)) {
        let mut game = BrickBreaker::new(seed);
        game.start();
        for j in jitter.iter().cycle().take(4000) {
            let offset = game.ball.center().x - BREAKOUT_PADDLE_WIDTH / 2.0 + j;
            game.step(&TickInput::paddle(offset));
            let ball = game.ball.bounds();
            prop_assert!(ball.left() >= 0.0 && ball.right() <= BREAKOUT_WIDTH);
            prop_assert!(ball.top() >= 0.0);
            if game.phase == GamePhase::Playing {
                prop_assert!(game.ball.pos.y <= BREAKOUT_HEIGHT);
            } else {
                break;
            }
        }
    }

    #[test]
    fn breakout_scores_one_reward_per_brick(seed in any::<u64>(), jitter in prop::collection::vec(-40.0f32..40.0, 1..200)) {
        let mut game = BrickBreaker::new(seed);
        game.start();
        for j in jitter.iter().cycle().take(6000) {
            let before_score = game.score;
            let before_live = game.live_bricks();
            let offset = game.ball.center().x - BREAKOUT_PADDLE_WIDTH / 2.0 + j;
            let events = game.step(&TickInput::paddle(offset));

            let destroyed = events
                .iter()
                .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                .count();
            prop_assert!(destroyed <= 1);
            prop_assert_eq!(before_live - game.live_bricks(), destroyed);
            prop_assert_eq!(game.score - before_score, destroyed as u32 * BRICK_REWARD);
            prop_assert_eq!(game.phase == GamePhase::Won, game.live_bricks() == 0);
            if game.phase.is_over() {
                break;
            }
        }
    }

    #[test]
    fn flood_fill_reveals_zero_region(
        mines in prop::collection::hash_set(0usize..64, 0..12),
        start in 0usize..64,
    ) {
        prop_assume!(!mines.contains(&start));
        let mines: Vec<usize> = mines.into_iter().collect();
        let mut game = Minesweeper::with_mines(8, 8, &mines);
        let opened: HashSet<usize> = game.reveal(start).unwrap().into_iter().collect();

        // Expected: BFS over zero cells from the start, plus their neighbours
        let mut expected = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            if game.cells[cell].adjacent != 0 {
                continue;
            }
            for n in game.neighbors(cell).collect::<Vec<_>>() {
                if !game.cells[n].mine && expected.insert(n) {
                    queue.push_back(n);
                }
            }
        }

        prop_assert_eq!(&opened, &expected);
        prop_assert!(opened.iter().all(|&i| !game.cells[i].mine));
        prop_assert_eq!(game.revealed_count(), expected.len());
    }

    #[test]
    fn tictactoe_outcome_matches_board(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut game = TicTacToe::new();
        for m in moves {
            game.play(m).unwrap();
            let x = has_run(&game.cells, 3, 3, 3, game_cave::board::Mark::X);
            let o = has_run(&game.cells, 3, 3, 3, game_cave::board::Mark::O);
            let full = game.cells.iter().all(Option::is_some);
            match &game.outcome {
                Outcome::Won { player, line } => {
                    prop_assert!(has_run(&game.cells, 3, 3, 3, *player));
                    prop_assert!(line.iter().all(|&i| game.cells[i] == Some(*player)));
                }
                Outcome::Draw => prop_assert!(full && !x && !o),
                Outcome::InProgress => prop_assert!(!full && !x && !o),
            }
        }
    }

    #[test]
    fn connect_four_outcome_matches_board(cols in prop::collection::vec(0usize..COLS, 0..60)) {
        use game_cave::board::Disc;
        let mut game = ConnectFour::new();
        for col in cols {
            game.drop_disc(col).unwrap();
            let one = has_run(&game.cells, COLS, ROWS, 4, Disc::One);
            let two = has_run(&game.cells, COLS, ROWS, 4, Disc::Two);
            let full = game.cells.iter().all(Option::is_some);
            match &game.outcome {
                Outcome::Won { player, line } => {
                    prop_assert_eq!(line.len(), 4);
                    prop_assert!(line.iter().all(|&i| game.cells[i] == Some(*player)));
                    // The game stops at the first four, so only the winner has one
                    prop_assert!(!has_run(&game.cells, COLS, ROWS, 4, player.other()));
                }
                Outcome::Draw => prop_assert!(full && !one && !two),
                Outcome::InProgress => prop_assert!(!full && !one && !two),
            }
        }
    }

    #[test]
    fn non_numeric_guess_changes_nothing(text in "[a-zA-Z .!?]{0,12}", secret in 1i64..=100) {
        let mut game = NumberGuesser::with_secret(secret);
        prop_assert!(game.guess(&text).is_err());
        prop_assert_eq!(game.attempts, 0);
        prop_assert!(!game.won);
    }
}

//! Integration tests for goban-rules
//!
//! These drive the engine only through its public API, the way a board
//! renderer or a random-move opponent would.

use goban_rules::board::{Color, Vertex, format_vertex, parse_vertex};
use goban_rules::error::{BoardError, MoveError};
use goban_rules::game::{GameState, TransitionKind};
use goban_rules::group::{find_group, liberties, region_owner};
use goban_rules::scoring::{Captures, Winner};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Play `(row, col)` placements alternately, starting with the player to move.
fn play_all(game: &mut GameState, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        if let Err(err) = game.play(row, col) {
            panic!("setup move ({row}, {col}) failed: {err}");
        }
    }
}

/// Replay a list of vertices ("D4", "pass") on a fresh game.
fn setup_vertices(size: usize, moves: &[&str]) -> GameState {
    let mut game = GameState::new(size).unwrap();
    for mv in moves {
        match parse_vertex(mv, size).unwrap() {
            Vertex::Pass => {
                game.pass().unwrap();
            }
            Vertex::Play((row, col)) => {
                game.play(row, col).unwrap();
            }
        }
    }
    game
}

fn assert_initial(game: &GameState) {
    assert!(game.board().points().all(|(r, c)| game.get_stone(r, c) == Ok(None)));
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.captures(), Captures::default());
    assert_eq!(game.pass_count(), 0);
    assert!(game.history().is_empty());
    assert!(!game.is_terminal());
    assert_eq!(game.winner(), None);
}

// =============================================================================
// Construction and reset
// =============================================================================

#[test]
fn test_new_game_state() {
    let game = GameState::new(7).unwrap();
    assert_eq!(game.size(), 7);
    assert_initial(&game);
}

#[test]
fn test_default_game_uses_default_size() {
    let game = GameState::default();
    assert_eq!(game.size(), goban_rules::constants::DEFAULT_SIZE);
    assert_initial(&game);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = GameState::new(7).unwrap();
    play_all(&mut game, &[(3, 3), (3, 4), (2, 4), (0, 0), (4, 4), (0, 1), (3, 5)]);
    game.pass().unwrap();
    assert_ne!(game.captures(), Captures::default());

    let t = game.reset();
    assert_eq!(t.kind, TransitionKind::Reset);
    assert_eq!(t.game_over, None);
    assert_initial(&game);
    assert_eq!(game, GameState::new(7).unwrap());
}

#[test]
fn test_reset_after_game_over() {
    let mut game = GameState::new(5).unwrap();
    game.pass().unwrap();
    game.pass().unwrap();
    assert!(game.is_terminal());
    game.reset();
    assert_initial(&game);
    assert!(game.attempt_place(2, 2));
}

// =============================================================================
// Placement and rejection
// =============================================================================

#[test]
fn test_occupied_cell_leaves_board_unchanged() {
    let mut game = GameState::new(7).unwrap();
    play_all(&mut game, &[(3, 3), (2, 2)]);
    let before = game.board().snapshot();
    let state_before = game.clone();

    assert!(!game.attempt_place(3, 3));
    assert!(!game.attempt_place(2, 2));
    assert_eq!(game.board().snapshot(), before);
    assert_eq!(game, state_before);
}

#[test]
fn test_out_of_bounds() {
    let mut game = GameState::new(7).unwrap();
    assert!(!game.attempt_place(7, 7));
    assert!(matches!(game.play(0, 7), Err(MoveError::OutOfBounds { .. })));
    assert_eq!(
        game.get_stone(9, 0),
        Err(BoardError::OutOfBounds {
            row: 9,
            col: 0,
            size: 7
        })
    );
    assert_initial(&game);
}

#[test]
fn test_multi_stone_suicide_rejected() {
    // White walls off (1,1)-(1,2); Black's first stone inside keeps a
    // liberty, the second would leave the pair with none and capture nothing.
    let mut game = GameState::new(4).unwrap();
    play_all(
        &mut game,
        &[(3, 3), (0, 1), (3, 0), (0, 2), (0, 0), (1, 0), (0, 3), (1, 3), (2, 0), (2, 1)],
    );
    // Black's corner stones at (0,0) and (0,3) were captured along the way
    assert_eq!(game.captures().black, 2);

    assert!(game.attempt_place(1, 1));
    play_all(&mut game, &[(2, 2)]);
    assert_eq!(game.current_player(), Color::Black);
    assert!(game.is_suicide((1, 2), Color::Black));
    let before = game.clone();
    assert_eq!(game.play(1, 2), Err(MoveError::Suicide((1, 2))));
    assert_eq!(game, before);
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_scenario_surround_and_capture() {
    // Black (3,3), White (3,4), Black (2,4), then Black closes in while
    // White plays in the corner.
    let mut game = GameState::new(7).unwrap();
    play_all(&mut game, &[(3, 3), (3, 4), (2, 4), (0, 0), (4, 4), (0, 1)]);
    assert_eq!(game.get_stone(3, 4), Ok(Some(Color::White)));
    assert_eq!(game.score().black_score, 0.0);

    let t = game.play(3, 5).unwrap();
    assert_eq!(
        t.kind,
        TransitionKind::Placed {
            point: (3, 5),
            color: Color::Black,
            captured: vec![(3, 4)],
        }
    );
    assert_eq!(game.get_stone(3, 4), Ok(None));
    assert_eq!(game.captures(), Captures { black: 0, white: 1 });
    assert_eq!(game.score().black_score, 7.0);
}

#[test]
fn test_scenario_fill_last_liberty() {
    // White (0,0) has a single liberty at (1,0) once Black holds (0,1)
    let mut game = GameState::new(7).unwrap();
    play_all(&mut game, &[(6, 6), (0, 0), (0, 1), (6, 0)]);
    let white = find_group(game.board(), 0, 0).unwrap();
    assert_eq!(liberties(&white, game.board()).len(), 1);
    let white_stones = game.board().count(Color::White);

    assert!(game.attempt_place(1, 0));
    assert_eq!(game.get_stone(0, 0), Ok(None));
    assert_eq!(game.board().count(Color::White), white_stones - 1);
    let score = game.score();
    assert_eq!(score.black_score, 7.0);
    assert_eq!(score.white_score, 0.0);
    assert_eq!(score.black_area, 3);
    assert_eq!(score.white_area, 1);
}

#[test]
fn test_white_capture_credits_white_score() {
    // Black (0,0) is captured by White
    let mut game = GameState::new(5).unwrap();
    play_all(&mut game, &[(0, 0), (0, 1), (4, 4), (1, 0)]);
    assert_eq!(game.get_stone(0, 0), Ok(None));
    assert_eq!(game.captures(), Captures { black: 1, white: 0 });
    assert_eq!(game.score().white_score, 7.5);
    assert_eq!(game.score().black_score, 0.0);
}

#[test]
fn test_one_move_captures_two_groups() {
    // White (0,0) and White (0,2) both have (0,1) as their last liberty
    let mut game = setup_vertices(
        5,
        &[
            "A4", "A5", // B (1,0), W (0,0)
            "C4", "C5", // B (1,2), W (0,2)
            "D5", "E1", // B (0,3), W far away
        ],
    );
    assert_eq!(game.current_player(), Color::Black);
    let t = game.play(0, 1).unwrap();
    match t.kind {
        TransitionKind::Placed { mut captured, .. } => {
            captured.sort();
            assert_eq!(captured, vec![(0, 0), (0, 2)]);
        }
        other => panic!("unexpected transition {other:?}"),
    }
    assert_eq!(game.captures().white, 2);
    assert_eq!(game.score().black_score, 14.0);
}

#[test]
fn test_large_group_capture() {
    // A three-stone white line on the top edge
    let mut game = GameState::new(5).unwrap();
    play_all(
        &mut game,
        &[(1, 0), (0, 0), (1, 1), (0, 1), (1, 2), (0, 2), (4, 4), (4, 0)],
    );
    assert_eq!(game.board().count(Color::White), 4);
    let t = game.play(0, 3).unwrap();
    match t.kind {
        TransitionKind::Placed { captured, .. } => assert_eq!(captured.len(), 3),
        other => panic!("unexpected transition {other:?}"),
    }
    assert_eq!(game.board().count(Color::White), 1);
    assert_eq!(game.captures().white, 3);
}

// =============================================================================
// Repetition
// =============================================================================

#[test]
fn test_repetition_of_old_position_rejected() {
    // On a 2x2 board White's last move would recreate the position
    // recorded after move two, six placements earlier.
    let mut game = GameState::new(2).unwrap();
    play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 0), (0, 1), (0, 0)]);
    let early = game.history()[1].clone();
    assert_ne!(game.history().last(), Some(&early));

    let before = game.clone();
    assert!(!game.attempt_place(1, 1));
    assert_eq!(game, before);
    assert_eq!(game.play(1, 1), Err(MoveError::Repetition((1, 1))));
    // Other points are still open
    assert!(game.is_legal(1, 0));
    assert!(game.attempt_place(1, 0));
}

// =============================================================================
// Game end and scoring
// =============================================================================

#[test]
fn test_two_passes_end_game_with_winner_from_captures() {
    let mut game = GameState::new(7).unwrap();
    play_all(&mut game, &[(3, 3), (3, 4), (2, 4), (0, 0), (4, 4), (0, 1), (3, 5)]);
    assert!(!game.pass_turn());
    assert!(!game.is_terminal());
    let t = game.pass().unwrap();
    let end = t.game_over.expect("second pass ends the game");
    assert_eq!(end.winner, Winner::Black);
    assert_eq!(end.score.black_score, 7.0);
    assert!(game.is_terminal());
    assert_eq!(game.winner(), Some(Winner::Black));
    assert_eq!(game.final_score(), Some(end));
}

#[test]
fn test_pass_interrupted_by_placement() {
    let mut game = GameState::new(7).unwrap();
    assert!(!game.pass_turn());
    assert!(game.attempt_place(0, 0)); // White
    assert!(!game.pass_turn()); // Black
    assert!(!game.is_terminal());
    assert!(game.pass_turn()); // White
    assert!(game.is_terminal());
    // No captures on either side
    assert_eq!(game.winner(), Some(Winner::Draw));
}

#[test]
fn test_white_wins_on_higher_score() {
    let mut game = GameState::new(5).unwrap();
    play_all(&mut game, &[(0, 0), (0, 1), (4, 4), (1, 0)]);
    game.pass().unwrap();
    game.pass().unwrap();
    assert_eq!(game.winner(), Some(Winner::White));
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = GameState::new(5).unwrap();
    game.pass().unwrap();
    game.pass().unwrap();
    let before = game.clone();
    assert!(!game.attempt_place(2, 2));
    assert_eq!(game.play(2, 2), Err(MoveError::GameOver));
    assert!(game.legal_moves().is_empty());
    assert_eq!(game, before);
}

#[test]
fn test_game_ends_when_opponent_has_no_legal_move() {
    // After Black holds both diagonal corners of a 2x2 board, every empty
    // point is suicide for White.
    let mut game = setup_vertices(2, &["A2", "pass", "B1"]);
    assert!(game.is_terminal());
    assert_eq!(game.winner(), Some(Winner::Draw));
    assert_eq!(game.score().black_area, 2);
}

// =============================================================================
// Analysis helpers
// =============================================================================

#[test]
fn test_legal_moves_excludes_occupied_and_suicide() {
    let mut game = GameState::new(3).unwrap();
    play_all(&mut game, &[(0, 1), (2, 2), (1, 0)]);
    let legal = game.legal_moves();
    assert!(!legal.contains(&(0, 1)));
    assert!(!legal.contains(&(1, 0)));
    assert!(!legal.contains(&(2, 2)));
    // (0,0) is suicide for White
    assert!(!legal.contains(&(0, 0)));
    assert_eq!(legal.len(), 5);
}

#[test]
fn test_region_owner_does_not_affect_score() {
    let game = setup_vertices(3, &["A2", "pass", "B3"]);
    assert_eq!(region_owner(game.board(), 0, 0), Ok(Some(Color::Black)));
    let score = game.score();
    assert_eq!(score.black_area, 2);
    assert_eq!(score.black_score, 0.0);
}

#[test]
fn test_vertex_notation() {
    assert_eq!(format_vertex((6, 0), 7).as_deref(), Ok("A1"));
    assert_eq!(format_vertex((0, 6), 7).as_deref(), Ok("G7"));
    assert_eq!(parse_vertex("d4", 7), Ok(Vertex::Play((3, 3))));
    assert_eq!(
        format_vertex((0, 7), 7),
        Err(BoardError::OutOfBounds {
            row: 0,
            col: 7,
            size: 7
        })
    );
}

#[test]
fn test_random_legal_moves_always_play() {
    // Seeded random opponents picking from `legal_moves`
    for seed in 0..20 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut game = GameState::new(4).unwrap();
        for _ in 0..500 {
            if game.is_terminal() {
                break;
            }
            match rng.choice(game.legal_moves()) {
                Some((row, col)) => {
                    if let Err(err) = game.play(row, col) {
                        panic!("seed {seed}: listed move ({row}, {col}) refused: {err}");
                    }
                }
                None => {
                    game.pass().unwrap();
                }
            }
        }
        assert!(game.board().points().all(|(r, c)| {
            let group = find_group(game.board(), r, c).unwrap();
            group.is_empty() || !liberties(&group, game.board()).is_empty()
        }));
    }
}

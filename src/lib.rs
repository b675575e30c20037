//! Goban-Rules: a rule engine for small-board Go.
//!
//! This crate owns the board of a single game and enforces its rules:
//! which placements are legal, how captures are applied, when the game
//! ends and how it is scored. It does no I/O; diagnostics are emitted as
//! `tracing` events for whatever subscriber the caller installs.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes, scoring multipliers and game-flow limits
//! - [`board`] - Grid storage, adjacency, snapshots and vertex notation
//! - [`group`] - Group discovery and liberty counting
//! - [`game`] - Game state, move legality and execution
//! - [`scoring`] - Score computation and winner determination
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use goban_rules::board::Color;
//! use goban_rules::game::GameState;
//!
//! let mut game = GameState::new(7).unwrap();
//! assert!(game.attempt_place(3, 3));
//! assert!(!game.attempt_place(3, 3)); // occupied
//! assert_eq!(game.get_stone(3, 3).unwrap(), Some(Color::Black));
//!
//! game.pass_turn();
//! let ended = game.pass_turn();
//! assert!(ended && game.is_terminal());
//! println!("winner: {}", game.winner().unwrap());
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod scoring;

//! Board dimensions, scoring multipliers and game-length limits.
//!
//! # Board Size Configuration
//!
//! The default board size is controlled by Cargo features:
//! - `board7x7` (default): 7x7 board
//! - `board9x9`: 9x9 board
//! - `board13x13`: 13x13 board
//!
//! Any size in `MIN_SIZE..=MAX_SIZE` can still be chosen at runtime through
//! [`GameState::new`](crate::game::GameState::new); the feature only picks
//! what `GameState::default()` and the command line use.
//!
//! ```sh
//! cargo build                                              # 7x7 (default)
//! cargo build --no-default-features --features board9x9    # 9x9
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board7x7")]
pub const DEFAULT_SIZE: usize = 7;

#[cfg(feature = "board9x9")]
pub const DEFAULT_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_SIZE: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(any(
    all(feature = "board7x7", feature = "board9x9"),
    all(feature = "board7x7", feature = "board13x13"),
    all(feature = "board9x9", feature = "board13x13"),
))]
compile_error!("Enable only one of the 'board7x7', 'board9x9' and 'board13x13' features");

#[cfg(not(any(feature = "board7x7", feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board7x7', 'board9x9' or 'board13x13'");

/// Smallest accepted board size.
pub const MIN_SIZE: usize = 1;

/// Largest accepted board size. Columns are lettered A..Z without I.
pub const MAX_SIZE: usize = 25;

/// Column letters for vertex notation (no 'I', to avoid confusion with 'J').
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Scoring
// =============================================================================

/// Points Black earns per captured white stone.
pub const BLACK_POINTS_PER_CAPTURE: f64 = 7.0;

/// Points White earns per captured black stone. Larger than Black's to
/// compensate for moving second.
pub const WHITE_POINTS_PER_CAPTURE: f64 = 7.5;

// =============================================================================
// Game Flow
// =============================================================================

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u8 = 2;

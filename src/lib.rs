//! set-engine: rules engine for the card game Set
//!
//! Goals:
//! - The full 81-card lifecycle: generation, shuffle, dealing, matching
//! - A typed per-card state machine (`Hidden`, `InPlay`, `Selected`, `Matched`)
//! - No panics for bad input; unknown cards and over-deals are no-ops
//!
//! ## Quick start
//! ```
//! use set_engine::game::{Game, SelectOutcome};
//!
//! let mut game = Game::with_seed(42);
//! assert_eq!(game.cards_in_play().len(), 12);
//!
//! if let Some([a, b, c]) = game.hint() {
//!     game.select(a);
//!     game.select(b);
//!     assert_eq!(game.select(c), SelectOutcome::Match([a, b, c]));
//! } else {
//!     game.deal(3);
//! }
//! ```
//!
//! Rendering and input handling belong to the caller; drive a session through
//! [`engine::SetEngine`] and read state back with the query methods.

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod game;
pub mod rules;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

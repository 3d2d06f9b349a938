//! Number-calling state machine for a Housie (90-ball bingo) caller.
//!
//! `housie-core` holds everything about the game that is not a terminal
//! concern: the called-number set, the random draw, the secret-mode easter
//! egg, and the controller that sequences them. The crate does no I/O and
//! knows nothing about rendering or timers -- the binary crate drives it
//! from its event loop and executes the side effects (speech, scheduling)
//! that the controller's return values call for.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`CalledSet`] | Membership set over the 1..=90 number pool |
//! | [`SecretState`] | Tap-gesture unlock and pre-planned call order |
//! | [`Game`] | The controller: start / reset / call-next / press routing |
//! | [`Phase`] | Derived lifecycle view (`Idle` / `Active` / `Finished`) |
//!
//! # Quick example
//!
//! ```
//! use housie_core::Game;
//! use rand::SeedableRng;
//!
//! let mut game = Game::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! game.start();
//! let n = game.call_next(&mut rng).unwrap();
//! assert!((1..=90).contains(&n));
//! assert_eq!(game.current(), Some(n));
//! ```

pub mod board;
pub mod draw;
pub mod game;
pub mod secret;

pub use board::{CalledSet, POOL_SIZE};
pub use draw::draw_uncalled;
pub use game::{Game, Phase};
pub use secret::{SecretState, SECRET_KEY};

//! A self-contained 9x9 Go engine.
//!
//! The crate maintains an incremental board representation (connected
//! groups with their liberty sets, suicide and positional-superko
//! enforcement) and selects moves through a layered pipeline: tactical
//! readers for captures and ladders, a shallow minimax over group
//! liberties, and a Monte-Carlo rollout sampler. Six preset bot levels map
//! onto the pipeline's options.
//!
//! ```
//! use goban_engine::{Bot, BotLevel, Color, Move, Pos};
//!
//! let mut bot = Bot::seeded(BotLevel::Easy, Color::White, 1);
//! bot.play(Move::Place(Color::Black, Pos::new(4, 4)));
//! let reply = bot.get_move(); // None would mean pass
//! assert!(reply.is_some());
//! ```

pub mod bot;
pub mod engine;
pub mod game;
pub mod minimax;
pub mod rollout;
pub mod tactics;
pub mod zobrist;

pub use bot::*;
pub use engine::*;
pub use game::*;

//! Host-facing command surface: a registry of bots addressed by opaque
//! handles. The host shell creates bots, relays moves, asks for moves, and
//! tears bots down; everything else stays inside the crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::bot::{Bot, BotLevel};
use crate::game::{Color, Move};

/// Opaque bot identifier handed out to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotHandle(u64);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown bot handle {0:?}")]
    BadHandle(BotHandle),
}

/// In-process bot registry.
#[derive(Default)]
pub struct Engine {
    bots: HashMap<BotHandle, Bot>,
    next_id: u64,
}

impl Engine {
    pub fn new() -> Self {
        Engine::default()
    }

    /// Create a bot with one of the preset levels.
    pub fn new_bot(&mut self, level: BotLevel, color: Color) -> BotHandle {
        self.register(Bot::new(level, color))
    }

    /// Register an existing bot, e.g. one with a custom configuration or a
    /// fixed seed.
    pub fn register(&mut self, bot: Bot) -> BotHandle {
        let handle = BotHandle(self.next_id);
        self.next_id += 1;
        self.bots.insert(handle, bot);
        handle
    }

    /// Relay a move by either side to the bot's board. `Ok(false)` reports
    /// an illegal placement.
    pub fn play(&mut self, handle: BotHandle, mv: Move) -> Result<bool, EngineError> {
        let bot = self
            .bots
            .get_mut(&handle)
            .ok_or(EngineError::BadHandle(handle))?;
        Ok(bot.play(mv))
    }

    /// Ask the bot for a move; `None` is the pass sentinel.
    pub fn get_move(&mut self, handle: BotHandle) -> Result<Option<Move>, EngineError> {
        let bot = self
            .bots
            .get_mut(&handle)
            .ok_or(EngineError::BadHandle(handle))?;
        Ok(bot.get_move())
    }

    pub fn destroy(&mut self, handle: BotHandle) -> Result<(), EngineError> {
        self.bots
            .remove(&handle)
            .map(|_| ())
            .ok_or(EngineError::BadHandle(handle))
    }
}

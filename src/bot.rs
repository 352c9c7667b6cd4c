//! Bot levels, configuration, and the move-selection pipeline.

use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::game::{Board, Color, Move};
use crate::minimax;
use crate::rollout;
use crate::tactics::{self, Reading};

/// The recognized bot options. A zero depth or visit count disables the
/// corresponding reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub mcts_visits: u32,
    pub ladder_depth: u32,
    pub anti_ladder_depth: u32,
    pub minimax_depth: u32,
    pub anti_ladder_nearest: bool,
    pub can_resign: bool,
    pub minimax_ladder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotLevel {
    Joke,
    Easy,
    Medium,
    Hard,
    Crazy,
    Demon,
}

impl BotLevel {
    /// The preset option table.
    pub fn config(self) -> BotConfig {
        match self {
            BotLevel::Joke => BotConfig {
                mcts_visits: 5,
                ..BotConfig::default()
            },
            BotLevel::Easy => BotConfig {
                mcts_visits: 50,
                minimax_depth: 1,
                ladder_depth: 4,
                anti_ladder_depth: 4,
                ..BotConfig::default()
            },
            BotLevel::Medium => BotConfig {
                mcts_visits: 100,
                minimax_depth: 1,
                ladder_depth: 6,
                anti_ladder_depth: 6,
                ..BotConfig::default()
            },
            BotLevel::Hard => BotConfig {
                mcts_visits: 100,
                minimax_depth: 1,
                ladder_depth: 6,
                anti_ladder_depth: 6,
                anti_ladder_nearest: true,
                can_resign: true,
                ..BotConfig::default()
            },
            BotLevel::Crazy => BotConfig {
                mcts_visits: 250,
                minimax_depth: 1,
                ladder_depth: 10,
                anti_ladder_depth: 10,
                anti_ladder_nearest: true,
                minimax_ladder: true,
                can_resign: true,
                ..BotConfig::default()
            },
            BotLevel::Demon => BotConfig {
                mcts_visits: 500,
                minimax_depth: 2,
                ladder_depth: 10,
                anti_ladder_depth: 10,
                anti_ladder_nearest: true,
                can_resign: true,
                ..BotConfig::default()
            },
        }
    }
}

/// A playing agent: its own board, its options, and its randomness.
pub struct Bot {
    color: Color,
    config: BotConfig,
    board: Board,
    rng: StdRng,
}

impl Bot {
    pub fn new(level: BotLevel, color: Color) -> Self {
        Self::from_config(level.config(), color)
    }

    /// Build a bot from a custom option record.
    pub fn from_config(config: BotConfig, color: Color) -> Self {
        Bot {
            color,
            config,
            board: Board::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible games.
    pub fn seeded(level: BotLevel, color: Color, seed: u64) -> Self {
        Self::from_config_seeded(level.config(), color, seed)
    }

    pub fn from_config_seeded(config: BotConfig, color: Color, seed: u64) -> Self {
        Bot {
            color,
            config,
            board: Board::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply a move by either side to the bot's board. Resignations are
    /// always accepted; placements may be rejected as illegal.
    pub fn play(&mut self, mv: Move) -> bool {
        match mv {
            Move::Place(color, pos) => self.board.place_stone(color, pos),
            Move::Resign(_) => true,
        }
    }

    /// Select a move for the bot's color. `None` means pass.
    ///
    /// The board is not modified; the host applies the chosen move through
    /// [`Bot::play`]. Readers run in fixed priority order and the first one
    /// with something to say decides.
    pub fn get_move(&mut self) -> Option<Move> {
        // 1. Take any capture on offer.
        let captures = tactics::find_capture_moves(&self.board, self.color);
        if let Some(&pos) = captures.choose(&mut self.rng) {
            return Some(Move::Place(self.color, pos));
        }

        // 2. Save own groups in atari, or concede that they are lost.
        match tactics::find_anti_capture_moves(&self.board, self.color, self.config.can_resign) {
            Reading::Resign => return Some(Move::Resign(self.color)),
            Reading::Moves(moves) => {
                if let Some(&pos) = moves.choose(&mut self.rng) {
                    return Some(Move::Place(self.color, pos));
                }
            }
        }

        // 3. Start a working ladder.
        if let Some(pos) =
            tactics::find_ladder_move(&self.board, self.color, self.config.ladder_depth)
        {
            return Some(Move::Place(self.color, pos));
        }

        // 4. Step out of the opponent's ladder.
        match tactics::find_anti_ladder_moves(&self.board, self.color, &self.config) {
            Reading::Resign => return Some(Move::Resign(self.color)),
            Reading::Moves(moves) => {
                if let Some(&pos) = moves.choose(&mut self.rng) {
                    return Some(Move::Place(self.color, pos));
                }
            }
        }

        // 5. Shallow minimax.
        if self.config.minimax_depth > 0 {
            let moves = minimax::find_minimax_moves(&self.board, self.color, &self.config);
            if let Some(&pos) = moves.choose(&mut self.rng) {
                return Some(Move::Place(self.color, pos));
            }
            if self.config.can_resign {
                return Some(Move::Resign(self.color));
            }
        }

        // 6. Monte-Carlo rollouts.
        if self.config.mcts_visits > 0 {
            if let Some(pos) =
                rollout::find_rollout_move(&self.board, self.color, &self.config, &mut self.rng)
            {
                return Some(Move::Place(self.color, pos));
            }
        }

        None
    }
}

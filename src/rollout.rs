//! Monte-Carlo rollout sampling.
//!
//! Each candidate move is scored by playing a number of random games from
//! the position with the candidate already placed, then comparing win/loss
//! ratios.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::bot::BotConfig;
use crate::game::{Board, Color, Pos, BOARD_SIZE};
use crate::tactics::{self, Reading};

/// Playouts stop after this many placements; a game that drags this long
/// counts as having no winner.
const MAX_PLAYOUT_LEN: usize = BOARD_SIZE * BOARD_SIZE * 4;

/// Pick the candidate with the best win/loss ratio over `mcts_visits`
/// random games each. `None` when no candidate survives filtering.
pub fn find_rollout_move(
    board: &Board,
    color: Color,
    config: &BotConfig,
    rng: &mut StdRng,
) -> Option<Pos> {
    let candidates = board.sensible_moves(color);
    if candidates.is_empty() {
        return None;
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best = Vec::new();
    for &pos in &candidates {
        let mut wins = 0u32;
        let mut losses = 0u32;
        for _ in 0..config.mcts_visits {
            match play_random_game(board, color, pos, rng) {
                Some(winner) if winner == color => wins += 1,
                Some(_) => losses += 1,
                None => {}
            }
        }
        // Draw-free ratio; a zero-loss record divides by 0.1 instead.
        let score = f64::from(wins) / if losses == 0 { 0.1 } else { f64::from(losses) };
        if score > best_score {
            best_score = score;
            best.clear();
        }
        if score == best_score {
            best.push(pos);
        }
    }
    best.choose(rng).copied()
}

/// Play one random game with `first` already placed for `color`.
///
/// Turn order: a side whose opponent stands in atari has won (it would
/// simply capture); a side in atari itself escapes if it can and loses if
/// it cannot; otherwise it plays a uniformly random legal non-eye point
/// from the board's current empty set. A turn that finds no such point
/// ends the game with no winner.
pub fn play_random_game(
    board: &Board,
    color: Color,
    first: Pos,
    rng: &mut StdRng,
) -> Option<Color> {
    let mut game = board.clone();
    if !game.place_stone(color, first) {
        return None;
    }
    let mut to_move = color.opponent();

    for _ in 0..MAX_PLAYOUT_LEN {
        if game.is_in_atari(to_move.opponent()) {
            return Some(to_move);
        }

        let mut chosen = None;
        if game.is_in_atari(to_move) {
            match tactics::find_anti_capture_moves(&game, to_move, false) {
                Reading::Moves(moves) if !moves.is_empty() => chosen = Some(moves[0]),
                _ => return Some(to_move.opponent()),
            }
        }

        if chosen.is_none() {
            // Sample this turn's empty set without replacement, so cells
            // freed by captures come back into play.
            let mut pool = game.empty_points();
            while !pool.is_empty() {
                let i = rng.random_range(0..pool.len());
                let pos = pool.swap_remove(i);
                if !game.is_point_an_eye(pos, to_move) && game.is_valid_move(pos, to_move) {
                    chosen = Some(pos);
                    break;
                }
            }
        }

        let Some(pos) = chosen else {
            return None;
        };
        game.place_stone(to_move, pos);
        to_move = to_move.opponent();
    }
    None
}

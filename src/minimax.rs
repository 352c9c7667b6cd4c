//! Depth-limited minimax over group liberties.
//!
//! The friendly side maximizes, the enemy minimizes. Forced wins and
//! losses carry the sentinel values +/-1000 and prune the search.

use crate::bot::BotConfig;
use crate::game::{Board, Color, Pos};
use crate::tactics;

pub const WIN: i32 = 1000;
pub const LOSS: i32 = -1000;

/// All moves for `color` that achieve the best minimax value.
///
/// Branching is restricted to legal, non-eye moves that do not leave the
/// mover's own side in atari; when that pool is empty, so is the result,
/// and the driver decides between resigning and the rollout sampler.
pub fn find_minimax_moves(board: &Board, color: Color, config: &BotConfig) -> Vec<Pos> {
    let mut best = None;
    let mut moves = Vec::new();
    for pos in steady_moves(board, color) {
        let value = score_move(board, pos, color, 1, config);
        match best {
            Some(b) if value < b => {}
            Some(b) if value == b => moves.push(pos),
            _ => {
                best = Some(value);
                moves.clear();
                moves.push(pos);
            }
        }
    }
    moves
}

/// Sensible moves that do not put the mover's own side in atari.
fn steady_moves(board: &Board, color: Color) -> Vec<Pos> {
    board
        .sensible_moves(color)
        .into_iter()
        .filter(|&pos| {
            let mut probe = board.clone();
            probe.place_stone(color, pos) && !probe.is_in_atari(color)
        })
        .collect()
}

/// Value of `color` playing `pos` on `board`, from `color`'s perspective.
/// `depth` counts the friendly plies spent so far.
fn score_move(board: &Board, pos: Pos, color: Color, depth: u32, config: &BotConfig) -> i32 {
    let enemy = color.opponent();
    let mut after = board.clone();
    if !after.place_stone(color, pos) {
        return LOSS;
    }

    if after.is_in_atari(color) {
        return LOSS;
    }
    if config.minimax_ladder && tactics::ladder_threat(&after, enemy, config.ladder_depth) {
        return LOSS;
    }

    // Enemy replies: forced rescues while in atari, otherwise anything
    // sensible.
    let mut replies = Vec::new();
    let mut ataris = 0;
    for group in after.groups() {
        if group.color != enemy || !group.is_in_atari() {
            continue;
        }
        ataris += 1;
        let Some(esc) = group.liberties.first() else {
            continue;
        };
        if after.is_move_self_capture(esc, enemy) {
            return WIN;
        }
        replies.push(esc);
    }
    if ataris > 1 {
        // More than one group in atari cannot all be saved.
        return WIN;
    }
    if ataris == 0 {
        replies = after.sensible_moves(enemy);
    }

    let mut worst = WIN;
    for reply in replies {
        let mut answered = after.clone();
        if !answered.place_stone(enemy, reply) {
            continue;
        }

        let value = if answered.is_in_atari(enemy) {
            WIN
        } else if config.minimax_ladder
            && tactics::ladder_threat(&answered, color, config.ladder_depth)
        {
            WIN
        } else if depth >= config.minimax_depth {
            evaluate(&answered, color)
        } else {
            match continuation_value(&answered, color, depth, config) {
                Some(value) => value,
                // No continuation at all: this reply decides nothing.
                None => continue,
            }
        };

        worst = worst.min(value);
        if worst == LOSS {
            break;
        }
    }
    worst
}

/// Best value among the friendly continuations one ply deeper.
fn continuation_value(board: &Board, color: Color, depth: u32, config: &BotConfig) -> Option<i32> {
    let mut candidates = Vec::new();
    let mut ataris = 0;
    for group in board.groups() {
        if group.color != color || !group.is_in_atari() {
            continue;
        }
        ataris += 1;
        let Some(esc) = group.liberties.first() else {
            continue;
        };
        if board.is_move_self_capture(esc, color) {
            return Some(LOSS);
        }
        candidates.push(esc);
    }
    if ataris > 1 {
        return Some(LOSS);
    }
    if ataris == 0 {
        candidates = steady_moves(board, color);
    }
    if candidates.is_empty() {
        return None;
    }

    let mut best = None;
    for pos in candidates {
        let value = score_move(board, pos, color, depth + 1, config);
        best = Some(best.map_or(value, |b: i32| b.max(value)));
        if value == WIN {
            break;
        }
    }
    best
}

/// Leaf evaluation: liberties of the weakest friendly group minus liberties
/// of the weakest enemy group. A side with no groups counts zero.
fn evaluate(board: &Board, color: Color) -> i32 {
    let weakest = |side: Color| {
        board
            .groups()
            .filter(|g| g.color == side)
            .map(|g| g.num_liberties() as i32)
            .min()
            .unwrap_or(0)
    };
    weakest(color) - weakest(color.opponent())
}

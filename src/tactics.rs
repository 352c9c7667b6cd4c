//! Tactical move readers: capture, anti-capture, ladder, anti-ladder.
//!
//! Every reader works on a copy of the position and never mutates the
//! caller's board. Output is total: a reader that has nothing to say
//! returns an empty move list.

use crate::bot::BotConfig;
use crate::game::{Board, Color, Pos, BOARD_SIZE};

/// Outcome of a tactical reader: candidate moves (possibly none) or the
/// judgment that the position is lost. `Resign` is only produced when the
/// bot is allowed to resign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    Moves(Vec<Pos>),
    Resign,
}

impl Reading {
    pub fn is_resign(&self) -> bool {
        matches!(self, Reading::Resign)
    }
}

/// Points that capture an enemy group outright: the sole liberty of every
/// enemy group in atari, ko permitting.
pub fn find_capture_moves(board: &Board, color: Color) -> Vec<Pos> {
    let mut moves = Vec::new();
    for group in board.groups() {
        if group.color == color || !group.is_in_atari() {
            continue;
        }
        let Some(target) = group.liberties.first() else {
            continue;
        };
        if board.is_valid_move(target, color) && !moves.contains(&target) {
            moves.push(target);
        }
    }
    moves
}

/// Escape moves for every friendly group in atari.
///
/// With `can_resign` set the reader gives up instead when a group cannot be
/// saved: its escape point is illegal, or playing it leaves the side in
/// atari anyway.
pub fn find_anti_capture_moves(board: &Board, color: Color, can_resign: bool) -> Reading {
    let mut moves: Vec<Pos> = Vec::new();
    for group in board.groups() {
        if group.color != color || !group.is_in_atari() {
            continue;
        }
        let Some(esc) = group.liberties.first() else {
            continue;
        };
        if board.is_move_self_capture(esc, color) || !board.is_valid_move(esc, color) {
            if can_resign {
                return Reading::Resign;
            }
            continue;
        }
        if can_resign {
            let mut probe = board.clone();
            probe.place_stone(color, esc);
            if probe.is_in_atari(color) {
                return Reading::Resign;
            }
        }
        if !moves.contains(&esc) {
            moves.push(esc);
        }
    }
    Reading::Moves(moves)
}

/// Whether `attacker` has a working ladder: an opposing group is in atari
/// already, or a two-liberty group can be chased into capture within
/// `depth_limit` atari moves.
pub fn ladder_threat(board: &Board, attacker: Color, depth_limit: u32) -> bool {
    depth_limit > 0 && ladder_works(board, attacker, 1, depth_limit)
}

fn ladder_works(board: &Board, attacker: Color, depth: u32, limit: u32) -> bool {
    if depth > limit {
        return false;
    }
    let hunted = attacker.opponent();
    if board.is_in_atari(hunted) {
        return true;
    }
    for group in board.groups() {
        if group.color != hunted || group.num_liberties() != 2 {
            continue;
        }
        let Some(anchor) = group.stones.first() else {
            continue;
        };
        for &atari in group.liberties.iter() {
            if chase_succeeds(board, attacker, anchor, atari, depth, limit) {
                return true;
            }
        }
    }
    false
}

/// One ladder step: fill `atari`, let the hunted group run to its forced
/// liberty, and read on.
fn chase_succeeds(
    board: &Board,
    attacker: Color,
    anchor: Pos,
    atari: Pos,
    depth: u32,
    limit: u32,
) -> bool {
    if !board.is_valid_move(atari, attacker) {
        return false;
    }
    let mut chase = board.clone();
    chase.place_stone(attacker, atari);
    // A chasing stone that goes into atari itself gets captured instead.
    if chase.is_in_atari(attacker) {
        return false;
    }
    let Some(target) = chase.group_at(anchor) else {
        return false;
    };
    // A capture elsewhere may have refunded liberties; this chase is refuted.
    if !target.is_in_atari() {
        return false;
    }
    let Some(esc) = target.liberties.first() else {
        return false;
    };
    if !chase.place_stone(attacker.opponent(), esc) {
        // The forced escape is illegal; the group is dead where it stands.
        return true;
    }
    ladder_works(&chase, attacker, depth + 1, limit)
}

/// First move of a working ladder for `color`, if any.
pub fn find_ladder_move(board: &Board, color: Color, depth_limit: u32) -> Option<Pos> {
    if depth_limit == 0 {
        return None;
    }
    let hunted = color.opponent();
    for group in board.groups() {
        if group.color != hunted || group.num_liberties() != 2 {
            continue;
        }
        let Some(anchor) = group.stones.first() else {
            continue;
        };
        for &atari in group.liberties.iter() {
            if chase_succeeds(board, color, anchor, atari, 1, depth_limit) {
                return Some(atari);
            }
        }
    }
    None
}

/// Moves that defuse an opposing ladder.
///
/// Returns no moves when no ladder threatens. Otherwise every legal move
/// that leaves the side out of atari and kills the ladder qualifies; with
/// `anti_ladder_nearest` the set narrows to moves touching a friendly
/// stone, falling back to the full set when that empties it. A threat with
/// no answer is a lost position.
pub fn find_anti_ladder_moves(board: &Board, color: Color, config: &BotConfig) -> Reading {
    let depth = config.anti_ladder_depth;
    if depth == 0 || !ladder_threat(board, color.opponent(), depth) {
        return Reading::Moves(Vec::new());
    }

    let mut escapes = Vec::new();
    for row in 0..BOARD_SIZE as i32 {
        for col in 0..BOARD_SIZE as i32 {
            let pos = Pos::new(row, col);
            if !board.is_valid_move(pos, color) {
                continue;
            }
            let mut probe = board.clone();
            probe.place_stone(color, pos);
            if probe.is_in_atari(color) {
                continue;
            }
            if ladder_threat(&probe, color.opponent(), depth) {
                continue;
            }
            escapes.push(pos);
        }
    }

    if config.anti_ladder_nearest {
        let near: Vec<Pos> = escapes
            .iter()
            .copied()
            .filter(|pos| {
                pos.neighbors()
                    .iter()
                    .any(|n| board.stone_at(*n) == Some(color))
            })
            .collect();
        if !near.is_empty() {
            escapes = near;
        }
    }

    if escapes.is_empty() && config.can_resign {
        return Reading::Resign;
    }
    Reading::Moves(escapes)
}

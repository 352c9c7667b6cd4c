//! Zobrist hashing for whole-board configurations.
//!
//! A board configuration hashes to the XOR of one 64-bit code per stone.
//! Placements and captures update the hash incrementally, which is what
//! makes the superko check cheap.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

use crate::game::{Color, Pos, BOARD_SIZE};

const COLORS: usize = 2;

// Fixed seed: hashes must agree across every board in a process and
// across runs, since game histories are compared by hash alone.
const TABLE_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct Zobrist {
    table: [[[u64; COLORS]; BOARD_SIZE]; BOARD_SIZE],
}

impl Zobrist {
    fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut table = [[[0u64; COLORS]; BOARD_SIZE]; BOARD_SIZE];
        for row in table.iter_mut() {
            for cell in row.iter_mut() {
                for code in cell.iter_mut() {
                    *code = rng.random::<u64>();
                }
            }
        }

        Zobrist { table }
    }

    /// Code for a stone of `color` at `pos`. The position must be on the grid.
    pub fn stone(&self, color: Color, pos: Pos) -> u64 {
        self.table[pos.row as usize][pos.col as usize][color.index()]
    }
}

/// The process-wide table, built on first use.
pub fn zobrist() -> &'static Zobrist {
    static TABLE: OnceLock<Zobrist> = OnceLock::new();
    TABLE.get_or_init(|| Zobrist::new(TABLE_SEED))
}

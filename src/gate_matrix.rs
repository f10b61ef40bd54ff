// SPDX-License-Identifier: Apache-2.0

//! Column/history state of one packed matrix pair under optimization.

use std::fmt;

use crate::share_table::SHARE;

/// One packed column: the low 8 bits contribute to target matrix A, the
/// high 8 bits to target matrix B. Packing lets a single shared
/// sub-expression pay off in both targets at once.
pub type Column = u16;

/// Number of columns in an input matrix pair.
pub const BASE_COLUMNS: usize = 8;

/// Hard capacity of the column storage. Every combine strips at least two
/// bits from the at most 128 set bits of the 8 packed columns, so no
/// combine sequence can add more than 63 columns; the capacity covers that
/// structural worst case. Runtime, not capacity, is the practical limit:
/// the search is exponential and only a handful of added columns beyond
/// the base 8 stay tractable.
pub const MAX_COLUMNS: usize = 128;

/// Index pair recording which two columns were combined to produce a later
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinePair {
    pub i: usize,
    pub j: usize,
}

impl fmt::Display for CombinePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.i, self.j)
    }
}

/// Saved pre-combine column values, consumed by [`GateMatrix::undo`].
#[derive(Debug, Clone, Copy)]
pub struct CombineUndo {
    i: usize,
    j: usize,
    col_i: Column,
    col_j: Column,
}

#[derive(Clone)]
pub struct GateMatrix {
    /// Columns `0..n`; slots beyond `n` are scratch.
    pub cols: [Column; MAX_COLUMNS],
    /// Combine history; entry `k` produced column `BASE_COLUMNS + k`.
    pub pairs: [CombinePair; MAX_COLUMNS - BASE_COLUMNS],
    /// Current column count, `BASE_COLUMNS..=MAX_COLUMNS`.
    pub n: usize,
    /// XOR gates still required to realize both targets from `cols[0..n]`.
    pub gates: i32,
}

impl GateMatrix {
    /// Builds the initial state from the 8 packed columns; the gate counter
    /// starts at the baseline cost of realizing every output bit without
    /// any sharing.
    pub fn from_packed_columns(base: [Column; BASE_COLUMNS]) -> Self {
        let mut cols = [0; MAX_COLUMNS];
        cols[..BASE_COLUMNS].copy_from_slice(&base);
        let savings_sum: i32 = base.iter().map(|&c| SHARE.savings(c)).sum();
        GateMatrix {
            cols,
            pairs: [CombinePair { i: 0, j: 0 }; MAX_COLUMNS - BASE_COLUMNS],
            n: BASE_COLUMNS,
            gates: savings_sum - BASE_COLUMNS as i32,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.cols[..self.n]
    }

    pub fn history(&self) -> &[CombinePair] {
        &self.pairs[..self.n - BASE_COLUMNS]
    }

    /// The most recently recorded pair, or `[0,0]` when no column has been
    /// added yet.
    pub fn last_pair(&self) -> CombinePair {
        if self.n == BASE_COLUMNS {
            CombinePair { i: 0, j: 0 }
        } else {
            self.pairs[self.n - BASE_COLUMNS - 1]
        }
    }

    /// Factors the shared bits of columns `i` and `j` into a new column:
    /// appends `cols[i] & cols[j]` at index `n`, clears those bits from
    /// both sources, records the pair and credits the savings against the
    /// gate counter. Returns the saved source values for [`Self::undo`].
    pub fn combine(&mut self, i: usize, j: usize) -> CombineUndo {
        assert!(
            i < j && j < self.n,
            "combine({}, {}) out of range for n = {}",
            i,
            j,
            self.n
        );
        assert!(
            self.n < MAX_COLUMNS,
            "column capacity {} exhausted",
            MAX_COLUMNS
        );
        let undo = CombineUndo {
            i,
            j,
            col_i: self.cols[i],
            col_j: self.cols[j],
        };
        let c = self.cols[i] & self.cols[j];
        self.cols[i] ^= c;
        self.cols[j] ^= c;
        self.cols[self.n] = c;
        self.pairs[self.n - BASE_COLUMNS] = CombinePair { i, j };
        self.n += 1;
        self.gates -= SHARE.savings(c);
        undo
    }

    /// Restores the two source columns mutated by the matching `combine`.
    /// `n`, `gates` and history entries beyond the caller's scope stay as
    /// the caller last set them; the search engine owns that bookkeeping
    /// across backtracking.
    pub fn undo(&mut self, undo: CombineUndo) {
        self.cols[undo.i] = undo.col_i;
        self.cols[undo.j] = undo.col_j;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GateMatrix {
        GateMatrix::from_packed_columns([
            0x0107, 0x0106, 0x0204, 0x0303, 0x0401, 0x0502, 0x0603, 0x0701,
        ])
    }

    #[test]
    fn test_baseline_counts_every_output_row() {
        let m = sample();
        // One gate per set bit beyond the first, in each of the 16 output
        // rows of the two packed targets.
        let per_row: i32 = m
            .columns()
            .iter()
            .map(|&c| c.count_ones() as i32)
            .sum::<i32>()
            - 16;
        assert_eq!(m.gates, per_row);
    }

    #[test]
    fn test_combine_updates_columns_history_and_gates() {
        let mut m = sample();
        let baseline = m.gates;
        m.combine(0, 1);
        assert_eq!(m.n, BASE_COLUMNS + 1);
        assert_eq!(m.cols[BASE_COLUMNS], 0x0106);
        assert_eq!(m.cols[0], 0x0001);
        assert_eq!(m.cols[1], 0x0000);
        assert_eq!(m.history(), &[CombinePair { i: 0, j: 1 }]);
        assert_eq!(m.gates, baseline - 2);
        assert_eq!(m.last_pair(), CombinePair { i: 0, j: 1 });
    }

    #[test]
    fn test_undo_restores_source_columns() {
        let mut m = sample();
        let before = m.cols;
        let undo = m.combine(2, 3);
        m.undo(undo);
        assert_eq!(m.cols[2], before[2]);
        assert_eq!(m.cols[3], before[3]);
    }

    #[test]
    fn test_last_pair_is_zero_at_base() {
        assert_eq!(sample().last_pair(), CombinePair { i: 0, j: 0 });
    }

    #[test]
    #[should_panic(expected = "column capacity")]
    fn test_combine_past_capacity_panics() {
        let mut m = sample();
        for _ in 0..=(MAX_COLUMNS - BASE_COLUMNS) {
            m.combine(0, 1);
        }
    }
}

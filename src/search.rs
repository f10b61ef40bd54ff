// SPDX-License-Identifier: Apache-2.0

//! Branch-and-bound search for a minimum-gate combine sequence.
//!
//! The search recurses over a single exclusively-borrowed [`GateMatrix`],
//! trying every column pair whose overlap saves at least one gate. Each
//! candidate is applied in place, explored, and undone; only the two
//! mutated source columns need restoring, since the entry frame's column
//! count and gate counter are re-established before the next candidate and
//! deeper history entries are scratch until a branch is adopted. The
//! enumeration is exact: it visits every reachable column set except those
//! skipped by the reordered-duplicate rule, which discards states already
//! produced under an earlier combine order.

use crate::gate_matrix::{CombinePair, GateMatrix, BASE_COLUMNS, MAX_COLUMNS};
use crate::share_table::SHARE;

pub struct SearchOptions {
    /// Skip candidate pairs that re-derive a column set already reached via
    /// a different combine order. Disabling this only slows the search
    /// down; the minimum found is unchanged.
    pub prune_reordered: bool,
    /// Optional cap on visited search nodes. When the cap trips, the best
    /// candidate found so far is kept and the outcome is marked non-exact.
    pub max_nodes: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            prune_reordered: true,
            max_nodes: None,
        }
    }
}

#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    budget_expired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// False when the node budget expired before the space was exhausted;
    /// the state then holds the best candidate seen, not a proven minimum.
    pub exact: bool,
}

/// Minimizes `state` in place. On return `state.gates` is the least
/// achievable XOR count (exact unless the node budget tripped) and
/// `state.history()` is a combine sequence realizing it.
pub fn minimize(state: &mut GateMatrix, options: &SearchOptions) -> SearchOutcome {
    let mut stats = SearchStats::default();
    descend(state, options, &mut stats);
    log::info!(
        "search visited {} nodes: ncols = {}, gates = {}{}",
        stats.nodes,
        state.n,
        state.gates,
        if stats.budget_expired {
            " (node budget expired)"
        } else {
            ""
        },
    );
    SearchOutcome {
        exact: !stats.budget_expired,
    }
}

fn descend(state: &mut GateMatrix, options: &SearchOptions, stats: &mut SearchStats) {
    stats.nodes += 1;
    if let Some(limit) = options.max_nodes {
        if stats.nodes > limit {
            stats.budget_expired = true;
            return;
        }
    }

    let entry_n = state.n;
    let entry_gates = state.gates;
    let last = state.last_pair();

    // Best completion seen across the candidate branches, as (column count,
    // gates, history suffix beyond this call's entry depth).
    let mut best: Option<(usize, i32)> = None;
    let mut best_suffix = [CombinePair { i: 0, j: 0 }; MAX_COLUMNS - BASE_COLUMNS];

    'candidates: for i in 0..entry_n - 1 {
        for j in i + 1..entry_n {
            let overlap = state.cols[i] & state.cols[j];
            if SHARE.savings(overlap) == 0 {
                continue;
            }
            // A pair strictly before the previous combine's first index,
            // touching neither of its columns nor the newest column, was
            // already enumerated ahead of that combine; the resulting
            // column set would repeat.
            if options.prune_reordered
                && i < last.i
                && j != last.i
                && j != last.j
                && j < entry_n - 1
            {
                continue;
            }
            state.n = entry_n;
            state.gates = entry_gates;
            let undo = state.combine(i, j);
            descend(state, options, stats);
            state.undo(undo);
            if best.map_or(true, |(_, g)| state.gates < g) {
                let len = state.n - entry_n;
                best_suffix[..len].copy_from_slice(
                    &state.pairs[entry_n - BASE_COLUMNS..state.n - BASE_COLUMNS],
                );
                best = Some((state.n, state.gates));
            }
            if stats.budget_expired {
                break 'candidates;
            }
        }
    }

    if let Some((n, gates)) = best {
        let len = n - entry_n;
        state.pairs[entry_n - BASE_COLUMNS..n - BASE_COLUMNS]
            .copy_from_slice(&best_suffix[..len]);
        state.n = n;
        state.gates = gates;
    }
    // With no viable candidate the entry state is already final: stopping
    // here is a valid terminal outcome.
}

// SPDX-License-Identifier: Apache-2.0

use crate::gate_matrix::{CombinePair, GateMatrix, BASE_COLUMNS};

/// Replays a finalized combine history against a fresh copy of the
/// original columns, materializing the concrete column values the search
/// settled on. Pure function of its inputs; `original` must still be in
/// its 8-column input form.
pub fn reconstruct(original: &GateMatrix, history: &[CombinePair]) -> GateMatrix {
    assert_eq!(
        original.n, BASE_COLUMNS,
        "reconstruction starts from the unoptimized {}-column state",
        BASE_COLUMNS
    );
    let mut out = original.clone();
    for (k, pair) in history.iter().enumerate() {
        assert!(
            pair.i < pair.j && pair.j < BASE_COLUMNS + k,
            "history entry {} ({}) references a column that does not exist yet",
            k,
            pair
        );
        out.combine(pair.i, pair.j);
    }
    out
}

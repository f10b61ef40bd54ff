// SPDX-License-Identifier: Apache-2.0

use crate::gate_matrix::{GateMatrix, BASE_COLUMNS};

/// Formats one matrix pair for inspection: the low-byte hex row, the
/// high-byte hex row, the combine pairs when any exist, and the
/// column/gate counts. The unoptimized 8-column form fits both tagged rows
/// on a single line.
pub fn format_block(m: &GateMatrix, tag_lo: &str, tag_hi: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>6}: ", tag_lo));
    for &col in m.columns() {
        out.push_str(&format!("{:02X}", col & 0xFF));
    }
    if m.n > BASE_COLUMNS {
        out.push('\n');
    }
    out.push_str(&format!("{:>6}: ", tag_hi));
    for &col in m.columns() {
        out.push_str(&format!("{:02X}", (col >> 8) & 0xFF));
    }
    if m.n > BASE_COLUMNS {
        out.push('\n');
    }
    for pair in m.history() {
        out.push_str(&format!(" {}, ", pair));
    }
    out.push_str(&format!("\n ncols = {:2}, gates = {:2}", m.n, m.gates));
    out
}

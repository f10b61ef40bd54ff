// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::record::BasisRecord;
use crate::reconstruct::reconstruct;
use crate::report::format_block;
use crate::search::{minimize, SearchOptions};

/// Row tags for the two pairs, unoptimized and optimized forms.
const PAIR_TAGS: [(&str, &str); 2] = [("A2X", "S2X"), ("X2S", "X2A")];
const PAIR_TAGS_OPT: [(&str, &str); 2] = [("A2Xb", "S2Xb"), ("X2Sb", "X2Ab")];

pub struct Options {
    /// Suppress the per-record text report.
    pub quiet: bool,
    pub search: SearchOptions,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PairSummary {
    pub low_matrix: String,
    pub high_matrix: String,
    pub gates_before: i32,
    pub ncols_after: usize,
    pub gates_after: i32,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RecordSummary {
    pub id: u64,
    pub pairs: Vec<PairSummary>,
    pub total_gates: i32,
    /// False when a node budget stopped a pair's search early; the gate
    /// counts are then an upper bound, not a proven minimum.
    pub exact: bool,
}

/// Optimizes both packed pairs of one record, printing the text report
/// unless suppressed, and returns the per-record summary.
pub fn process_record(record: &BasisRecord, options: &Options) -> RecordSummary {
    if !options.quiet {
        println!("\nbasis #{:3}:", record.id);
    }
    let mut pairs = Vec::with_capacity(2);
    let mut total_gates = 0;
    let mut exact = true;
    for (k, original) in record.packed_pairs().into_iter().enumerate() {
        let (tag_lo, tag_hi) = PAIR_TAGS[k];
        log::debug!(
            "record {} pair ({},{}): baseline gates = {}",
            record.id,
            tag_lo,
            tag_hi,
            original.gates
        );
        if !options.quiet {
            println!("{}", format_block(&original, tag_lo, tag_hi));
        }

        let mut working = original.clone();
        let outcome = minimize(&mut working, &options.search);
        exact &= outcome.exact;

        let optimized = reconstruct(&original, working.history());
        assert_eq!(
            optimized.gates, working.gates,
            "replayed history must reproduce the searched gate count"
        );

        if !options.quiet {
            let (tag_lo_opt, tag_hi_opt) = PAIR_TAGS_OPT[k];
            println!("{}", format_block(&optimized, tag_lo_opt, tag_hi_opt));
        }

        total_gates += optimized.gates;
        pairs.push(PairSummary {
            low_matrix: tag_lo.to_string(),
            high_matrix: tag_hi.to_string(),
            gates_before: original.gates,
            ncols_after: optimized.n,
            gates_after: optimized.gates,
        });
    }
    if !options.quiet {
        println!(
            "***bestgates {:3} = {:5}   ={:5} +{:5}",
            record.id, total_gates, pairs[0].gates_after, pairs[1].gates_after
        );
    }
    RecordSummary {
        id: record.id,
        pairs,
        total_gates,
        exact,
    }
}

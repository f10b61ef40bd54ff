// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for tests and benches.

use crate::record::{parse_record, BasisRecord};

/// Record whose optimization results are known: the (A2X,S2X) pair goes
/// from 42 to 20 gates and the (X2S,X2A) pair from 38 to 18.
pub const REFERENCE_RECORD_LINE: &str =
    "98F3F2480981A9FF64786E8C6829DE60582D9E0BDC0403248C7905EB12045153  4";

/// Record with a smaller search space, for places where runtime matters
/// more than coverage.
pub const QUICK_RECORD_LINE: &str =
    "F1261450CA86D330C502A8BF412B3590352582D03974323C65C4836C69953380    0";

pub fn reference_record() -> BasisRecord {
    parse_record(REFERENCE_RECORD_LINE).expect("reference record line parses")
}

pub fn quick_record() -> BasisRecord {
    parse_record(QUICK_RECORD_LINE).expect("quick record line parses")
}

// SPDX-License-Identifier: Apache-2.0

pub mod gate_matrix;
pub mod process_record;
pub mod reconstruct;
pub mod record;
pub mod report;
pub mod search;
pub mod share_table;
pub mod test_utils;

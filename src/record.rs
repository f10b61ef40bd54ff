// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::gate_matrix::{Column, GateMatrix, BASE_COLUMNS};

/// Matrices carried by one record line, in input order.
pub const MATRIX_COUNT: usize = 4;

const HEX_CHARS: usize = MATRIX_COUNT * BASE_COLUMNS * 2;

#[derive(Debug)]
pub struct RecordParseError {
    msg: String,
}

impl RecordParseError {
    fn new(msg: String) -> Self {
        Self { msg }
    }
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordParseError: {}", self.msg)
    }
}

impl std::error::Error for RecordParseError {}

/// One decoded input record: the four 8-byte matrices in input order
/// (A2X, X2A, X2S, S2X) and the record identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasisRecord {
    pub mats: [[u8; BASE_COLUMNS]; MATRIX_COUNT],
    pub id: u64,
}

/// Decodes a record line: 64 hex digits (16 per matrix) followed by a
/// decimal identifier.
pub fn parse_record(line: &str) -> Result<BasisRecord, RecordParseError> {
    let line = line.trim_end();
    if !line.is_ascii() {
        return Err(RecordParseError::new(
            "record line contains non-ASCII characters".to_string(),
        ));
    }
    if line.len() < HEX_CHARS {
        return Err(RecordParseError::new(format!(
            "record line has {} characters, need at least {}",
            line.len(),
            HEX_CHARS
        )));
    }
    let (hex, rest) = line.split_at(HEX_CHARS);
    let mut bytes = [0u8; HEX_CHARS / 2];
    for (k, b) in bytes.iter_mut().enumerate() {
        let digits = &hex[2 * k..2 * k + 2];
        *b = u8::from_str_radix(digits, 16).map_err(|_| {
            RecordParseError::new(format!(
                "invalid hex digits {:?} at column {}",
                digits,
                2 * k
            ))
        })?;
    }
    let id_text = rest.trim();
    if id_text.is_empty() {
        return Err(RecordParseError::new(
            "missing record identifier after the matrices".to_string(),
        ));
    }
    let id = id_text
        .parse::<u64>()
        .map_err(|_| RecordParseError::new(format!("invalid record identifier {:?}", id_text)))?;
    let mut mats = [[0u8; BASE_COLUMNS]; MATRIX_COUNT];
    for (m, mat) in mats.iter_mut().enumerate() {
        mat.copy_from_slice(&bytes[BASE_COLUMNS * m..BASE_COLUMNS * (m + 1)]);
    }
    Ok(BasisRecord { mats, id })
}

impl BasisRecord {
    /// Packs the four matrices into the two independently optimized pairs:
    /// the input-side pair (A2X low, S2X high) and the output-side pair
    /// (X2S low, X2A high).
    pub fn packed_pairs(&self) -> [GateMatrix; 2] {
        let pack = |lo: &[u8; BASE_COLUMNS], hi: &[u8; BASE_COLUMNS]| {
            let mut cols = [0 as Column; BASE_COLUMNS];
            for (k, col) in cols.iter_mut().enumerate() {
                *col = lo[k] as Column | ((hi[k] as Column) << 8);
            }
            GateMatrix::from_packed_columns(cols)
        };
        [
            pack(&self.mats[0], &self.mats[3]),
            pack(&self.mats[2], &self.mats[1]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::REFERENCE_RECORD_LINE as LINE;

    #[test]
    fn test_parse_record_splits_matrices_and_id() {
        let record = parse_record(LINE).unwrap();
        assert_eq!(record.id, 4);
        assert_eq!(record.mats[0][0], 0x98);
        assert_eq!(record.mats[1][0], 0x64);
        assert_eq!(record.mats[2][0], 0x58);
        assert_eq!(record.mats[3][7], 0x53);
    }

    #[test]
    fn test_packed_pairs_interleave_the_right_matrices() {
        let record = parse_record(LINE).unwrap();
        let [input_pair, output_pair] = record.packed_pairs();
        // A2X in the low byte, S2X in the high byte.
        assert_eq!(input_pair.cols[0], 0x8C98);
        // X2S in the low byte, X2A in the high byte.
        assert_eq!(output_pair.cols[0], 0x6458);
    }

    #[test]
    fn test_short_line_is_rejected() {
        let err = parse_record("98F3").unwrap_err();
        assert!(err.to_string().contains("need at least 64"));
    }

    #[test]
    fn test_non_hex_digits_are_rejected() {
        let mut line = LINE.to_string();
        line.replace_range(10..12, "ZZ");
        let err = parse_record(&line).unwrap_err();
        assert!(err.to_string().contains("invalid hex digits"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = parse_record(&LINE[..64]).unwrap_err();
        assert!(err.to_string().contains("missing record identifier"));
    }

    #[test]
    fn test_bad_id_is_rejected() {
        let line = format!("{} four", &LINE[..64]);
        let err = parse_record(&line).unwrap_err();
        assert!(err.to_string().contains("invalid record identifier"));
    }
}

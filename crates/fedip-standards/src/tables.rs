//! Two-column CSV tables (key → value).

use std::path::Path;

use crate::error::{Result, StandardsError};

/// Column headers of a two-column table.
#[derive(Debug, Clone, Copy)]
pub struct PairColumns {
    pub key: &'static str,
    pub value: &'static str,
}

pub const BASE_CATEGORY_COLUMNS: PairColumns = PairColumns {
    key: "Category",
    value: "Professional Body",
};

pub const FEDIP_LEVEL_COLUMNS: PairColumns = PairColumns {
    key: "Role",
    value: "FEDIP Level",
};

pub const FAMILY_BODY_COLUMNS: PairColumns = PairColumns {
    key: "Family",
    value: "Professional Body",
};

pub const SUB_BUCKET_BODY_COLUMNS: PairColumns = PairColumns {
    key: "Sub-bucket",
    value: "Professional Body",
};

pub const ROLE_BODY_COLUMNS: PairColumns = PairColumns {
    key: "Role",
    value: "Professional Body",
};

/// Reads `(key, value)` rows in file order.
///
/// Both cells are trimmed and must be non-empty. A leading byte-order mark
/// on the header row is ignored.
pub fn parse_pairs_csv(
    bytes: &[u8],
    path: &Path,
    columns: PairColumns,
) -> Result<Vec<(String, String)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, e.to_string()))?
        .clone();

    let position = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim_matches('\u{feff}').trim() == name)
            .ok_or_else(|| StandardsError::csv(path, format!("missing column '{name}'")))
    };
    let key_idx = position(columns.key)?;
    let value_idx = position(columns.value)?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| StandardsError::csv(path, e.to_string()))?;
        let cell = |idx: usize, name: &str| -> Result<String> {
            record
                .get(idx)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToString::to_string)
                .ok_or_else(|| {
                    StandardsError::csv(path, format!("row {}: missing {name}", line + 2))
                })
        };
        rows.push((cell(key_idx, columns.key)?, cell(value_idx, columns.value)?));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_order() {
        let csv = "\u{feff}Category,\"Professional Body\"\n\
                   \"Student\",\"BCS\"\n\
                   \" Clinician \",\"FCI\"\n";
        let rows = parse_pairs_csv(csv.as_bytes(), Path::new("t.csv"), BASE_CATEGORY_COLUMNS)
            .expect("parse csv");
        assert_eq!(
            rows,
            vec![
                ("Student".to_string(), "BCS".to_string()),
                ("Clinician".to_string(), "FCI".to_string()),
            ]
        );
    }

    #[test]
    fn empty_cells_are_rejected() {
        let csv = "Role,FEDIP Level\nData Analyst,\n";
        let err = parse_pairs_csv(csv.as_bytes(), Path::new("t.csv"), FEDIP_LEVEL_COLUMNS)
            .unwrap_err();
        assert!(err.to_string().contains("row 2: missing FEDIP Level"));
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Role,Body\nData Analyst,BCS\n";
        let err = parse_pairs_csv(csv.as_bytes(), Path::new("t.csv"), ROLE_BODY_COLUMNS)
            .unwrap_err();
        assert!(err.to_string().contains("missing column 'Professional Body'"));
    }
}

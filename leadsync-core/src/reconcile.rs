//! Key-set reconciliation between two tables.
//!
//! Given a reference table and a candidate table sharing a key column, emit
//! the candidate rows whose key is absent from the reference set. Pure,
//! in-memory — reading and writing the tables is the caller's concern.

use std::collections::HashSet;

use crate::error::TableError;
use crate::table::Table;

/// Deduplicated set of trimmed, non-empty key values from `table`'s
/// `key_column`.
///
/// Empty key values are never added — a blank key is neither "present" nor
/// "missing".
pub fn key_set(table: &Table, key_column: &str) -> Result<HashSet<String>, TableError> {
    let idx = table.column_index(key_column)?;
    let mut keys = HashSet::new();
    for row in &table.rows {
        let key = row.get(idx).map(|v| v.trim()).unwrap_or("");
        if !key.is_empty() {
            keys.insert(key.to_string());
        }
    }
    Ok(keys)
}

/// Candidate rows whose trimmed key is non-empty and not present in the
/// reference table's key set.
///
/// Output preserves the candidate's column order and first-seen row order.
/// Duplicate candidate keys are each evaluated independently — every row of a
/// missing key appears in the output.
pub fn missing_rows(
    reference: &Table,
    candidate: &Table,
    key_column: &str,
) -> Result<Table, TableError> {
    let existing = key_set(reference, key_column)?;
    let idx = candidate.column_index(key_column)?;

    let rows = candidate
        .rows
        .iter()
        .filter(|row| {
            let key = row.get(idx).map(|v| v.trim()).unwrap_or("");
            !key.is_empty() && !existing.contains(key)
        })
        .cloned()
        .collect();

    Ok(Table {
        headers: candidate.headers.clone(),
        rows,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn rows_absent_from_reference_are_emitted() {
        // Scenario A: reference {75001, 75002}, candidate [75001, 75003].
        let reference = table(&["ZipCode"], &[&["75001"], &["75002"]]);
        let candidate = table(
            &["ZipCode", "City"],
            &[&["75001", "X"], &["75003", "Y"]],
        );
        let missing = missing_rows(&reference, &candidate, "ZipCode").expect("reconcile");
        assert_eq!(missing.headers, vec!["ZipCode", "City"]);
        assert_eq!(missing.rows, vec![vec!["75003".to_string(), "Y".to_string()]]);
    }

    #[test]
    fn empty_reference_emits_everything() {
        // Scenario B: empty reference file — everything is missing.
        let reference = table(&["ZipCode"], &[]);
        let candidate = table(&["ZipCode", "City"], &[&["75001", "X"]]);
        let missing = missing_rows(&reference, &candidate, "ZipCode").expect("reconcile");
        assert_eq!(missing.rows.len(), 1);
    }

    #[test]
    fn duplicate_candidate_keys_all_appear() {
        let reference = table(&["ZipCode"], &[&["75001"]]);
        let candidate = table(
            &["ZipCode", "City"],
            &[&["75003", "A"], &["75003", "B"], &["75001", "C"]],
        );
        let missing = missing_rows(&reference, &candidate, "ZipCode").expect("reconcile");
        assert_eq!(missing.rows.len(), 2);
        assert_eq!(missing.rows[0][1], "A");
        assert_eq!(missing.rows[1][1], "B");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_candidate_keys_are_excluded(#[case] blank: &str) {
        let reference = table(&["ZipCode"], &[]);
        let candidate = table(&["ZipCode"], &[&[blank], &["75001"]]);
        let missing = missing_rows(&reference, &candidate, "ZipCode").expect("reconcile");
        assert_eq!(missing.rows, vec![vec!["75001".to_string()]]);
    }

    #[test]
    fn blank_reference_keys_never_enter_the_set() {
        let reference = table(&["ZipCode"], &[&[""], &["  "]]);
        let keys = key_set(&reference, "ZipCode").expect("key set");
        assert!(keys.is_empty());
    }

    #[test]
    fn reference_duplicates_collapse() {
        let reference = table(&["ZipCode"], &[&["75001"], &["75001"], &["75002 "]]);
        let keys = key_set(&reference, "ZipCode").expect("key set");
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("75002"), "keys are trimmed before insertion");
    }

    #[test]
    fn candidate_keys_are_trimmed_before_lookup() {
        let reference = table(&["ZipCode"], &[&["75001"]]);
        let candidate = table(&["ZipCode"], &[&[" 75001 "], &[" 75003"]]);
        let missing = missing_rows(&reference, &candidate, "ZipCode").expect("reconcile");
        assert_eq!(missing.rows, vec![vec![" 75003".to_string()]]);
    }

    #[test]
    fn missing_key_column_in_reference_fails() {
        let reference = table(&["Zip"], &[]);
        let candidate = table(&["ZipCode"], &[]);
        let err = missing_rows(&reference, &candidate, "ZipCode").unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { .. }));
    }

    #[test]
    fn missing_key_column_in_candidate_fails() {
        let reference = table(&["ZipCode"], &[]);
        let candidate = table(&["Zip"], &[]);
        let err = missing_rows(&reference, &candidate, "ZipCode").unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { .. }));
    }
}

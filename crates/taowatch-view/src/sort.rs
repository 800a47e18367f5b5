//! Stable sorting of subnet records.

use std::cmp::Ordering;

use taowatch_core::{Metric, SortDirection, SortKey, SubnetRecord};

/// Compare two raw field values the way the table does.
///
/// When both operands coerce numerically the comparison is numeric;
/// otherwise both compare as text. The dispatch is per pair, not per
/// column: upstream data mixes numbers and numeric strings within a single
/// column, and ordering must agree regardless of which encoding a given
/// record happens to use.
pub fn compare_values(a: &Metric, b: &Metric) -> Ordering {
    match (a.as_decimal(), b.as_decimal()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.text().cmp(&b.text()),
    }
}

/// Indices of `records` ordered by the active column and direction.
///
/// `records` itself is untouched. The sort is stable: ties keep their
/// fetched order under both directions, which requires descending to
/// invert the pairwise comparison rather than reverse the ascending
/// result.
pub fn sorted_indices(
    records: &[SubnetRecord],
    key: SortKey,
    direction: SortDirection,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..records.len()).collect();
    indices.sort_by(|&a, &b| {
        let ord = compare_values(records[a].field(key), records[b].field(key));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    indices
}

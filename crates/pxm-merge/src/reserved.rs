//! Reserved-range filtering.
//!
//! Once a retired number is recovered, the range that reserved it must go.
//! A range is removed only when its *start* is a recovered number; the end
//! bound and every other range pass through untouched.

use std::collections::BTreeSet;

use pxm_types::ReservedRange;

/// Keep every range from `ranges`, in order, whose start is not in `skip`.
pub fn adjust_reserved_range(ranges: &[ReservedRange], skip: &BTreeSet<i32>) -> Vec<ReservedRange> {
    ranges
        .iter()
        .filter(|r| !skip.contains(&r.start))
        .copied()
        .collect()
}

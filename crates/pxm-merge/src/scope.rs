//! Reconciliation and reservation bookkeeping for any numbered scope.
//!
//! Messages and enums both go through here; the scope's own reservations
//! decide which shadow members are eligible and which ranges survive.

use std::collections::BTreeSet;

use pxm_types::{Member, NumberedScope, ReservedRange};

use crate::context::MergeContext;
use crate::reconcile::{reconcile, Reconciliation};
use crate::reserved::adjust_reserved_range;

/// Reconcile the members of `active` and `shadow` accepted by `select`,
/// recording renames and drops under `path`.
pub(crate) fn reconcile_scope<S, F>(
    cx: &mut MergeContext<'_>,
    path: &str,
    active: &S,
    shadow: &S,
    select: F,
) -> Reconciliation
where
    S: NumberedScope,
    F: Fn(&Member) -> bool,
{
    let pick = |scope: &S| -> Vec<Member> {
        scope.members().iter().filter(|m| select(*m)).cloned().collect()
    };
    let r = reconcile(&pick(active), &pick(shadow), active.reserved_names(), cx.config);
    cx.note_reconciliation(path, &r);
    r
}

/// Active's reserved ranges, minus those whose start was `recovered`.
pub(crate) fn surviving_ranges<S: NumberedScope>(
    active: &S,
    recovered: &BTreeSet<i32>,
) -> Vec<ReservedRange> {
    adjust_reserved_range(active.reserved_ranges(), recovered)
}

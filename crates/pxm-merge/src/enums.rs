//! Enum-level merge.

use tracing::trace;

use pxm_types::EnumDescriptor;

use crate::context::MergeContext;
use crate::scope::{reconcile_scope, surviving_ranges};

/// Merge one enum. Values are reconciled; reservations come from active,
/// minus any range whose start was recovered.
pub(crate) fn merge_enum(
    cx: &mut MergeContext<'_>,
    active: &EnumDescriptor,
    shadow: &EnumDescriptor,
    path: &str,
) -> EnumDescriptor {
    trace!(scope = path, "merging enum");
    let values = reconcile_scope(cx, path, active, shadow, |_| true);

    let recovered = values.recovered_numbers();
    for placed in values.placed.iter().filter(|p| p.origin.is_recovered()) {
        cx.note_recovered(path, &placed.member);
    }

    EnumDescriptor {
        name: active.name.clone(),
        values: values.into_members(),
        reserved_names: active.reserved_names.clone(),
        reserved_ranges: surviving_ranges(active, &recovered),
    }
}

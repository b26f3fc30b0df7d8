//! Group (oneof) index remapping between shadow and active.
//!
//! Group membership is positional, and the two trees need not declare the
//! same groups in the same order. A shadow index is translated by resolving
//! its declaration name and finding that name in active.

use pxm_types::GroupDecl;

/// Translate a shadow group index into the active declaration list.
///
/// Returns `None` if the index is out of range in shadow or if active has no
/// declaration with the same name. A member whose group cannot be remapped
/// must be dropped: a deleted group is never resurrected.
pub fn remap_group(
    shadow_index: usize,
    shadow_groups: &[GroupDecl],
    active_groups: &[GroupDecl],
) -> Option<usize> {
    let name = &shadow_groups.get(shadow_index)?.name;
    active_groups.iter().position(|g| &g.name == name)
}

//! Message-level merge.
//!
//! Plain members and grouped members are reconciled separately. Recovered
//! grouped members have their group index translated from shadow's
//! declarations to active's; those whose group no longer exists are dropped.
//! The target lists plain members first, then grouped members.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use pxm_types::{Member, MessageDescriptor};

use crate::context::MergeContext;
use crate::error::MergeResult;
use crate::group::remap_group;
use crate::reconcile::Placed;
use crate::report::DropReason;
use crate::scope::{reconcile_scope, surviving_ranges};
use crate::tree::{merge_enums, merge_messages};

/// Merge one message and, recursively, its nested children.
pub(crate) fn merge_message(
    cx: &mut MergeContext<'_>,
    active: &MessageDescriptor,
    shadow: &MessageDescriptor,
    path: &str,
    depth: usize,
) -> MergeResult<MessageDescriptor> {
    cx.enter(path, depth)?;
    trace!(scope = path, depth, "merging message");

    let plain = reconcile_scope(cx, path, active, shadow, |m| !m.is_grouped());
    let grouped = reconcile_scope(cx, path, active, shadow, Member::is_grouped);

    let mut recovered = BTreeSet::new();
    let mut members = Vec::with_capacity(plain.placed.len() + grouped.placed.len());

    for Placed { member, origin } in plain.placed {
        if origin.is_recovered() {
            cx.note_recovered(path, &member);
            recovered.insert(member.number);
        }
        members.push(member);
    }

    for Placed { mut member, origin } in grouped.placed {
        if origin.is_recovered() {
            // Phase-2 output still indexes shadow's declarations.
            let remapped = member
                .group_index
                .and_then(|idx| remap_group(idx, &shadow.groups, &active.groups));
            let Some(idx) = remapped else {
                debug!(
                    scope = path,
                    number = member.number,
                    name = %member.name,
                    "group not in active, dropping"
                );
                cx.note_dropped(path, &member, DropReason::GroupNotRemappable);
                continue;
            };
            member.group_index = Some(idx);
            cx.note_recovered(path, &member);
            recovered.insert(member.number);
        }
        members.push(member);
    }

    let nested_messages = merge_messages(
        cx,
        &active.nested_messages,
        &shadow.nested_messages,
        path,
        depth,
    )?;
    let nested_enums = merge_enums(cx, &active.nested_enums, &shadow.nested_enums, path);

    Ok(MessageDescriptor {
        name: active.name.clone(),
        members,
        groups: active.groups.clone(),
        reserved_names: active.reserved_names.clone(),
        reserved_ranges: surviving_ranges(active, &recovered),
        nested_messages,
        nested_enums,
    })
}

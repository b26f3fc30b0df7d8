//! Name-paired recursion over children, and the file-level entry point.
//!
//! At every level each active child is paired with the shadow child of the
//! same kind and exact name. Pairs are merged; unpaired active children are
//! kept as-is; unpaired shadow children are copied wholesale after the
//! active ones, restoring messages and enums deleted outright from active.

use pxm_types::{EnumDescriptor, FileDescriptor, MessageDescriptor, NumberedScope};

use crate::context::{child_path, MergeContext};
use crate::enums::merge_enum;
use crate::error::MergeResult;
use crate::message::merge_message;

/// Merge the message children of the scope at `parent`, itself at `depth`.
pub(crate) fn merge_messages(
    cx: &mut MergeContext<'_>,
    active: &[MessageDescriptor],
    shadow: &[MessageDescriptor],
    parent: &str,
    depth: usize,
) -> MergeResult<Vec<MessageDescriptor>> {
    let mut out = Vec::with_capacity(active.len());
    for a in active {
        let merged = match find_named(shadow, &a.name) {
            Some(s) => merge_message(cx, a, s, &child_path(parent, &a.name), depth + 1)?,
            None => a.clone(),
        };
        out.push(merged);
    }
    out.extend(restore_missing(cx, active, shadow, parent));
    Ok(out)
}

/// Merge the enum children of the scope at `parent`.
pub(crate) fn merge_enums(
    cx: &mut MergeContext<'_>,
    active: &[EnumDescriptor],
    shadow: &[EnumDescriptor],
    parent: &str,
) -> Vec<EnumDescriptor> {
    let mut out = Vec::with_capacity(active.len());
    for a in active {
        let merged = match find_named(shadow, &a.name) {
            Some(s) => merge_enum(cx, a, s, &child_path(parent, &a.name)),
            None => a.clone(),
        };
        out.push(merged);
    }
    out.extend(restore_missing(cx, active, shadow, parent));
    out
}

/// Merge two files. Metadata comes from active verbatim.
pub(crate) fn merge_file(
    cx: &mut MergeContext<'_>,
    active: &FileDescriptor,
    shadow: &FileDescriptor,
) -> MergeResult<FileDescriptor> {
    let root = active.package.as_deref().unwrap_or_default();
    let messages = merge_messages(cx, &active.messages, &shadow.messages, root, 0)?;
    let enums = merge_enums(cx, &active.enums, &shadow.enums, root);

    Ok(FileDescriptor {
        name: active.name.clone(),
        package: active.package.clone(),
        syntax: active.syntax.clone(),
        options: active.options.clone(),
        messages,
        enums,
    })
}

fn find_named<'a, T: NumberedScope>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.scope_name() == name)
}

/// Shadow children with no same-named active sibling, copied unmodified.
fn restore_missing<T: NumberedScope + Clone>(
    cx: &mut MergeContext<'_>,
    active: &[T],
    shadow: &[T],
    parent: &str,
) -> Vec<T> {
    let mut restored = Vec::new();
    for s in shadow {
        if find_named(active, s.scope_name()).is_none() {
            cx.note_restored_child(parent, s.scope_name(), s.kind());
            restored.push(s.clone());
        }
    }
    restored
}

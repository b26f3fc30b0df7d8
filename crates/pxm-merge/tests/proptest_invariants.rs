//! Property-based invariants for the merge engine.
//!
//! 1. Reserved-range filtering yields a subsequence with no skipped starts.
//! 2. Reconciled output never repeats a number.
//! 3. Every recovered member is a verbatim shadow member, prefix intact.
//! 4. Merging against an empty shadow returns active's content: unchanged
//!    for enums and whole files, plain-members-first for a paired message.

use std::collections::BTreeSet;

use proptest::prelude::*;
use pxm_merge::{adjust_reserved_range, reconcile, MergeConfig, Merger};
use pxm_types::{EnumDescriptor, FileDescriptor, Member, MessageDescriptor, ReservedRange};

// ── Helpers ─────────────────────────────────────────────────────────────

const NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const GROUPS: &[&str] = &["g0", "g1"];

fn range_strategy() -> impl Strategy<Value = ReservedRange> {
    (-5i32..60, -5i32..60).prop_map(|(s, e)| ReservedRange::new(s, e))
}

/// A member list with unique numbers, some names carrying the marker.
fn members_strategy() -> impl Strategy<Value = Vec<Member>> {
    prop::collection::btree_map(0i32..20, (0usize..NAMES.len(), any::<bool>()), 0..10).prop_map(
        |m| {
            m.into_iter()
                .map(|(number, (name, hidden))| {
                    let name = if hidden {
                        format!("hidden_envoy_deprecated_{}", NAMES[name])
                    } else {
                        NAMES[name].to_string()
                    };
                    Member::new(number, name)
                })
                .collect()
        },
    )
}

/// Like [`members_strategy`], with some members placed in a group from
/// [`GROUPS`], interleaved with plain ones.
fn grouped_members_strategy() -> impl Strategy<Value = Vec<Member>> {
    (
        members_strategy(),
        prop::collection::vec(prop::option::of(0usize..GROUPS.len()), 10),
    )
        .prop_map(|(members, groups)| {
            members
                .into_iter()
                .zip(groups)
                .map(|(mut m, g)| {
                    m.group_index = g;
                    m
                })
                .collect()
        })
}

fn reserved_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(NAMES.to_vec(), 0..=NAMES.len())
        .prop_map(|v| v.into_iter().map(String::from).collect())
}

// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_filter_is_subsequence_without_skipped_starts(
        ranges in prop::collection::vec(range_strategy(), 0..12),
        skip in prop::collection::btree_set(-5i32..60, 0..8),
    ) {
        let out = adjust_reserved_range(&ranges, &skip);
        prop_assert!(out.iter().all(|r| !skip.contains(&r.start)));

        // Subsequence: walk `ranges` consuming `out` in order.
        let mut rest = out.iter().peekable();
        for r in &ranges {
            if rest.peek() == Some(&r) {
                rest.next();
            }
        }
        prop_assert!(rest.next().is_none(), "not a subsequence: {:?} of {:?}", out, ranges);
        prop_assert_eq!(
            out.len(),
            ranges.iter().filter(|r| !skip.contains(&r.start)).count()
        );
    }

    #[test]
    fn reconcile_never_repeats_a_number(
        active in members_strategy(),
        shadow in members_strategy(),
        reserved in reserved_strategy(),
    ) {
        let r = reconcile(&active, &shadow, &reserved, &MergeConfig::default());
        let mut seen = BTreeSet::new();
        for p in &r.placed {
            prop_assert!(seen.insert(p.member.number), "duplicate number {}", p.member.number);
        }
    }

    #[test]
    fn recovered_members_are_verbatim_shadow_members(
        active in members_strategy(),
        shadow in members_strategy(),
        reserved in reserved_strategy(),
    ) {
        let r = reconcile(&active, &shadow, &reserved, &MergeConfig::default());
        let active_numbers: BTreeSet<i32> = active.iter().map(|m| m.number).collect();
        for p in r.placed.iter().filter(|p| p.origin.is_recovered()) {
            prop_assert!(shadow.contains(&p.member));
            prop_assert!(p.member.name.starts_with("hidden_envoy_deprecated_"));
            prop_assert!(!active_numbers.contains(&p.member.number));
        }
        // Phase 1 output covers active one-for-one, in order.
        let head: Vec<i32> = r.placed.iter().take(active.len()).map(|p| p.member.number).collect();
        let expected: Vec<i32> = active.iter().map(|m| m.number).collect();
        prop_assert_eq!(head, expected);
    }

    #[test]
    fn empty_shadow_enum_is_identity(
        values in members_strategy(),
        reserved in reserved_strategy(),
        ranges in prop::collection::vec(range_strategy(), 0..6),
    ) {
        let mut e = EnumDescriptor::new("E");
        e.values = values;
        e.reserved_names = reserved;
        e.reserved_ranges = ranges;

        let out = Merger::default().merge_enum(&e, &EnumDescriptor::new("E"));
        prop_assert_eq!(out.merged, e);
        prop_assert!(out.report.is_empty());
    }

    #[test]
    fn empty_shadow_message_only_moves_plain_members_first(
        members in grouped_members_strategy(),
        reserved in reserved_strategy(),
        ranges in prop::collection::vec(range_strategy(), 0..6),
    ) {
        let mut message = MessageDescriptor::new("M");
        for g in GROUPS {
            message = message.with_group(*g);
        }
        message.members = members;
        message.reserved_names = reserved;
        message.reserved_ranges = ranges;

        let out = Merger::default()
            .merge_message(&message, &MessageDescriptor::new("M"))
            .unwrap();
        prop_assert!(out.report.is_empty());

        let (plain, grouped): (Vec<Member>, Vec<Member>) =
            message.members.iter().cloned().partition(|m| !m.is_grouped());
        let mut expected = message.clone();
        expected.members = plain.into_iter().chain(grouped).collect();
        prop_assert_eq!(out.merged, expected);
    }

    #[test]
    fn empty_shadow_file_is_identity(
        members in grouped_members_strategy(),
        values in members_strategy(),
        reserved in reserved_strategy(),
    ) {
        let mut message = MessageDescriptor::new("M");
        for g in GROUPS {
            message = message.with_group(*g);
        }
        message.members = members;
        message.reserved_names = reserved.clone();
        let mut e = EnumDescriptor::new("E");
        e.values = values;
        e.reserved_names = reserved;
        let file = FileDescriptor::new("f.proto").with_message(message).with_enum(e);

        let out = Merger::default()
            .merge_file(&file, &FileDescriptor::default())
            .unwrap();
        prop_assert_eq!(out.merged, file);
        prop_assert!(out.report.is_empty());
    }
}

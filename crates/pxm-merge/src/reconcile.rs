//! The value reconciler: one merge of an ordered, numbered member list.
//!
//! Runs in two phases:
//!
//! 1. **Projection.** Walk active in order. A member whose number also
//!    appears in shadow keeps all of active's attributes but takes shadow's
//!    name; otherwise it is emitted unchanged. Matched shadow numbers are
//!    consumed.
//! 2. **Recovery.** Walk shadow in order, skipping consumed numbers. A member
//!    whose name carries the deprecated marker, and whose stripped name is
//!    reserved in active, is emitted verbatim. Everything else is dropped.
//!
//! Output is all phase-1 emissions followed by all phase-2 emissions. A
//! number is never emitted by both phases.

use std::collections::BTreeSet;

use tracing::debug;

use pxm_types::{is_reserved, Member};

use crate::config::MergeConfig;
use crate::report::DropReason;

/// Which phase produced a reconciled member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Matched a shadow member by number. `renamed_from` holds active's name
    /// when shadow spelled it differently.
    Projected { renamed_from: Option<String> },
    /// Present only in active.
    ActiveOnly,
    /// Restored from shadow in phase 2.
    Recovered,
}

impl Origin {
    /// Returns `true` for phase-2 output.
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered)
    }
}

/// A member placed in the target, tagged with the phase that placed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placed {
    pub member: Member,
    pub origin: Origin,
}

/// The result of [`reconcile`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Target members: phase 1 in active order, then phase 2 in shadow order.
    pub placed: Vec<Placed>,
    /// Shadow members with no recovery path, in shadow order.
    pub dropped: Vec<(Member, DropReason)>,
}

impl Reconciliation {
    /// Numbers restored by phase 2.
    pub fn recovered_numbers(&self) -> BTreeSet<i32> {
        self.placed
            .iter()
            .filter(|p| p.origin.is_recovered())
            .map(|p| p.member.number)
            .collect()
    }

    /// Discard origin tags, keeping the members in order.
    pub fn into_members(self) -> Vec<Member> {
        self.placed.into_iter().map(|p| p.member).collect()
    }
}

/// Merge `active` and `shadow` member lists.
///
/// `reserved_names` are active's reserved identifiers; a shadow member is
/// only recoverable if its un-prefixed name is among them. Duplicate numbers
/// within one input list are not a supported input: the first shadow match
/// wins in phase 1, and phase 2 never emits a number twice.
pub fn reconcile(
    active: &[Member],
    shadow: &[Member],
    reserved_names: &[String],
    config: &MergeConfig,
) -> Reconciliation {
    let mut out = Reconciliation::default();
    let mut consumed = BTreeSet::new();
    let mut matched = BTreeSet::new();

    for a in active {
        match shadow.iter().position(|s| s.number == a.number) {
            Some(idx) => {
                let s = &shadow[idx];
                matched.insert(idx);
                consumed.insert(s.number);
                let renamed_from = (s.name != a.name).then(|| a.name.clone());
                let member = Member {
                    name: s.name.clone(),
                    ..a.clone()
                };
                out.placed.push(Placed {
                    member,
                    origin: Origin::Projected { renamed_from },
                });
            }
            None => out.placed.push(Placed {
                member: a.clone(),
                origin: Origin::ActiveOnly,
            }),
        }
    }

    for (idx, s) in shadow.iter().enumerate() {
        if matched.contains(&idx) {
            continue;
        }
        if consumed.contains(&s.number) {
            debug!(number = s.number, name = %s.name, "shadow number already taken");
            out.dropped.push((s.clone(), DropReason::NumberTaken));
            continue;
        }
        match recovery_verdict(&s.name, reserved_names, config) {
            Ok(original) => {
                debug!(number = s.number, name = %s.name, original, "recovering shadow member");
                consumed.insert(s.number);
                out.placed.push(Placed {
                    member: s.clone(),
                    origin: Origin::Recovered,
                });
            }
            Err(reason) => {
                debug!(number = s.number, name = %s.name, %reason, "dropping shadow member");
                out.dropped.push((s.clone(), reason));
            }
        }
    }

    out
}

/// Decide whether a shadow name may be recovered, yielding its original name.
fn recovery_verdict<'a>(
    name: &'a str,
    reserved_names: &[String],
    config: &MergeConfig,
) -> Result<&'a str, DropReason> {
    let original = config.original_name(name).ok_or(DropReason::MissingMarker)?;
    if is_reserved(reserved_names, original) {
        Ok(original)
    } else {
        Err(DropReason::NotReserved)
    }
}

//! Record of what a merge restored, renamed, and discarded.

use std::fmt;

use serde::Serialize;

use pxm_types::NodeKind;

/// Everything notable that happened during one merge call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Events in the order the merge encountered them.
    pub events: Vec<MergeEvent>,
}

impl MergeReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing was recovered, renamed, or dropped.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn push(&mut self, event: MergeEvent) {
        self.events.push(event);
    }

    /// Number of members restored from shadow.
    pub fn recovered(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MergeEvent::Recovered { .. }))
            .count()
    }

    /// Number of shadow members discarded.
    pub fn dropped(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MergeEvent::Dropped { .. }))
            .count()
    }

    /// Number of members whose active name was replaced by shadow's.
    pub fn renamed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MergeEvent::Renamed { .. }))
            .count()
    }

    /// Number of whole messages or enums copied from shadow.
    pub fn restored_children(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MergeEvent::RestoredChild { .. }))
            .count()
    }
}

/// A single notable merge decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MergeEvent {
    /// Active and shadow agree on a number but not on its name; shadow's
    /// name was kept.
    Renamed {
        scope: String,
        number: i32,
        active_name: String,
        shadow_name: String,
    },
    /// A retired, still-reserved shadow member was restored.
    Recovered {
        scope: String,
        number: i32,
        name: String,
    },
    /// A shadow member had no recovery path.
    Dropped {
        scope: String,
        number: i32,
        name: String,
        reason: DropReason,
    },
    /// A message or enum missing from active was copied from shadow.
    RestoredChild {
        scope: String,
        name: String,
        kind: NodeKind,
    },
}

/// Why a shadow member was not carried into the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// The name lacks the deprecated-marker prefix.
    MissingMarker,
    /// The name, once stripped, is not reserved in active.
    NotReserved,
    /// Another member already occupies the number.
    NumberTaken,
    /// The member's group no longer exists in active.
    GroupNotRemappable,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMarker => write!(f, "missing deprecated marker"),
            Self::NotReserved => write!(f, "name not reserved"),
            Self::NumberTaken => write!(f, "number already taken"),
            Self::GroupNotRemappable => write!(f, "group not present in active"),
        }
    }
}

impl fmt::Display for MergeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renamed {
                scope,
                number,
                active_name,
                shadow_name,
            } => write!(f, "{scope}: #{number} {active_name} -> {shadow_name}"),
            Self::Recovered {
                scope,
                number,
                name,
            } => write!(f, "{scope}: recovered #{number} {name}"),
            Self::Dropped {
                scope,
                number,
                name,
                reason,
            } => write!(f, "{scope}: dropped #{number} {name} ({reason})"),
            Self::RestoredChild { scope, name, kind } => {
                write!(f, "{scope}: restored {kind} {name}")
            }
        }
    }
}

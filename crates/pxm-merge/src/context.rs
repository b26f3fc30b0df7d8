//! Per-call merge state: configuration plus the report being built.

use tracing::debug;

use pxm_types::{Member, NodeKind};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::reconcile::{Origin, Reconciliation};
use crate::report::{DropReason, MergeEvent, MergeReport};

/// State threaded through one top-level merge call. Owned by that call only.
pub(crate) struct MergeContext<'a> {
    pub(crate) config: &'a MergeConfig,
    pub(crate) report: MergeReport,
}

impl<'a> MergeContext<'a> {
    pub(crate) fn new(config: &'a MergeConfig) -> Self {
        Self {
            config,
            report: MergeReport::new(),
        }
    }

    /// Refuse to descend past the configured depth.
    pub(crate) fn enter(&self, path: &str, depth: usize) -> MergeResult<()> {
        if depth > self.config.max_depth {
            return Err(MergeError::DepthExceeded {
                path: path.to_string(),
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    /// Record phase-1 renames and every drop the reconciler made.
    pub(crate) fn note_reconciliation(&mut self, scope: &str, r: &Reconciliation) {
        for placed in &r.placed {
            if let Origin::Projected {
                renamed_from: Some(active_name),
            } = &placed.origin
            {
                self.report.push(MergeEvent::Renamed {
                    scope: scope.to_string(),
                    number: placed.member.number,
                    active_name: active_name.clone(),
                    shadow_name: placed.member.name.clone(),
                });
            }
        }
        for (member, reason) in &r.dropped {
            self.note_dropped(scope, member, *reason);
        }
    }

    pub(crate) fn note_recovered(&mut self, scope: &str, member: &Member) {
        self.report.push(MergeEvent::Recovered {
            scope: scope.to_string(),
            number: member.number,
            name: member.name.clone(),
        });
    }

    pub(crate) fn note_dropped(&mut self, scope: &str, member: &Member, reason: DropReason) {
        self.report.push(MergeEvent::Dropped {
            scope: scope.to_string(),
            number: member.number,
            name: member.name.clone(),
            reason,
        });
    }

    pub(crate) fn note_restored_child(&mut self, scope: &str, name: &str, kind: NodeKind) {
        debug!(scope, name, %kind, "restoring child missing from active");
        self.report.push(MergeEvent::RestoredChild {
            scope: scope.to_string(),
            name: name.to_string(),
            kind,
        });
    }
}

/// Dotted path of a child scope.
pub(crate) fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

//! Public entry points for the active/shadow merge.

use tracing::info;

use pxm_types::{DescriptorNode, EnumDescriptor, FileDescriptor, MessageDescriptor};

use crate::config::MergeConfig;
use crate::context::MergeContext;
use crate::error::{MergeError, MergeResult};
use crate::report::MergeReport;
use crate::{enums, message, tree};

/// A freshly built target tree plus the record of how it was built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutcome<T> {
    pub merged: T,
    pub report: MergeReport,
}

impl<T> MergeOutcome<T> {
    /// Discard the report.
    pub fn into_merged(self) -> T {
        self.merged
    }
}

/// Merges an active tree with its shadow sibling.
///
/// Inputs are never mutated. Each call builds and returns a new target, so a
/// single `Merger` may serve concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge two whole files. File metadata is taken from `active`.
    pub fn merge_file(
        &self,
        active: &FileDescriptor,
        shadow: &FileDescriptor,
    ) -> MergeResult<MergeOutcome<FileDescriptor>> {
        let mut cx = MergeContext::new(&self.config);
        let merged = tree::merge_file(&mut cx, active, shadow)?;
        info!(
            file = %active.name,
            recovered = cx.report.recovered(),
            dropped = cx.report.dropped(),
            restored = cx.report.restored_children(),
            "merged active and shadow"
        );
        Ok(MergeOutcome {
            merged,
            report: cx.report,
        })
    }

    /// Merge a single message tree, treating it as a top-level scope.
    pub fn merge_message(
        &self,
        active: &MessageDescriptor,
        shadow: &MessageDescriptor,
    ) -> MergeResult<MergeOutcome<MessageDescriptor>> {
        let mut cx = MergeContext::new(&self.config);
        let merged = message::merge_message(&mut cx, active, shadow, &active.name, 1)?;
        Ok(MergeOutcome {
            merged,
            report: cx.report,
        })
    }

    /// Merge a single enum. Enums have no children, so this cannot fail.
    pub fn merge_enum(
        &self,
        active: &EnumDescriptor,
        shadow: &EnumDescriptor,
    ) -> MergeOutcome<EnumDescriptor> {
        let mut cx = MergeContext::new(&self.config);
        let merged = enums::merge_enum(&mut cx, active, shadow, &active.name);
        MergeOutcome {
            merged,
            report: cx.report,
        }
    }

    /// Merge two nodes of the same kind.
    ///
    /// Returns [`MergeError::KindMismatch`] when a message is paired with an
    /// enum; that is a caller defect, not a schema-evolution gap.
    pub fn merge_node(
        &self,
        active: &DescriptorNode,
        shadow: &DescriptorNode,
    ) -> MergeResult<MergeOutcome<DescriptorNode>> {
        match (active, shadow) {
            (DescriptorNode::Message(a), DescriptorNode::Message(s)) => {
                let out = self.merge_message(a, s)?;
                Ok(MergeOutcome {
                    merged: out.merged.into(),
                    report: out.report,
                })
            }
            (DescriptorNode::Enum(a), DescriptorNode::Enum(s)) => {
                let out = self.merge_enum(a, s);
                Ok(MergeOutcome {
                    merged: out.merged.into(),
                    report: out.report,
                })
            }
            _ => Err(MergeError::KindMismatch {
                path: active.name().to_string(),
                expected: active.kind(),
                actual: shadow.kind(),
            }),
        }
    }
}

/// Merge two files with the default configuration.
pub fn merge_file(
    active: &FileDescriptor,
    shadow: &FileDescriptor,
) -> MergeResult<MergeOutcome<FileDescriptor>> {
    Merger::default().merge_file(active, shadow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxm_types::{Member, NodeKind};

    #[test]
    fn kind_mismatch_is_an_error() {
        let active: DescriptorNode = MessageDescriptor::new("X").into();
        let shadow: DescriptorNode = EnumDescriptor::new("X").into();
        let err = Merger::default().merge_node(&active, &shadow).unwrap_err();
        assert_eq!(
            err,
            MergeError::KindMismatch {
                path: "X".into(),
                expected: NodeKind::Message,
                actual: NodeKind::Enum,
            }
        );
    }

    #[test]
    fn node_merge_dispatches_on_kind() {
        let active: DescriptorNode = EnumDescriptor::new("E").with_reserved_name("b").into();
        let shadow: DescriptorNode = EnumDescriptor::new("E")
            .with_value(1, "hidden_envoy_deprecated_b")
            .into();
        let out = Merger::default().merge_node(&active, &shadow).unwrap();
        assert_eq!(out.merged.as_enum().unwrap().values.len(), 1);
        assert_eq!(out.report.recovered(), 1);
    }

    #[test]
    fn depth_limit_stops_runaway_nesting() {
        let mut active = MessageDescriptor::new("L3");
        let mut shadow = MessageDescriptor::new("L3");
        for name in ["L2", "L1", "L0"] {
            active = MessageDescriptor::new(name).with_message(active);
            shadow = MessageDescriptor::new(name).with_message(shadow);
        }
        let merger = Merger::new(MergeConfig {
            max_depth: 3,
            ..Default::default()
        });
        let err = merger.merge_message(&active, &shadow).unwrap_err();
        assert_eq!(
            err,
            MergeError::DepthExceeded {
                path: "L0.L1.L2.L3".into(),
                limit: 3
            }
        );

        let roomy = Merger::new(MergeConfig {
            max_depth: 4,
            ..Default::default()
        });
        assert!(roomy.merge_message(&active, &shadow).is_ok());
    }

    #[test]
    fn custom_prefix_flows_through() {
        let merger = Merger::new(MergeConfig::with_prefix("zz_"));
        let active = MessageDescriptor::new("M").with_reserved_name("f");
        let shadow = MessageDescriptor::new("M").with_member(Member::new(2, "zz_f"));
        let out = merger.merge_message(&active, &shadow).unwrap();
        assert_eq!(out.merged.members, vec![Member::new(2, "zz_f")]);
    }

    #[test]
    fn free_function_uses_defaults() {
        let out = merge_file(&FileDescriptor::default(), &FileDescriptor::default()).unwrap();
        assert_eq!(out.into_merged(), FileDescriptor::default());
    }
}

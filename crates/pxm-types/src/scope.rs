//! The capability shared by messages and enums.

use crate::descriptor::{
    DescriptorNode, EnumDescriptor, Member, MessageDescriptor, NodeKind, ReservedRange,
};

/// A named scope holding an ordered list of numbered members and the
/// reservations that retire names and numbers within it.
pub trait NumberedScope {
    fn kind(&self) -> NodeKind;

    fn scope_name(&self) -> &str;

    /// Fields for a message, values for an enum.
    fn members(&self) -> &[Member];

    fn reserved_names(&self) -> &[String];

    fn reserved_ranges(&self) -> &[ReservedRange];

    /// Returns `true` if `name` is formally reserved in this scope.
    fn is_reserved_name(&self, name: &str) -> bool {
        is_reserved(self.reserved_names(), name)
    }
}

/// Returns `true` if `name` appears among `reserved_names`. Exact match.
pub fn is_reserved(reserved_names: &[String], name: &str) -> bool {
    reserved_names.iter().any(|n| n == name)
}

impl NumberedScope for MessageDescriptor {
    fn kind(&self) -> NodeKind {
        NodeKind::Message
    }

    fn scope_name(&self) -> &str {
        &self.name
    }

    fn members(&self) -> &[Member] {
        &self.members
    }

    fn reserved_names(&self) -> &[String] {
        &self.reserved_names
    }

    fn reserved_ranges(&self) -> &[ReservedRange] {
        &self.reserved_ranges
    }
}

impl NumberedScope for EnumDescriptor {
    fn kind(&self) -> NodeKind {
        NodeKind::Enum
    }

    fn scope_name(&self) -> &str {
        &self.name
    }

    fn members(&self) -> &[Member] {
        &self.values
    }

    fn reserved_names(&self) -> &[String] {
        &self.reserved_names
    }

    fn reserved_ranges(&self) -> &[ReservedRange] {
        &self.reserved_ranges
    }
}

impl NumberedScope for DescriptorNode {
    fn kind(&self) -> NodeKind {
        DescriptorNode::kind(self)
    }

    fn scope_name(&self) -> &str {
        self.name()
    }

    fn members(&self) -> &[Member] {
        match self {
            Self::Message(m) => m.members(),
            Self::Enum(e) => e.members(),
        }
    }

    fn reserved_names(&self) -> &[String] {
        match self {
            Self::Message(m) => NumberedScope::reserved_names(m),
            Self::Enum(e) => NumberedScope::reserved_names(e),
        }
    }

    fn reserved_ranges(&self) -> &[ReservedRange] {
        match self {
            Self::Message(m) => NumberedScope::reserved_ranges(m),
            Self::Enum(e) => NumberedScope::reserved_ranges(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_members_are_values() {
        let e = EnumDescriptor::new("Color").with_value(0, "RED").with_value(1, "BLUE");
        assert_eq!(e.members().len(), 2);
        assert_eq!(e.scope_name(), "Color");
        assert_eq!(NumberedScope::kind(&e), NodeKind::Enum);
    }

    #[test]
    fn node_delegates_to_variant() {
        let node: DescriptorNode = MessageDescriptor::new("M")
            .with_member(Member::new(1, "a"))
            .with_reserved_name("gone")
            .with_reserved_range(2, 2)
            .into();
        assert_eq!(node.members().len(), 1);
        assert!(node.is_reserved_name("gone"));
        assert!(!node.is_reserved_name("a"));
        assert_eq!(node.reserved_ranges(), &[ReservedRange::new(2, 2)]);
    }

    #[test]
    fn reserved_lookup_is_case_sensitive() {
        let names = vec!["Old".to_string()];
        assert!(is_reserved(&names, "Old"));
        assert!(!is_reserved(&names, "old"));
        assert!(!is_reserved(&[], "Old"));
    }
}

//! Message and enum descriptors.
//!
//! Both node kinds share one [`Member`] type: a message field and an enum
//! value are each a number, a name, and some pass-through attributes. Only
//! message fields ever carry a group index.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A numbered, named item in a message (field) or enum (value).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The wire number. Unique within a message; may repeat in an enum for aliases.
    pub number: i32,
    /// The declared identifier.
    pub name: String,
    /// Index into the owning message's [`GroupDecl`] list, if grouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_index: Option<usize>,
    /// Referenced type, for message fields that have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Opaque options, carried through untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

impl Member {
    pub fn new(number: i32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            group_index: None,
            type_name: None,
            options: BTreeMap::new(),
        }
    }

    /// Place this member in the group at `index`.
    pub fn in_group(mut self, index: usize) -> Self {
        self.group_index = Some(index);
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if the member belongs to a group.
    pub fn is_grouped(&self) -> bool {
        self.group_index.is_some()
    }
}

/// A named mutually-exclusive membership group (a `oneof`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDecl {
    pub name: String,
}

impl GroupDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A reserved span of member numbers.
///
/// Bounds are stored as given. Inverted or negative spans are not rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservedRange {
    pub start: i32,
    pub end: i32,
}

impl ReservedRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for ReservedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A message: fields, oneof groups, reservations, and nested children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub groups: Vec<GroupDecl>,
    #[serde(default)]
    pub reserved_names: Vec<String>,
    #[serde(default)]
    pub reserved_ranges: Vec<ReservedRange>,
    #[serde(default)]
    pub nested_messages: Vec<MessageDescriptor>,
    #[serde(default)]
    pub nested_enums: Vec<EnumDescriptor>,
}

impl MessageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_group(mut self, name: impl Into<String>) -> Self {
        self.groups.push(GroupDecl::new(name));
        self
    }

    pub fn with_reserved_name(mut self, name: impl Into<String>) -> Self {
        self.reserved_names.push(name.into());
        self
    }

    pub fn with_reserved_range(mut self, start: i32, end: i32) -> Self {
        self.reserved_ranges.push(ReservedRange::new(start, end));
        self
    }

    pub fn with_message(mut self, message: MessageDescriptor) -> Self {
        self.nested_messages.push(message);
        self
    }

    pub fn with_enum(mut self, value: EnumDescriptor) -> Self {
        self.nested_enums.push(value);
        self
    }

    /// Look up a nested message by exact name.
    pub fn nested_message(&self, name: &str) -> Option<&MessageDescriptor> {
        self.nested_messages.iter().find(|m| m.name == name)
    }

    /// Look up a nested enum by exact name.
    pub fn nested_enum(&self, name: &str) -> Option<&EnumDescriptor> {
        self.nested_enums.iter().find(|e| e.name == name)
    }
}

/// An enum: values and reservations. Enums have no children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub name: String,
    #[serde(default)]
    pub values: Vec<Member>,
    #[serde(default)]
    pub reserved_names: Vec<String>,
    #[serde(default)]
    pub reserved_ranges: Vec<ReservedRange>,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, number: i32, name: impl Into<String>) -> Self {
        self.values.push(Member::new(number, name));
        self
    }

    pub fn with_reserved_name(mut self, name: impl Into<String>) -> Self {
        self.reserved_names.push(name.into());
        self
    }

    pub fn with_reserved_range(mut self, start: i32, end: i32) -> Self {
        self.reserved_ranges.push(ReservedRange::new(start, end));
        self
    }
}

/// The kind of a [`DescriptorNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Message,
    Enum,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => write!(f, "message"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

/// A message or an enum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DescriptorNode {
    Message(MessageDescriptor),
    Enum(EnumDescriptor),
}

impl DescriptorNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Message(_) => NodeKind::Message,
            Self::Enum(_) => NodeKind::Enum,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Message(m) => &m.name,
            Self::Enum(e) => &e.name,
        }
    }

    pub fn as_message(&self) -> Option<&MessageDescriptor> {
        match self {
            Self::Message(m) => Some(m),
            Self::Enum(_) => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDescriptor> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Message(_) => None,
        }
    }
}

impl From<MessageDescriptor> for DescriptorNode {
    fn from(message: MessageDescriptor) -> Self {
        Self::Message(message)
    }
}

impl From<EnumDescriptor> for DescriptorNode {
    fn from(value: EnumDescriptor) -> Self {
        Self::Enum(value)
    }
}

//! Descriptor model for the protoxform active/shadow merge.
//!
//! This crate provides the already-parsed schema tree that the merge engine
//! reads and produces. Every other pxm crate depends on `pxm-types`.
//!
//! # Key Types
//!
//! - [`FileDescriptor`] — Top of a tree: file metadata plus top-level messages and enums
//! - [`DescriptorNode`] — Tagged message-or-enum node
//! - [`MessageDescriptor`] / [`EnumDescriptor`] — The two node kinds
//! - [`Member`] — A numbered, named field or enum value
//! - [`GroupDecl`] — A oneof-style membership group, referenced by index
//! - [`ReservedRange`] — A reserved span of member numbers
//! - [`NumberedScope`] — Capability shared by both node kinds

pub mod constants;
pub mod descriptor;
pub mod file;
pub mod scope;

pub use constants::{DEFAULT_MAX_DEPTH, DEPRECATED_MARKER_PREFIX, ZERO_VALUE_PLACEHOLDER};
pub use descriptor::{
    DescriptorNode, EnumDescriptor, GroupDecl, Member, MessageDescriptor, NodeKind, ReservedRange,
};
pub use file::FileDescriptor;
pub use scope::{is_reserved, NumberedScope};

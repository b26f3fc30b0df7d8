//! Active/shadow merge engine.
//!
//! Given an *active* descriptor tree (retired members stripped and reserved)
//! and its *shadow* sibling (every member retained, retired ones renamed with
//! a marker prefix), builds a new tree that restores the retired members that
//! active still formally reserves.
//!
//! # Components
//!
//! - [`adjust_reserved_range`] — drops ranges whose start was recovered
//! - [`reconcile`] — two-phase merge of one numbered member list
//! - [`remap_group`] — translates a shadow oneof index into active's
//! - [`Merger`] — message, enum, and file merges with name-paired recursion
//!
//! Recovery is best effort. Ineligible shadow members, and members of groups
//! that no longer exist, are dropped and listed in the [`MergeReport`]. Only
//! caller defects (mismatched node kinds, runaway nesting) are errors.

pub mod config;
pub mod error;
pub mod group;
pub mod merger;
pub mod reconcile;
pub mod report;
pub mod reserved;

mod context;
mod enums;
mod message;
mod scope;
mod tree;

pub use config::MergeConfig;
pub use error::{MergeError, MergeResult};
pub use group::remap_group;
pub use merger::{merge_file, MergeOutcome, Merger};
pub use reconcile::{reconcile, Origin, Placed, Reconciliation};
pub use report::{DropReason, MergeEvent, MergeReport};
pub use reserved::adjust_reserved_range;

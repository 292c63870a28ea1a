//! API difference detection
//!
//! - `collection` - generic pairwise add/remove detection
//! - `result` - the read-only diff record consumed by the rules
//! - `differ` - snapshot-to-snapshot comparison producing that record

pub mod collection;
pub mod differ;
pub mod result;

pub use collection::{diff, diff_by, CollectionDiff};
pub use differ::SnapshotDiffer;
pub use result::{AddedRemovedTypes, DiffResult, MemberChanges, TypeChange};

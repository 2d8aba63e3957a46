//! A greedy lookahead diff for lines and other sequences.
//!
//! [`changes`] aligns a base and a head sequence element by element, tagging
//! each element [`Change::Unchanged`], [`Change::Added`] or
//! [`Change::Removed`]. Elements that differ but contain one another (an
//! edited line, say) are reported as a replace pair. [`Diff`] wraps the
//! result together with its inputs and renders it as annotated text.
//!
//! ```
//! use greedy_diff::SimpleDiff;
//!
//! let diff = SimpleDiff::new("fn main() {\n}", "fn main() {\n    run();\n}");
//! assert_eq!(diff.annotated(), "fn main() {\n+    run();\n}\n");
//! ```

pub mod diff;
pub mod diffable;
pub mod engine;
pub mod error;
pub mod options;
mod serialization;

pub use diff::{Diff, ElementDiff, SimpleDiff, SliceDiff};
pub use diffable::Diffable;
pub use engine::{changes, changes_by, Change, Changes};
pub use error::ParseChangeError;
pub use options::DiffOptions;

use crate::diffable::Diffable;
use crate::engine::{changes, changes_by, Change, Changes};
use crate::options::DiffOptions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of diffing a base against a head.
///
/// Keeps both inputs next to the ordered changes so callers can render or
/// inspect the diff later. A `Diff` is never modified after construction.
///
/// `S` is the type of the inputs, `E` the type of the compared elements.
/// See [`SimpleDiff`], [`ElementDiff`] and [`SliceDiff`] for the common
/// flavours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, E: Serialize",
    deserialize = "S: Deserialize<'de>, E: Deserialize<'de>"
))]
pub struct Diff<S, E> {
    base: S,
    head: S,
    #[serde(with = "crate::serialization::entries")]
    changes: Changes<E>,
}

/// Text diff owning both inputs and every compared line.
pub type SimpleDiff = Diff<String, String>;

/// Text diff whose lines borrow from the inputs.
pub type ElementDiff<'a> = Diff<&'a str, &'a str>;

/// Diff of slices split into sub-slices by a separator element.
pub type SliceDiff<'a, T> = Diff<&'a [T], &'a [T]>;

impl<S, E> Diff<S, E> {
    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn head(&self) -> &S {
        &self.head
    }

    pub fn changes(&self) -> &[(E, Change)] {
        &self.changes
    }

    pub fn into_changes(self) -> Changes<E> {
        self.changes
    }

    /// True when every element is `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        self.changes.iter().all(|(_, c)| *c == Change::Unchanged)
    }
}

impl<S, E: fmt::Display> Diff<S, E> {
    /// Renders every change as an annotated line (`+` added, `-` removed,
    /// no prefix when unchanged), each terminated by a newline.
    pub fn annotated(&self) -> String {
        self.to_string()
    }
}

impl<S, E: fmt::Display> fmt::Display for Diff<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, change) in &self.changes {
            f.write_str(&change.annotated_line(element))?;
        }
        Ok(())
    }
}

fn compute<E: Diffable + Clone>(base: &[E], head: &[E], containment: bool) -> Changes<E> {
    if containment {
        changes(base, head)
    } else {
        changes_by(base, head, PartialEq::eq, |_, _| false)
    }
}

impl SimpleDiff {
    /// Diffs two texts line by line.
    ///
    /// Lines are split on `'\n'` only, so CRLF text keeps a trailing `'\r'`
    /// on every line but the last. Normalize line endings first when mixing
    /// CRLF and LF inputs.
    ///
    /// ```
    /// use greedy_diff::SimpleDiff;
    ///
    /// let diff = SimpleDiff::new("a\nb\nc", "a\nc\nd");
    /// assert_eq!(diff.annotated(), "a\n-b\nc\n+d\n");
    /// ```
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self::with_options(base, head, &DiffOptions::default())
    }

    /// Diffs two texts split on `separator`. Empty segments are kept.
    pub fn split_by(base: impl Into<String>, head: impl Into<String>, separator: char) -> Self {
        Self::with_options(base, head, &DiffOptions::default().with_separator(separator))
    }

    pub fn with_options(
        base: impl Into<String>,
        head: impl Into<String>,
        options: &DiffOptions,
    ) -> Self {
        let (base, head) = (base.into(), head.into());
        let base_split: Vec<String> = base
            .split(options.separator)
            .map(ToString::to_string)
            .collect();
        let head_split: Vec<String> = head
            .split(options.separator)
            .map(ToString::to_string)
            .collect();
        let changes = compute(&base_split, &head_split, options.containment);
        Diff {
            base,
            head,
            changes,
        }
    }
}

impl<'a> ElementDiff<'a> {
    /// Diffs two texts line by line without copying the lines.
    ///
    /// As with [`SimpleDiff::new`], CRLF line endings leave a `'\r'` at the
    /// end of each element.
    pub fn new(base: &'a str, head: &'a str) -> Self {
        Self::with_options(base, head, &DiffOptions::default())
    }

    /// Diffs two texts split on `separator`. Empty segments are kept.
    pub fn split_by(base: &'a str, head: &'a str, separator: char) -> Self {
        Self::with_options(base, head, &DiffOptions::default().with_separator(separator))
    }

    pub fn with_options(base: &'a str, head: &'a str, options: &DiffOptions) -> Self {
        let base_split: Vec<&'a str> = base.split(options.separator).collect();
        let head_split: Vec<&'a str> = head.split(options.separator).collect();
        let changes = compute(&base_split, &head_split, options.containment);
        Diff {
            base,
            head,
            changes,
        }
    }
}

impl<'a, T: PartialEq> SliceDiff<'a, T> {
    /// Diffs two slices split on every occurrence of `separator`. Empty
    /// sub-slices are kept, and a sub-slice contains another when the latter
    /// is a contiguous run inside it.
    pub fn split_by(base: &'a [T], head: &'a [T], separator: &T) -> Self {
        let base_split: Vec<&'a [T]> = base.split(|e| e == separator).collect();
        let head_split: Vec<&'a [T]> = head.split(|e| e == separator).collect();
        let changes = changes(&base_split, &head_split);
        Diff {
            base,
            head,
            changes,
        }
    }
}

impl<E: Diffable + Clone> Diff<Vec<E>, E> {
    /// Diffs two sequences the caller has already split into elements.
    pub fn from_sequences(base: Vec<E>, head: Vec<E>) -> Self {
        let changes = changes(&base, &head);
        Diff {
            base,
            head,
            changes,
        }
    }
}

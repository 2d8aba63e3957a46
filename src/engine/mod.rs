pub mod types;
pub use types::*;

use crate::diffable::Diffable;
use tracing::{debug, trace};

/// Computes the changes between two sequences with a greedy lookahead.
///
/// Both sequences are walked front to back. Equal heads are kept, heads where
/// one contains the other become a replace pair, and otherwise the engine
/// looks ahead for the nearest recurrence of either head and skips whatever
/// lies before it. The result is a local optimum and not a minimal edit
/// script.
///
/// # Examples
///
/// ```
/// use greedy_diff::{changes, Change};
///
/// let base = ["a", "b", "c"];
/// let head = ["a", "x", "b", "c"];
/// assert_eq!(changes(&base, &head), vec![
///     ("a", Change::Unchanged),
///     ("x", Change::Added),
///     ("b", Change::Unchanged),
///     ("c", Change::Unchanged),
/// ]);
/// ```
///
/// # Arguments
///
/// * `base` - The original sequence
/// * `head` - The new sequence
pub fn changes<E: Diffable + Clone>(base: &[E], head: &[E]) -> Changes<E> {
    changes_by(base, head, PartialEq::eq, Diffable::contains_element)
}

/// Same as [`changes`], with the equality and containment relations supplied
/// by the caller.
///
/// Passing `|_, _| false` as `contains` disables replace pairs, so only exact
/// matches are aligned.
pub fn changes_by<E, Equals, Contains>(
    base: &[E],
    head: &[E],
    eq: Equals,
    contains: Contains,
) -> Changes<E>
where
    E: Clone,
    Equals: Fn(&E, &E) -> bool,
    Contains: Fn(&E, &E) -> bool,
{
    let mut result: Changes<E> = Vec::with_capacity(base.len().max(head.len()));
    let (mut i, mut j) = (0, 0);

    while i < base.len() && j < head.len() {
        let (a, b) = (&base[i], &head[j]);

        if eq(a, b) {
            result.push((a.clone(), Change::Unchanged));
            i += 1;
            j += 1;
            continue;
        }

        // containment wins over any later exact recurrence
        if contains(a, b) || contains(b, a) {
            result.push((a.clone(), Change::Removed));
            result.push((b.clone(), Change::Added));
            i += 1;
            j += 1;
            continue;
        }

        // offsets are relative to the cursors and always >= 1
        let in_head = position(&head[j + 1..], a, &eq).map(|p| p + 1);
        let in_base = position(&base[i + 1..], b, &eq).map(|p| p + 1);

        match (in_head, in_base) {
            (Some(offset), Some(other)) if offset < other => {
                trace!(offset, other, "base element reappears first in head");
                skip(&mut result, &head[j..j + offset], Change::Added, a);
                i += 1;
                j += offset + 1;
            }
            (_, Some(offset)) => {
                trace!(offset, "head element reappears in base");
                skip(&mut result, &base[i..i + offset], Change::Removed, b);
                i += offset + 1;
                j += 1;
            }
            (Some(offset), None) => {
                trace!(offset, "base element reappears in head");
                skip(&mut result, &head[j..j + offset], Change::Added, a);
                i += 1;
                j += offset + 1;
            }
            (None, None) => {
                result.push((a.clone(), Change::Removed));
                result.push((b.clone(), Change::Added));
                i += 1;
                j += 1;
            }
        }
    }

    result.extend(base[i..].iter().map(|e| (e.clone(), Change::Removed)));
    result.extend(head[j..].iter().map(|e| (e.clone(), Change::Added)));

    debug!(
        base = base.len(),
        head = head.len(),
        unchanged = count(&result, Change::Unchanged),
        added = count(&result, Change::Added),
        removed = count(&result, Change::Removed),
        "computed changes"
    );
    result
}

fn position<E, Equals>(haystack: &[E], needle: &E, eq: &Equals) -> Option<usize>
where
    Equals: Fn(&E, &E) -> bool,
{
    haystack.iter().position(|e| eq(e, needle))
}

/// Emits `skipped` tagged as `change`, followed by the element both sequences
/// agree on.
fn skip<E: Clone>(result: &mut Changes<E>, skipped: &[E], change: Change, matched: &E) {
    result.extend(skipped.iter().map(|e| (e.clone(), change)));
    result.push((matched.clone(), Change::Unchanged));
}

fn count<E>(changes: &Changes<E>, change: Change) -> usize {
    changes.iter().filter(|(_, c)| *c == change).count()
}

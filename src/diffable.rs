use std::borrow::Cow;

/// Elements the diff engine can align.
///
/// Besides equality, an element exposes a looser containment relation used to
/// recognise an edited version of another element. When two elements differ
/// but one contains the other, the engine reports them as a replace pair
/// (`Removed` immediately followed by `Added`) instead of searching further.
///
/// Implemented for string types (substring test), slices and vectors
/// (contiguous sub-slice test) and for Rust primitives except floats, which
/// only ever match exactly.
pub trait Diffable: PartialEq {
    fn contains_element(&self, other: &Self) -> bool;
}

// An empty needle never counts as contained, otherwise every blank line
// would pair up with whatever line it happens to face.
fn contains_str(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

fn contains_slice<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}

impl Diffable for String {
    fn contains_element(&self, other: &Self) -> bool {
        contains_str(self, other)
    }
}

impl Diffable for &str {
    fn contains_element(&self, other: &Self) -> bool {
        contains_str(self, other)
    }
}

impl Diffable for Cow<'_, str> {
    fn contains_element(&self, other: &Self) -> bool {
        contains_str(self, other)
    }
}

impl<T: PartialEq> Diffable for &[T] {
    fn contains_element(&self, other: &Self) -> bool {
        contains_slice(self, other)
    }
}

impl<T: PartialEq> Diffable for Vec<T> {
    fn contains_element(&self, other: &Self) -> bool {
        contains_slice(self, other)
    }
}

macro_rules! impl_diffable_exact {
    ($($t:ty),*) => {
        $(
            impl Diffable for $t {
                fn contains_element(&self, _other: &Self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_diffable_exact!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_containment() {
        let line = String::from("  \"index\": 0,");
        assert!(line.contains_element(&String::from("index")));
        assert!(!String::from("index").contains_element(&line));
    }

    #[test]
    fn test_empty_needle_is_not_contained() {
        assert!(!Diffable::contains_element(&"abc", &""));
        assert!(!Diffable::contains_element(&"", &""));
        assert!(!String::from("abc").contains_element(&String::new()));
    }

    #[test]
    fn test_cow_containment() {
        let owned: Cow<'_, str> = Cow::Owned(String::from("let x = 1;"));
        let borrowed: Cow<'_, str> = Cow::Borrowed("x = 1");
        assert!(owned.contains_element(&borrowed));
        assert!(!borrowed.contains_element(&owned));
        assert!(!owned.contains_element(&Cow::Borrowed("")));
    }

    #[test]
    fn test_slice_containment() {
        let haystack: &[u8] = &[1, 2, 3, 4];
        assert!(Diffable::contains_element(&haystack, &&[2u8, 3][..]));
        assert!(!Diffable::contains_element(&haystack, &&[3u8, 2][..]));
        assert!(!Diffable::contains_element(&&[1u8][..], &haystack));
        assert!(!Diffable::contains_element(&haystack, &&[][..]));
    }

    #[test]
    fn test_vec_containment() {
        assert!(Diffable::contains_element(&vec!['a', 'b', 'c'], &vec!['b', 'c']));
        assert!(!Diffable::contains_element(&vec!['a', 'b'], &vec!['a', 'b', 'c']));
    }

    #[test]
    fn test_primitives_match_exactly() {
        assert!(!Diffable::contains_element(&12u32, &1u32));
        assert!(!Diffable::contains_element(&'a', &'a'));
    }
}

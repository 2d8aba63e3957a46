use crate::error::ParseChangeError;
use std::fmt;
use std::str::FromStr;

/// Ordered result of the diff engine: every element paired with its
/// classification, in the order it was consumed from base and head.
pub type Changes<E> = Vec<(E, Change)>;

/// Each element in a diff is either
/// present in both sequences (Unchanged)
/// only in head (Added)
/// only in base (Removed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    Unchanged,
    Added,
    Removed,
}

impl Change {
    /// Prefix used when rendering an element of this kind.
    pub fn line_sign(self) -> &'static str {
        match self {
            Change::Unchanged => "",
            Change::Added => "+",
            Change::Removed => "-",
        }
    }

    /// Renders `element` as one line of an annotated diff.
    ///
    /// ```
    /// use greedy_diff::Change;
    ///
    /// assert_eq!(Change::Added.annotated_line("Test"), "+Test\n");
    /// ```
    pub fn annotated_line<E: fmt::Display + ?Sized>(self, element: &E) -> String {
        format!("{}{}\n", self.line_sign(), element)
    }

    pub(crate) fn as_tag(self) -> &'static str {
        match self {
            Change::Unchanged => "unchanged",
            Change::Added => "added",
            Change::Removed => "removed",
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Change::Unchanged => "Unchanged",
            Change::Added => "Added",
            Change::Removed => "Removed",
        };
        f.write_str(name)
    }
}

impl FromStr for Change {
    type Err = ParseChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unchanged" => Ok(Change::Unchanged),
            "added" => Ok(Change::Added),
            "removed" => Ok(Change::Removed),
            other => Err(ParseChangeError::UnknownChange(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_sign() {
        assert_eq!(Change::Unchanged.line_sign(), "");
        assert_eq!(Change::Added.line_sign(), "+");
        assert_eq!(Change::Removed.line_sign(), "-");
    }

    #[test]
    fn test_annotated_line() {
        assert_eq!(Change::Unchanged.annotated_line("Test"), "Test\n");
        assert_eq!(Change::Added.annotated_line("Test"), "+Test\n");
        assert_eq!(Change::Removed.annotated_line("Test"), "-Test\n");
    }

    #[test]
    fn test_display() {
        assert_eq!(Change::Unchanged.to_string(), "Unchanged");
        assert_eq!(Change::Added.to_string(), "Added");
        assert_eq!(Change::Removed.to_string(), "Removed");
    }

    #[test]
    fn test_from_str() {
        for change in [Change::Unchanged, Change::Added, Change::Removed] {
            assert_eq!(change.as_tag().parse::<Change>(), Ok(change));
        }
        let err = "Added".parse::<Change>().unwrap_err();
        assert_eq!(err, ParseChangeError::UnknownChange("Added".to_string()));
        assert_eq!(err.to_string(), "could not convert 'Added' to a change");
    }
}

use crate::engine::Change;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

impl Serialize for Change {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for Change {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}

/// Encodes the changes of a [`Diff`](crate::Diff) as a list of
/// `{"change": .., "element": ..}` objects.
pub(crate) mod entries {
    use crate::engine::{Change, Changes};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct EntryRef<'a, E> {
        change: Change,
        element: &'a E,
    }

    #[derive(Deserialize)]
    struct Entry<E> {
        change: Change,
        element: E,
    }

    pub fn serialize<E, S>(changes: &Changes<E>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(
            changes
                .iter()
                .map(|(element, change)| EntryRef { change: *change, element }),
        )
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Changes<E>, D::Error>
    where
        E: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry<E>>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| (entry.element, entry.change))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Change, ElementDiff, SimpleDiff};
    use serde_json::json;

    #[test]
    fn test_change_tags() {
        assert_eq!(serde_json::to_value(Change::Unchanged).unwrap(), json!("unchanged"));
        assert_eq!(serde_json::to_value(Change::Added).unwrap(), json!("added"));
        assert_eq!(serde_json::to_value(Change::Removed).unwrap(), json!("removed"));
        assert_eq!(serde_json::from_value::<Change>(json!("added")).unwrap(), Change::Added);
    }

    #[test]
    fn test_unknown_change_tag() {
        let err = serde_json::from_value::<Change>(json!("moved")).unwrap_err();
        assert!(err.to_string().contains("could not convert 'moved' to a change"));
    }

    #[test]
    fn test_diff_shape() {
        let diff = ElementDiff::new("a\nb", "a\nc");
        assert_eq!(
            serde_json::to_value(&diff).unwrap(),
            json!({
                "base": "a\nb",
                "head": "a\nc",
                "changes": [
                    {"change": "unchanged", "element": "a"},
                    {"change": "removed", "element": "b"},
                    {"change": "added", "element": "c"},
                ],
            })
        );
    }

    #[test]
    fn test_diff_roundtrip() {
        let diff = SimpleDiff::new("one\ntwo\nthree", "one\n2\nthree\nfour");
        let encoded = serde_json::to_string(&diff).unwrap();
        let decoded: SimpleDiff = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, diff);
    }

    #[test]
    fn test_diff_rejects_bad_change() {
        let encoded = r#"{"base":"a","head":"a","changes":[{"change":"kept","element":"a"}]}"#;
        assert!(serde_json::from_str::<SimpleDiff>(encoded).is_err());
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity category assigned by the annotator.
///
/// Serialized as the conventional upper-case tag (`DATE`, `ORDINAL`, ...).
/// Tags the workspace does not know are carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Date,
    Ordinal,
    Cardinal,
    Money,
    Percent,
    Other(String),
}

impl EntityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Date => "DATE",
            Self::Ordinal => "ORDINAL",
            Self::Cardinal => "CARDINAL",
            Self::Money => "MONEY",
            Self::Percent => "PERCENT",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for EntityLabel {
    fn from(tag: String) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "DATE" => Self::Date,
            "ORDINAL" => Self::Ordinal,
            "CARDINAL" => Self::Cardinal,
            "MONEY" => Self::Money,
            "PERCENT" => Self::Percent,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for EntityLabel {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(text, label)` pair kept on an event for display and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

/// A labelled span inside a sentence. Offsets are byte offsets into the
/// sentence text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }

    pub fn to_entity(&self) -> Entity {
        Entity {
            text: self.text.clone(),
            label: self.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse_case_insensitively() {
        assert_eq!(EntityLabel::from("date"), EntityLabel::Date);
        assert_eq!(EntityLabel::from("MONEY"), EntityLabel::Money);
    }

    #[test]
    fn unknown_tags_are_preserved() {
        let label = EntityLabel::from("GPE");
        assert_eq!(label, EntityLabel::Other("GPE".into()));
        assert_eq!(label.to_string(), "GPE");
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&EntityLabel::Date).unwrap();
        assert_eq!(json, "\"DATE\"");
        let back: EntityLabel = serde_json::from_str("\"ORDINAL\"").unwrap();
        assert_eq!(back, EntityLabel::Ordinal);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MISCELLANEOUS_LABEL, TOPIC_LABEL_PREFIX};

/// Topic assignment of an event.
///
/// Variant order matters: every `Assigned` topic sorts before `Unassigned`,
/// so the catch-all group always lands last.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TopicId {
    Assigned(u32),
    #[default]
    Unassigned,
}

impl TopicId {
    /// Convert a raw clustering label; any negative label is noise.
    pub fn from_label(label: i32) -> Self {
        u32::try_from(label).map_or(Self::Unassigned, Self::Assigned)
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    /// Display label: `TOPIC n`, or `MISCELLANEOUS` for unassigned events.
    pub fn label(&self) -> String {
        match self {
            Self::Assigned(id) => format!("{TOPIC_LABEL_PREFIX} {id}"),
            Self::Unassigned => MISCELLANEOUS_LABEL.to_string(),
        }
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NOISE_LABEL;

    #[test]
    fn noise_label_is_unassigned() {
        assert_eq!(TopicId::from_label(NOISE_LABEL), TopicId::Unassigned);
        assert_eq!(TopicId::from_label(-7), TopicId::Unassigned);
    }

    #[test]
    fn non_negative_labels_are_assigned() {
        assert_eq!(TopicId::from_label(0), TopicId::Assigned(0));
        assert_eq!(TopicId::from_label(3), TopicId::Assigned(3));
    }

    #[test]
    fn unassigned_sorts_last() {
        let mut ids = vec![
            TopicId::Unassigned,
            TopicId::Assigned(2),
            TopicId::Assigned(0),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![TopicId::Assigned(0), TopicId::Assigned(2), TopicId::Unassigned]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(TopicId::Assigned(1).label(), "TOPIC 1");
        assert_eq!(TopicId::Unassigned.label(), "MISCELLANEOUS");
    }
}

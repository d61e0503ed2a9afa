//! Plain-text storyline listing.

use std::fmt::Write;

use crate::assembler::Timeline;

pub const HEADER: &str = "--- STORYLINE RECONSTRUCTION ---";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// List each event's entities under it.
    pub show_entities: bool,
}

/// Render the timeline as a storyline listing:
///
/// ```text
/// --- STORYLINE RECONSTRUCTION ---
///
/// >> TOPIC 0
///    January 05, 2021 | The 'Deep Blue' initiative launched ...
/// ```
pub fn render_text(timeline: &Timeline, options: TextOptions) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for group in &timeline.groups {
        let _ = write!(out, "\n>> {}\n", group.label);
        for entry in &group.entries {
            let _ = writeln!(out, "   {} | {}", entry.display_date, entry.sentence);
            if options.show_entities && !entry.entities.is_empty() {
                let listed: Vec<String> = entry
                    .entities
                    .iter()
                    .map(|e| format!("{} ({})", e.text, e.label))
                    .collect();
                let _ = writeln!(out, "      entities: {}", listed.join(", "));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::TimelineAssembler;
    use chrono::NaiveDate;
    use storyline_core::models::{Entity, EntityLabel, Event, TopicId};

    fn timeline() -> Timeline {
        let date = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let mut event = Event::new(
            "The team celebrated its 20th anniversary in 2018.",
            "2018",
            date,
            vec![
                Entity {
                    text: "20th".to_string(),
                    label: EntityLabel::Ordinal,
                },
                Entity {
                    text: "2018".to_string(),
                    label: EntityLabel::Date,
                },
            ],
        );
        event.assign_topic(TopicId::Assigned(0));
        TimelineAssembler::default().assemble(vec![event])
    }

    #[test]
    fn renders_header_group_and_line() {
        let out = render_text(&timeline(), TextOptions::default());
        assert_eq!(
            out,
            "--- STORYLINE RECONSTRUCTION ---\n\n>> TOPIC 0\n   2018 | The team celebrated its 20th anniversary in 2018.\n"
        );
    }

    #[test]
    fn entities_are_listed_on_request() {
        let out = render_text(
            &timeline(),
            TextOptions {
                show_entities: true,
            },
        );
        assert!(out.contains("      entities: 20th (ORDINAL), 2018 (DATE)\n"));
    }

    #[test]
    fn empty_timeline_is_header_only() {
        let out = render_text(&Timeline::default(), TextOptions::default());
        assert_eq!(out, format!("{HEADER}\n"));
    }
}

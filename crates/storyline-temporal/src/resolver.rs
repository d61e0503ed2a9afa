//! Per-sentence date resolution.
//!
//! A sentence becomes an `Event` when one of its `DATE` spans carries a
//! digit and the date parser can read it. Everything else is skipped.

use rayon::prelude::*;
use storyline_core::models::{AnnotatedSentence, DateSettings, Event};
use storyline_core::traits::IDateParser;
use tracing::{debug, info};

use crate::scoring::{has_digit, pick_richest};

/// Resolves annotated sentences into dated events.
pub struct DateCandidateResolver<'a> {
    parser: &'a dyn IDateParser,
    settings: DateSettings,
}

impl<'a> DateCandidateResolver<'a> {
    pub fn new(parser: &'a dyn IDateParser, settings: DateSettings) -> Self {
        Self { parser, settings }
    }

    pub fn settings(&self) -> &DateSettings {
        &self.settings
    }

    /// Resolve one sentence.
    ///
    /// The richest digit-bearing `DATE` span is chosen. If it contains
    /// separate date expressions (a range, say), the richest of those wins;
    /// otherwise the whole span is parsed.
    pub fn resolve(&self, sentence: &AnnotatedSentence) -> Option<Event> {
        let Some(candidate) = pick_richest(sentence.date_texts().filter(|t| has_digit(t)), |t| *t)
        else {
            debug!(sentence = %sentence.text, "no digit-bearing date candidate");
            return None;
        };

        let subdates = self.parser.search_subdates(candidate, &self.settings);
        let (raw, date) = match pick_richest(subdates, |s| s.text.as_str()) {
            Some(sub) => (sub.text, sub.date),
            None => match self.parser.parse(candidate, &self.settings) {
                Some(date) => (candidate.to_string(), date),
                None => {
                    debug!(candidate, sentence = %sentence.text, "date candidate did not parse");
                    return None;
                }
            },
        };

        debug!(candidate, chosen = %raw, %date, "date resolved");
        Some(Event::new(
            sentence.text.as_str(),
            raw,
            date,
            sentence.entity_pairs(),
        ))
    }

    /// Resolve a batch in parallel. Output keeps the input order.
    pub fn resolve_all(&self, sentences: &[AnnotatedSentence]) -> Vec<Event> {
        let events: Vec<Event> = sentences
            .par_iter()
            .map(|sentence| self.resolve(sentence))
            .collect::<Vec<Option<Event>>>()
            .into_iter()
            .flatten()
            .collect();

        info!(
            sentences = sentences.len(),
            events = events.len(),
            "dates resolved"
        );
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use storyline_core::models::{EntityLabel, EntitySpan, Granularity};

    use crate::parser::RuleDateParser;

    fn sentence(text: &str, dates: &[&str]) -> AnnotatedSentence {
        let entities = dates
            .iter()
            .map(|d| {
                let start = text.find(d).unwrap();
                EntitySpan::new(*d, EntityLabel::Date, start, start + d.len())
            })
            .collect();
        AnnotatedSentence::new(text, 0, text.len(), entities)
    }

    #[test]
    fn digitless_candidates_are_skipped() {
        let parser = RuleDateParser::new().unwrap();
        let resolver = DateCandidateResolver::new(&parser, DateSettings::default());
        let s = sentence("The company grew steadily that decade.", &["that decade"]);
        assert!(resolver.resolve(&s).is_none());
    }

    #[test]
    fn range_resolves_to_one_embedded_date() {
        let parser = RuleDateParser::new().unwrap();
        let resolver = DateCandidateResolver::new(&parser, DateSettings::default());
        let s = sentence(
            "Output rose between March 2000 and August 2005.",
            &["between March 2000 and August 2005"],
        );
        let event = resolver.resolve(&s).unwrap();
        assert_eq!(event.raw_date_text(), "August 2005");
        assert_eq!(
            event.resolved_date(),
            NaiveDate::from_ymd_opt(2005, 8, 1).unwrap()
        );
        assert_eq!(event.granularity(), Granularity::Month);
    }

    #[test]
    fn unparseable_candidate_is_skipped() {
        let parser = RuleDateParser::new().unwrap();
        let resolver = DateCandidateResolver::new(&parser, DateSettings::default());
        let s = sentence("Revenue peaked in Q3.", &["Q3"]);
        assert!(resolver.resolve(&s).is_none());
    }

    #[test]
    fn entities_are_carried_onto_the_event() {
        let parser = RuleDateParser::new().unwrap();
        let resolver = DateCandidateResolver::new(&parser, DateSettings::default());
        let mut s = sentence("In 2003, three offices opened.", &["2003"]);
        s.entities.push(EntitySpan::new("three", EntityLabel::Cardinal, 9, 14));
        let event = resolver.resolve(&s).unwrap();
        assert_eq!(event.entities().len(), 2);
        assert_eq!(event.entities()[1].label, EntityLabel::Cardinal);
    }
}

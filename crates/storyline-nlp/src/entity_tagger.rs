//! Rule-based entity tagging over a single sentence.
//!
//! Every pattern contributes candidate spans; overlaps are resolved in favour
//! of the longest span, then the higher-priority label, then the earlier start.
//! A pattern with capture groups contributes its first participating group
//! rather than the whole match, so context words stay out of the span.

use regex::Regex;
use storyline_core::calendar::MONTH_NAME_PATTERN;
use storyline_core::errors::{AnnotationError, StorylineResult};
use storyline_core::models::{EntityLabel, EntitySpan};

const DAY: &str = r"\d{1,2}(?:st|nd|rd|th)?";
const YEAR: &str = r"(?:1\d{3}|2\d{3})";

/// Lower value wins a tie between equally long spans.
fn priority(label: &EntityLabel) -> u8 {
    match label {
        EntityLabel::Date => 0,
        EntityLabel::Money => 1,
        EntityLabel::Percent => 2,
        EntityLabel::Ordinal => 3,
        EntityLabel::Cardinal => 4,
        EntityLabel::Other(_) => 5,
    }
}

struct Rule {
    regex: Regex,
    label: EntityLabel,
}

/// Compiled entity patterns.
pub struct EntityTagger {
    rules: Vec<Rule>,
}

impl EntityTagger {
    /// Compile the pattern set.
    ///
    /// # Errors
    /// Returns `AnnotationError::InitFailed` if a pattern does not compile.
    pub fn new() -> StorylineResult<Self> {
        let rules = pattern_table()
            .into_iter()
            .map(|(pattern, label)| {
                Regex::new(&pattern)
                    .map(|regex| Rule { regex, label })
                    .map_err(|e| AnnotationError::InitFailed {
                        reason: format!("entity pattern failed to compile: {e}"),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Tag one sentence. Spans are ordered by start offset and never overlap.
    pub fn tag(&self, sentence: &str) -> Vec<EntitySpan> {
        let mut candidates: Vec<EntitySpan> = self
            .rules
            .iter()
            .flat_map(|rule| {
                rule.regex.captures_iter(sentence).filter_map(|caps| {
                    let m = caps.iter().skip(1).flatten().next().or_else(|| caps.get(0))?;
                    Some(EntitySpan::new(m.as_str(), rule.label.clone(), m.start(), m.end()))
                })
            })
            .collect();

        candidates.sort_by(|a, b| {
            (b.end - b.start)
                .cmp(&(a.end - a.start))
                .then_with(|| priority(&a.label).cmp(&priority(&b.label)))
                .then_with(|| a.start.cmp(&b.start))
        });

        let mut accepted: Vec<EntitySpan> = Vec::new();
        for span in candidates {
            let overlaps = accepted
                .iter()
                .any(|kept| span.start < kept.end && kept.start < span.end);
            if !overlaps {
                accepted.push(span);
            }
        }
        accepted.sort_by_key(|span| span.start);
        accepted
    }
}

/// Words that mark a following bare number as a year.
const YEAR_CONTEXT: &str =
    r"(?:in|by|since|during|until|till|of|from|around|circa|before|after|throughout|early|mid|late)";

/// Full date expression: numeric, or naming a month and a year.
fn full_date() -> String {
    let m = MONTH_NAME_PATTERN;
    [
        r"\d{4}[-/.]\d{1,2}[-/.]\d{1,2}\b".to_string(),
        r"\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}\b".to_string(),
        format!(r"{m}\s+{DAY},?\s+{YEAR}\b"),
        format!(r"{DAY}\s+(?:of\s+)?{m},?\s+{YEAR}\b"),
        format!(r"{m},?\s+(?:of\s+)?{YEAR}\b"),
    ]
    .join("|")
}

/// A bare year counts only after a context word, after "the year", or
/// before closing punctuation. Other four-digit numbers stay cardinals.
fn contextual_year() -> String {
    [
        format!(r"\b{YEAR_CONTEXT}\s+({YEAR})\b"),
        format!(r"\b(the\s+year\s+{YEAR})\b"),
        format!(r"\b({YEAR})[,.;:]"),
    ]
    .join("|")
}

fn pattern_table() -> Vec<(String, EntityLabel)> {
    let m = MONTH_NAME_PATTERN;
    let full = full_date();
    let single = format!("{full}|{YEAR}\\b");
    let units = r"(?:days?|weeks?|months?|years?|decades?|centur(?:y|ies)|quarters?)";
    let seasons = r"(?:winter|spring|summer|autumn|fall)";

    vec![
        // Numeric and month-name dates.
        (format!(r"(?i)\b(?:{full})"), EntityLabel::Date),
        (format!(r"(?i){}", contextual_year()), EntityLabel::Date),
        // Decades.
        (
            format!(r"(?i)\b(?:the\s+)?(?:(?:early|mid|late)[\s-]+)?[12]\d{{2}}0'?s\b"),
            EntityLabel::Date,
        ),
        // Month and day without a year.
        (format!(r"(?i)\b{m}\s+{DAY}\b"), EntityLabel::Date),
        (format!(r"(?i)\b{DAY}\s+(?:of\s+)?{m}"), EntityLabel::Date),
        // Ranges.
        (
            format!(
                r"(?i)\b(?:between|from)\s+(?:{single})\s+(?:and|to|until|through)\s+(?:{single})"
            ),
            EntityLabel::Date,
        ),
        (
            format!(r"\b{YEAR}\s*(?:-|–|to|through)\s*{YEAR}\b"),
            EntityLabel::Date,
        ),
        // Lexical references.
        (
            format!(
                r"(?i)\b(?:that|this|next|last|the\s+same|the\s+following|the\s+previous)\s+(?:{units}|{seasons})\b"
            ),
            EntityLabel::Date,
        ),
        (
            format!(
                r"(?i)\b(?:the\s+)?(?:next|past|last|following)\s+(?:few|several|two|three|four|five)\s+{units}\b"
            ),
            EntityLabel::Date,
        ),
        (
            format!(r"(?i)\b(?:two|three|four|five|several|a\s+few)\s+{units}\b"),
            EntityLabel::Date,
        ),
        (format!(r"(?i)\b{seasons}\b"), EntityLabel::Date),
        (r"(?i)\b(?:today|yesterday|tomorrow)\b".to_string(), EntityLabel::Date),
        (
            r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\b"
                .to_string(),
            EntityLabel::Date,
        ),
        // Amounts.
        (
            r"(?i)\$\s?\d[\d,]*(?:\.\d+)?(?:\s+(?:thousand|million|billion|trillion))?".to_string(),
            EntityLabel::Money,
        ),
        (
            r"(?i)\b\d+(?:\.\d+)?\s?(?:%|percent\b)".to_string(),
            EntityLabel::Percent,
        ),
        (
            r"\b\d[\d,]*(?:st|nd|rd|th)\b".to_string(),
            EntityLabel::Ordinal,
        ),
        (
            r"(?i)\b(?:first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\b"
                .to_string(),
            EntityLabel::Ordinal,
        ),
        (
            r"\b\d[\d,]*(?:\.\d+)?\b".to_string(),
            EntityLabel::Cardinal,
        ),
        (
            r"(?i)\b(?:one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|dozens?|hundreds?|thousands?)\b"
                .to_string(),
            EntityLabel::Cardinal,
        ),
    ]
}

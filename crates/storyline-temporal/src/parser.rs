//! Rule-based natural-language date parser.
//!
//! Understands numeric dates (ISO and order-dependent `a-b-c` forms),
//! month-name dates, bare years and, for whole-phrase parsing, decades.
//! Missing components resolve to the first day and the first month.

use chrono::NaiveDate;
use regex::{Captures, Regex};
use storyline_core::calendar::{expand_two_digit_year, month_from_name, MONTH_NAME_PATTERN};
use storyline_core::constants::{DEFAULT_DAY_OF_MONTH, DEFAULT_MONTH_OF_YEAR};
use storyline_core::errors::{StorylineResult, TemporalError};
use storyline_core::models::{DateOrder, DateSettings, SubDate};
use storyline_core::traits::IDateParser;

/// Leading words a whole phrase may carry around its date.
const FILLER: &str = r"(?i)^(?:(?:in|on|by|since|during|around|circa|from)\s+)?(?:the\s+)?(?:(?:year|early|mid|late|end\s+of|beginning\s+of|start\s+of|middle\s+of)[\s-]+)?(?:the\s+)?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `2021-01-05`, always year first.
    Iso,
    /// `06-20-2021`, read through `DateOrder`.
    Numeric,
    /// `March 15, 2006`
    MonthDayYear,
    /// `15th of March, 2006`
    DayMonthYear,
    /// `March 2006`
    MonthYear,
    /// `March 15`
    MonthDay,
    /// `15 March`
    DayMonth,
    /// `2006`
    Year,
    /// `the 1990s`, whole-phrase parsing only.
    Decade,
}

struct DatePattern {
    shape: Shape,
    search: Option<Regex>,
    whole: Regex,
}

fn pattern_sources() -> Vec<(Shape, String)> {
    let m = MONTH_NAME_PATTERN;
    let day = r"(?P<day>\d{1,2})(?:st|nd|rd|th)?";
    let year = r"(?P<year>[12]\d{3})";
    vec![
        (
            Shape::Iso,
            r"(?P<year>\d{4})[-/.](?P<month>\d{1,2})[-/.](?P<day>\d{1,2})".to_string(),
        ),
        (
            Shape::Numeric,
            r"(?P<a>\d{1,2})[-/.](?P<b>\d{1,2})[-/.](?P<c>\d{4}|\d{2})".to_string(),
        ),
        (Shape::MonthDayYear, format!(r"(?P<month>{m})\s+{day},?\s+{year}")),
        (
            Shape::DayMonthYear,
            format!(r"{day}\s+(?:of\s+)?(?P<month>{m}),?\s+{year}"),
        ),
        (Shape::MonthYear, format!(r"(?P<month>{m}),?\s+(?:of\s+)?{year}")),
        (Shape::MonthDay, format!(r"(?P<month>{m})\s+{day}")),
        (Shape::DayMonth, format!(r"{day}\s+(?:of\s+)?(?P<month>{m})")),
        (Shape::Year, year.to_string()),
        (Shape::Decade, r"(?P<year>[12]\d{2}0)'?s".to_string()),
    ]
}

/// Rule-based `IDateParser`. Construct once; it holds compiled patterns.
pub struct RuleDateParser {
    patterns: Vec<DatePattern>,
    filler: Regex,
}

impl RuleDateParser {
    /// # Errors
    /// Returns `TemporalError::InitFailed` if a pattern does not compile.
    pub fn new() -> StorylineResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| TemporalError::InitFailed {
                reason: format!("date pattern failed to compile: {e}"),
            })
        };

        let mut patterns = Vec::new();
        for (shape, src) in pattern_sources() {
            let search = match shape {
                Shape::Decade => None,
                _ => Some(compile(&format!(r"(?i)\b(?:{src})\b"))?),
            };
            let whole = compile(&format!(r"(?i)^(?:{src})$"))?;
            patterns.push(DatePattern {
                shape,
                search,
                whole,
            });
        }

        Ok(Self {
            patterns,
            filler: compile(FILLER)?,
        })
    }

    fn build(shape: Shape, caps: &Captures<'_>, settings: &DateSettings) -> Option<NaiveDate> {
        let num = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());
        let month_name = || caps.name("month").and_then(|m| month_from_name(m.as_str()));
        let year = || num("year").and_then(|y| i32::try_from(y).ok());

        let (y, m, d) = match shape {
            Shape::Iso => (year()?, num("month")?, num("day")?),
            Shape::Numeric => return numeric_date(caps, settings.order),
            Shape::MonthDayYear | Shape::DayMonthYear => (year()?, month_name()?, num("day")?),
            Shape::MonthYear => (year()?, month_name()?, DEFAULT_DAY_OF_MONTH),
            Shape::MonthDay | Shape::DayMonth => {
                (settings.default_year?, month_name()?, num("day")?)
            }
            Shape::Year | Shape::Decade => (year()?, DEFAULT_MONTH_OF_YEAR, DEFAULT_DAY_OF_MONTH),
        };
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn search(&self, text: &str, settings: &DateSettings) -> Vec<SubDate> {
        let mut found: Vec<(usize, usize, NaiveDate)> = Vec::new();
        for pattern in &self.patterns {
            let Some(regex) = &pattern.search else {
                continue;
            };
            for caps in regex.captures_iter(text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                if let Some(date) = Self::build(pattern.shape, &caps, settings) {
                    found.push((whole.start(), whole.end(), date));
                }
            }
        }

        // Longest expression wins an overlap; the earlier one wins a tie.
        found.sort_by(|a, b| (b.1 - b.0).cmp(&(a.1 - a.0)).then(a.0.cmp(&b.0)));
        let mut accepted: Vec<(usize, usize, NaiveDate)> = Vec::new();
        for candidate in found {
            let overlaps = accepted
                .iter()
                .any(|kept| candidate.0 < kept.1 && kept.0 < candidate.1);
            if !overlaps {
                accepted.push(candidate);
            }
        }
        accepted.sort_by_key(|c| c.0);

        accepted
            .into_iter()
            .map(|(start, end, date)| SubDate::new(&text[start..end], date))
            .collect()
    }

    fn parse_whole(&self, text: &str, settings: &DateSettings) -> Option<NaiveDate> {
        let trimmed = text
            .trim()
            .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':'))
            .trim();
        let stripped = self.filler.replace(trimmed, "");
        let phrase = stripped.trim();
        if phrase.is_empty() {
            return None;
        }

        self.patterns.iter().find_map(|pattern| {
            pattern
                .whole
                .captures(phrase)
                .and_then(|caps| Self::build(pattern.shape, &caps, settings))
        })
    }
}

/// Read an `a-b-c` numeric date.
///
/// A trailing four-digit component is always the year. Under `Ymd` a
/// two-digit trailing component means the year leads instead. A month above
/// 12 with a day that fits is taken as swapped.
fn numeric_date(caps: &Captures<'_>, order: DateOrder) -> Option<NaiveDate> {
    let a = caps.name("a")?.as_str();
    let b = caps.name("b")?.as_str();
    let c = caps.name("c")?.as_str();
    let (a_n, b_n, c_n): (u32, u32, u32) = (a.parse().ok()?, b.parse().ok()?, c.parse().ok()?);

    let (raw_year, year_digits, mut month, mut day) = match order {
        DateOrder::Ymd if c.len() == 2 => (a_n, a.len(), b_n, c_n),
        DateOrder::Mdy | DateOrder::Ymd => (c_n, c.len(), a_n, b_n),
        DateOrder::Dmy => (c_n, c.len(), b_n, a_n),
    };
    if month > 12 && day <= 12 {
        std::mem::swap(&mut month, &mut day);
    }

    let raw_year = i32::try_from(raw_year).ok()?;
    let year = if year_digits <= 2 {
        expand_two_digit_year(raw_year)
    } else {
        raw_year
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

impl IDateParser for RuleDateParser {
    fn parse(&self, text: &str, settings: &DateSettings) -> Option<NaiveDate> {
        self.parse_whole(text, settings)
    }

    fn search_subdates(&self, text: &str, settings: &DateSettings) -> Vec<SubDate> {
        self.search(text, settings)
    }
}

//! Integration tests: annotator output through the resolver.

use chrono::NaiveDate;
use proptest::prelude::*;
use storyline_core::models::{
    AnnotatedSentence, DateSettings, EntityLabel, EntitySpan, Event, Granularity,
};
use storyline_core::traits::IAnnotator;
use storyline_nlp::RuleAnnotator;
use storyline_temporal::{DateCandidateResolver, RuleDateParser};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn resolve_text(text: &str, settings: DateSettings) -> Vec<Event> {
    let annotator = RuleAnnotator::new().unwrap();
    let parser = RuleDateParser::new().unwrap();
    let sentences = annotator.annotate(text).unwrap();
    DateCandidateResolver::new(&parser, settings).resolve_all(&sentences)
}

/// Sentence with DATE spans placed where their text occurs.
fn with_dates(text: &str, dates: &[&str]) -> AnnotatedSentence {
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
fn two_companies_two_day_events() {
    let events = resolve_text(
        "Company A launched a product on January 5, 2023. Company B filed a patent on Jan 3, 2023.",
        DateSettings::default(),
    );
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].resolved_date(), ymd(2023, 1, 5));
    assert_eq!(events[1].resolved_date(), ymd(2023, 1, 3));
    assert!(events.iter().all(|e| e.granularity() == Granularity::Day));
}

#[test]
fn lexical_only_dates_produce_nothing() {
    let events = resolve_text("The company grew steadily that decade.", DateSettings::default());
    assert!(events.is_empty());
}

#[test]
fn ordinal_is_not_mistaken_for_the_date() {
    let events = resolve_text(
        "The team celebrated its 20th anniversary in 2018.",
        DateSettings::default(),
    );
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].raw_date_text(), "2018");
    assert_eq!(events[0].resolved_date(), ymd(2018, 1, 1));
    assert_eq!(events[0].granularity(), Granularity::Year);
}

#[test]
fn headcounts_are_not_events() {
    let events = resolve_text(
        "The company hired 1200 workers at the plant.",
        DateSettings::default(),
    );
    assert!(events.is_empty());
}

#[test]
fn decades_resolve_to_their_first_year() {
    let events = resolve_text(
        "The market shifted in the 1990s. Growth slowed in the early 2000s.",
        DateSettings::default(),
    );
    let dates: Vec<(&str, NaiveDate, Granularity)> = events
        .iter()
        .map(|e| (e.raw_date_text(), e.resolved_date(), e.granularity()))
        .collect();
    assert_eq!(
        dates,
        vec![
            ("the 1990s", ymd(1990, 1, 1), Granularity::Year),
            ("the early 2000s", ymd(2000, 1, 1), Granularity::Year),
        ]
    );
}

#[test]
fn company_history_resolves_every_dated_line() {
    let text = "The company was founded in 1998, starting with just three employees in a small office downtown.
      By June 2000, they had launched their first product, which quickly gained traction among early adopters.
      Over the next few years, the team expanded, opening a branch in New York in 2003.
      The team celebrated its 20th anniversary in 2018, reflecting on two decades of innovation.";
    let events = resolve_text(text, DateSettings::default());
    let dates: Vec<(NaiveDate, Granularity)> = events
        .iter()
        .map(|e| (e.resolved_date(), e.granularity()))
        .collect();
    assert_eq!(
        dates,
        vec![
            (ymd(1998, 1, 1), Granularity::Year),
            (ymd(2000, 6, 1), Granularity::Month),
            (ymd(2003, 1, 1), Granularity::Year),
            (ymd(2018, 1, 1), Granularity::Year),
        ]
    );
}

#[test]
fn iso_profile_reads_year_first_narratives() {
    let events = resolve_text(
        "The Deep Blue initiative launched on 2021-01-05, aiming to map the trench.",
        DateSettings::iso(),
    );
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].resolved_date(), ymd(2021, 1, 5));
    assert_eq!(events[0].raw_date_text(), "2021-01-05");
}

#[test]
fn richer_candidate_wins_in_either_order() {
    let parser = RuleDateParser::new().unwrap();
    let resolver = DateCandidateResolver::new(&parser, DateSettings::default());

    let forward = with_dates(
        "Planned for 2021, the frame went up on 06-20-2021.",
        &["2021", "06-20-2021"],
    );
    let backward = with_dates(
        "The frame went up on 06-20-2021, as planned for 2021.",
        &["06-20-2021", "2021"],
    );

    for sentence in [forward, backward] {
        let event = resolver.resolve(&sentence).unwrap();
        assert_eq!(event.raw_date_text(), "06-20-2021");
        assert_eq!(event.resolved_date(), ymd(2021, 6, 20));
    }
}

#[test]
fn range_never_keeps_the_whole_literal() {
    let events = resolve_text(
        "Output rose between March 2000 and August 2005 across Europe.",
        DateSettings::default(),
    );
    assert_eq!(events.len(), 1);
    let raw = events[0].raw_date_text();
    assert!(raw == "March 2000" || raw == "August 2005", "got {raw}");
}

#[test]
fn year_less_dates_need_a_default_year() {
    let text = "The ribbon was cut on June 15.";
    assert!(resolve_text(text, DateSettings::default()).is_empty());

    let settings = DateSettings {
        default_year: Some(2021),
        ..DateSettings::default()
    };
    let events = resolve_text(text, settings);
    assert_eq!(events[0].resolved_date(), ymd(2021, 6, 15));
}

proptest! {
    #[test]
    fn granularity_follows_defaulted_components(
        year in 1000i32..2999,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let parser = RuleDateParser::new().unwrap();
        let resolver = DateCandidateResolver::new(&parser, DateSettings::default());
        let literal = format!("{month:02}-{day:02}-{year}");
        let text = format!("It happened on {literal}.");
        let event = resolver.resolve(&with_dates(&text, &[&literal])).unwrap();

        let expected = if day != 1 {
            Granularity::Day
        } else if month != 1 {
            Granularity::Month
        } else {
            Granularity::Year
        };
        prop_assert_eq!(event.granularity(), expected);
        prop_assert_eq!(event.resolved_date(), ymd(year, month, day));
    }

    #[test]
    fn batch_resolution_keeps_input_order(years in prop::collection::vec(1900i32..2100, 0..40)) {
        let parser = RuleDateParser::new().unwrap();
        let resolver = DateCandidateResolver::new(&parser, DateSettings::default());
        let sentences: Vec<AnnotatedSentence> = years
            .iter()
            .map(|y| {
                let year = y.to_string();
                with_dates(&format!("Milestone reached in {year}."), &[&year])
            })
            .collect();

        let resolved: Vec<i32> = resolver
            .resolve_all(&sentences)
            .iter()
            .map(|e| chrono::Datelike::year(&e.resolved_date()))
            .collect();
        prop_assert_eq!(resolved, years);
    }
}

//! End-to-end tests over the narrative fixtures.

use proptest::prelude::*;
use storyline::Services;
use storyline_core::config::StorylineConfig;
use storyline_core::errors::{ConfigError, EmbeddingError, StorylineError};
use storyline_core::models::{Event, TopicId};
use test_fixtures::{all_narratives, narrative, KeywordEmbedder, NarrativeFixture};

fn services_for(fixture: &NarrativeFixture) -> Services {
    let mut config = StorylineConfig::default();
    config.temporal.date_order = fixture.date_order;
    Services::from_config(&config).unwrap()
}

#[test]
fn every_narrative_yields_its_expected_events() {
    for fixture in all_narratives() {
        let services = services_for(&fixture);
        let events = services.pipeline().extract_events(&fixture.text).unwrap();

        let actual: Vec<(String, _, _)> = events
            .iter()
            .map(|e| (e.raw_date_text().to_string(), e.resolved_date(), e.granularity()))
            .collect();
        let expected: Vec<(String, _, _)> = fixture
            .expected_events
            .iter()
            .map(|e| (e.raw_date_text.clone(), e.date, e.granularity))
            .collect();
        assert_eq!(actual, expected, "narrative {}", fixture.name);
    }
}

#[test]
fn earlier_filing_sorts_first() {
    let fixture = narrative("two_companies");
    let timeline = services_for(&fixture).pipeline().run(&fixture.text).unwrap();
    assert_eq!(timeline.event_count(), 2);

    for group in &timeline.groups {
        let a = group.entries.iter().position(|e| e.sentence.starts_with("Company A"));
        let b = group.entries.iter().position(|e| e.sentence.starts_with("Company B"));
        if let (Some(a), Some(b)) = (a, b) {
            assert!(b < a, "January 3 should precede January 5");
        }
    }
}

#[test]
fn undated_narrative_is_empty() {
    let fixture = narrative("undated");
    let timeline = services_for(&fixture).pipeline().run(&fixture.text).unwrap();
    assert!(timeline.is_empty());
    assert_eq!(timeline.topic_count(), 0);
}

#[test]
fn repeated_runs_are_identical() {
    let fixture = narrative("multi_project");
    let services = services_for(&fixture);
    let first = services.pipeline().run(&fixture.text).unwrap();
    let second = services.pipeline().run(&fixture.text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn keyword_storylines_group_together_in_date_order() {
    let fixture = narrative("multi_project");
    let services =
        services_for(&fixture).with_embedder(Box::new(KeywordEmbedder::multi_project()));
    let (timeline, events) = services.pipeline().run_events(&fixture.text).unwrap();

    let deep_blue: Vec<&Event> = events
        .iter()
        .filter(|e| e.sentence().contains("Deep Blue"))
        .collect();
    assert_eq!(deep_blue.len(), 7);
    let topic = deep_blue[0].topic_id();
    assert!(topic.is_assigned());
    assert!(deep_blue.iter().all(|e| e.topic_id() == topic));

    let group = timeline.groups.iter().find(|g| g.topic == topic).unwrap();
    assert_eq!(group.entries.len(), 7);
    assert!(group.entries.windows(2).all(|w| w[0].date <= w[1].date));

    let riverside = events
        .iter()
        .find(|e| e.sentence().contains("Riverside"))
        .unwrap();
    assert_eq!(riverside.topic_id(), TopicId::Unassigned);
}

#[test]
fn every_dated_event_reaches_the_timeline() {
    let fixture = narrative("company_history");
    let (timeline, events) = services_for(&fixture)
        .pipeline()
        .run_events(&fixture.text)
        .unwrap();
    assert_eq!(events.len(), fixture.expected_events.len());
    assert_eq!(timeline.event_count(), events.len());
}

#[test]
fn unknown_provider_fails_at_startup() {
    let mut config = StorylineConfig::default();
    config.embedding.provider = "word2vec".to_string();
    let err = Services::from_config(&config).err().unwrap();
    assert!(matches!(
        err,
        StorylineError::Embedding(EmbeddingError::UnknownProvider { .. })
    ));
}

#[test]
fn zero_dimensions_are_rejected_before_embedding() {
    let config = StorylineConfig::from_toml("[embedding]\ndimensions = 0").unwrap();
    let err = Services::from_config(&config).err().unwrap();
    assert!(matches!(
        err,
        StorylineError::Config(ConfigError::ValidationFailed { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn filler_sentences_never_become_events(words in prop::collection::vec("[a-z]{3,8}", 1..12)) {
        let services = Services::from_config(&StorylineConfig::default()).unwrap();
        let text = format!("{}.", words.join(" "));
        let timeline = services.pipeline().run(&text).unwrap();
        prop_assert!(timeline.is_empty());
    }
}

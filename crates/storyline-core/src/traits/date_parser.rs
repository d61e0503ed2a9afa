use chrono::NaiveDate;

use crate::models::{DateSettings, SubDate};

/// Natural-language date parsing.
///
/// Both operations are total: a phrase that cannot be read yields `None` or
/// an empty list, never an error.
pub trait IDateParser: Send + Sync {
    /// Parse the whole phrase as one date, filling missing components with
    /// the first day and the first month.
    fn parse(&self, text: &str, settings: &DateSettings) -> Option<NaiveDate>;

    /// Find every parseable date expression inside `text`, left to right.
    fn search_subdates(&self, text: &str, settings: &DateSettings) -> Vec<SubDate>;
}

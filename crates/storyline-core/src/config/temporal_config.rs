use serde::{Deserialize, Serialize};

use crate::models::{DateOrder, DateSettings};

/// Date resolution configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// Order used for ambiguous numeric dates: "mdy", "dmy" or "ymd".
    pub date_order: DateOrder,
    /// Year assumed for phrases without one. Unset means such phrases are
    /// skipped.
    pub default_year: Option<i32>,
}

impl TemporalConfig {
    /// Parser settings derived from this config.
    pub fn settings(&self) -> DateSettings {
        DateSettings {
            order: self.date_order,
            default_year: self.default_year,
        }
    }
}

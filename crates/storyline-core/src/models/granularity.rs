use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DAY_OF_MONTH, DEFAULT_MONTH_OF_YEAR};

/// The coarsest unit of precision a resolved date actually carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    /// Infer granularity from which components look defaulted.
    ///
    /// Heuristic: a day other than the default means the day was specified;
    /// otherwise a month other than the default means the month was. A genuine
    /// "January 1" is therefore reported as `Year`.
    pub fn classify(date: NaiveDate) -> Self {
        if date.day() != DEFAULT_DAY_OF_MONTH {
            Self::Day
        } else if date.month() != DEFAULT_MONTH_OF_YEAR {
            Self::Month
        } else {
            Self::Year
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        }
    }

    /// Whether a date at this granularity names its month.
    pub fn has_month(&self) -> bool {
        matches!(self, Self::Day | Self::Month)
    }

    /// Whether a date at this granularity names its day.
    pub fn has_day(&self) -> bool {
        matches!(self, Self::Day)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

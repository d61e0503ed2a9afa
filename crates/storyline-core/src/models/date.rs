use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Component order used to read ambiguous all-numeric dates such as `06-05-2021`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// Month, day, year (`06-20-2021`).
    #[default]
    Mdy,
    /// Day, month, year (`20-06-2021`).
    Dmy,
    /// Year, month, day (`2021-06-20`), for ISO-style narratives.
    Ymd,
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mdy => "mdy",
            Self::Dmy => "dmy",
            Self::Ymd => "ymd",
        };
        f.write_str(s)
    }
}

impl FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mdy" => Ok(Self::Mdy),
            "dmy" => Ok(Self::Dmy),
            "ymd" => Ok(Self::Ymd),
            other => Err(format!("unknown date order '{other}' (expected mdy, dmy or ymd)")),
        }
    }
}

/// Settings handed to the date parser with every request.
///
/// Missing day and month components always default to the first day and the
/// first month; granularity classification depends on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateSettings {
    pub order: DateOrder,
    /// Year given to phrases that do not name one ("June 15"). When unset,
    /// such phrases do not resolve.
    pub default_year: Option<i32>,
}

impl DateSettings {
    /// Profile for narratives written with ISO-style dates.
    pub fn iso() -> Self {
        Self {
            order: DateOrder::Ymd,
            ..Self::default()
        }
    }
}

/// A parseable date expression found inside a longer date phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubDate {
    pub text: String,
    pub date: NaiveDate,
}

impl SubDate {
    pub fn new(text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            date,
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How display dates are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// "January 05, 2023", "January 2023", "2023".
    #[default]
    Long,
    /// "2023-01-05", "2023-01", "2023".
    Iso,
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => f.write_str("long"),
            Self::Iso => f.write_str("iso"),
        }
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "iso" => Ok(Self::Iso),
            other => Err(format!("unknown date style '{other}' (expected long or iso)")),
        }
    }
}

/// Timeline rendering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub date_style: DateStyle,
}

/// Storyline version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Day-of-month used when a date phrase does not name one.
pub const DEFAULT_DAY_OF_MONTH: u32 = 1;

/// Month-of-year used when a date phrase does not name one.
pub const DEFAULT_MONTH_OF_YEAR: u32 = 1;

/// Label of the catch-all group holding events no topic claimed.
pub const MISCELLANEOUS_LABEL: &str = "MISCELLANEOUS";

/// Prefix of every assigned topic label ("TOPIC 0", "TOPIC 1", ...).
pub const TOPIC_LABEL_PREFIX: &str = "TOPIC";

/// Raw label the density clustering primitive uses for noise points.
pub const NOISE_LABEL: i32 = -1;

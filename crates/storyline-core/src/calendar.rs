//! Month-name lexicon shared by the annotator and the date parser.

/// Regex fragment matching an English month name or its abbreviation,
/// with an optional trailing period. Intended for case-insensitive patterns.
pub const MONTH_NAME_PATTERN: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b\.?";

/// Full month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolve a month name or abbreviation ("Mar", "Sept.", "DECEMBER") to 1..=12.
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.trim().trim_end_matches('.').to_ascii_lowercase();
    if name.len() < 3 {
        return None;
    }
    if name == "sept" {
        return Some(9);
    }
    MONTH_NAMES
        .iter()
        .position(|full| *full == name || (name.len() == 3 && full.starts_with(&name)))
        .map(|idx| idx as u32 + 1)
}

/// Expand a two-digit year: 00–68 land in the 2000s, 69–99 in the 1900s.
pub fn expand_two_digit_year(year: i32) -> i32 {
    match year {
        0..=68 => 2000 + year,
        69..=99 => 1900 + year,
        _ => year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_names_resolve() {
        assert_eq!(month_from_name("January"), Some(1));
        assert_eq!(month_from_name("december"), Some(12));
    }

    #[test]
    fn abbreviations_resolve() {
        assert_eq!(month_from_name("Jan"), Some(1));
        assert_eq!(month_from_name("Aug."), Some(8));
        assert_eq!(month_from_name("Sept"), Some(9));
        assert_eq!(month_from_name("sep"), Some(9));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(month_from_name("Ma"), None);
        assert_eq!(month_from_name("Janu"), None);
        assert_eq!(month_from_name("winter"), None);
    }

    #[test]
    fn two_digit_years_pivot() {
        assert_eq!(expand_two_digit_year(21), 2021);
        assert_eq!(expand_two_digit_year(68), 2068);
        assert_eq!(expand_two_digit_year(69), 1969);
        assert_eq!(expand_two_digit_year(1998), 1998);
    }
}

//! Candidate scoring: denser, longer date expressions are more informative.
//!
//! Both functions here are heuristics and the tie-break order is part of the
//! contract: digits first, then length, then the earliest candidate.

/// `(digit_count, char_length)`, compared lexicographically.
pub type DateScore = (usize, usize);

/// Score a candidate date string.
pub fn date_score(text: &str) -> DateScore {
    let digits = text.chars().filter(char::is_ascii_digit).count();
    (digits, text.chars().count())
}

/// Whether a candidate carries at least one numeral.
pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Return the first item with the maximal score of `text(item)`.
pub fn pick_richest<T, I, F>(items: I, text: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &str,
{
    let mut best: Option<(DateScore, T)> = None;
    for item in items {
        let score = date_score(text(&item));
        let improves = best.as_ref().map_or(true, |(best_score, _)| score > *best_score);
        if improves {
            best = Some((score, item));
        }
    }
    best.map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_outrank_length() {
        assert!(date_score("12/24/2021") > date_score("the winter of 2021"));
    }

    #[test]
    fn length_breaks_digit_ties() {
        assert!(date_score("March 15, 2006") > date_score("15 Mar 2006"));
        assert_eq!(
            pick_richest(vec!["2006", "March 2006"], |s| *s),
            Some("March 2006")
        );
    }

    #[test]
    fn first_candidate_wins_exact_ties() {
        let picked = pick_richest(vec![("a", "June 2000"), ("b", "July 2000")], |c| c.1);
        assert_eq!(picked.map(|c| c.0), Some("a"));
    }

    #[test]
    fn empty_input_has_no_winner() {
        assert_eq!(pick_richest(Vec::<&str>::new(), |s| *s), None);
    }

    #[test]
    fn digit_detection() {
        assert!(has_digit("the 1990s"));
        assert!(!has_digit("that winter"));
    }
}

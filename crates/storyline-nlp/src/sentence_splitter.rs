//! Split narrative text into sentences, keeping byte spans into the input.

/// Words that end with a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mr",
    "mrs", "ms", "dr", "prof", "st", "inc", "co", "corp", "ltd", "vs", "etc", "jr", "sr", "no",
];

/// Characters that may trail a terminal punctuation mark and still belong to
/// the sentence it closes.
fn is_closer(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '"' | '\'' | '’' | '”' | ')' | ']')
}

/// Split text into trimmed sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    split_sentence_spans(text)
        .into_iter()
        .map(|(start, end)| text[start..end].to_string())
        .collect()
}

/// Split text into sentences, returning trimmed `(start, end)` byte spans.
///
/// A boundary is a run of `.`, `!` or `?` (plus closing quotes/brackets)
/// followed by whitespace and a token that can open a sentence, or by the end
/// of the text. Periods after known abbreviations and initials do not split.
pub fn split_sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let len = chars.len();
    let mut spans = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < len {
        let (pos, c) = chars[i];
        if !matches!(c, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < len && is_closer(chars[j].1) {
            j += 1;
        }

        let at_end = j >= len;
        let boundary = at_end
            || (chars[j].1.is_whitespace()
                && opens_sentence(&chars, j)
                && !(c == '.' && ends_with_abbreviation(&text[start..pos])));

        if boundary {
            let end = if at_end { text.len() } else { chars[j].0 };
            push_trimmed(text, start, end, &mut spans);
            start = end;
        }
        i = j;
    }

    // Remaining text that didn't end with punctuation.
    push_trimmed(text, start, text.len(), &mut spans);
    spans
}

/// Whether the first non-whitespace character at or after `from` can start a
/// sentence. The end of the text counts as a start.
fn opens_sentence(chars: &[(usize, char)], from: usize) -> bool {
    match chars[from..].iter().map(|(_, c)| *c).find(|c| !c.is_whitespace()) {
        None => true,
        Some(c) => c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '“' | '‘' | '(' | '['),
    }
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(word) = segment.split_whitespace().last() else {
        return false;
    };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

    // Initials ("J.") and dotted forms ("e.g", "U.S").
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    if word.contains('.')
        && word
            .split('.')
            .all(|part| part.chars().count() <= 2 && part.chars().all(char::is_alphabetic))
    {
        return true;
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    let slice = &text[start..end];
    let leading = slice.len() - slice.trim_start().len();
    let trimmed = slice.trim();
    if trimmed.chars().count() > 2 {
        let s = start + leading;
        spans.push((s, s + trimmed.len()));
    }
}

//! Fuzzy resolution of an answer hint against a question's options.
//!
//! Strategies are tried from most to least precise; the first that matches
//! wins. The final fallback means resolution never fails for a non-empty
//! option list.

/// Which strategy picked the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Case-insensitive equality.
    Exact,
    /// One string contains the other, case-insensitively.
    Substring,
    /// A hint word longer than two characters appears in the option.
    Token,
    /// Nothing matched; the first option was taken.
    Fallback,
}

/// The resolved option and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub answer: &'a str,
    pub kind: MatchKind,
}

/// Resolve `hint` to one of `options`, or `None` if `options` is empty.
pub fn resolve<'a, S: AsRef<str>>(options: &'a [S], hint: &str) -> Option<Resolution<'a>> {
    let first = options.first()?.as_ref();
    let hint = hint.to_lowercase();
    let lowered: Vec<(&str, String)> = options
        .iter()
        .map(|o| (o.as_ref(), o.as_ref().to_lowercase()))
        .collect();

    let found = |kind: MatchKind, answer: &'a str| Some(Resolution { answer, kind });

    if let Some((answer, _)) = lowered.iter().find(|(_, lower)| *lower == hint) {
        return found(MatchKind::Exact, *answer);
    }

    if let Some((answer, _)) = lowered
        .iter()
        .find(|(_, lower)| hint.contains(lower.as_str()) || lower.contains(hint.as_str()))
    {
        return found(MatchKind::Substring, *answer);
    }

    let words: Vec<&str> = hint
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect();
    if let Some((answer, _)) = lowered
        .iter()
        .find(|(_, lower)| words.iter().any(|w| lower.contains(w)))
    {
        return found(MatchKind::Token, *answer);
    }

    found(MatchKind::Fallback, first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn answer<'a>(options: &'a [String], hint: &str) -> Option<&'a str> {
        resolve(options, hint).map(|r| r.answer)
    }

    #[test]
    fn exact_match_ignores_case() {
        let options = opts(&["London", "Paris", "Berlin"]);
        let r = resolve(&options, "paris").unwrap();
        assert_eq!(r.answer, "Paris");
        assert_eq!(r.kind, MatchKind::Exact);
    }

    #[test]
    fn exact_beats_earlier_substring() {
        // "Paris Hilton" contains the hint, but the exact option comes first in precedence.
        let options = opts(&["Paris Hilton", "Paris"]);
        assert_eq!(answer(&options, "Paris"), Some("Paris"));
    }

    #[test]
    fn substring_in_either_direction() {
        let options = opts(&["He is reading a book", "She is cooking"]);
        let r = resolve(&options, "reading a book").unwrap();
        assert_eq!(r.answer, "He is reading a book");
        assert_eq!(r.kind, MatchKind::Substring);

        let options = opts(&["cook", "read"]);
        let r = resolve(&options, "they read quietly").unwrap();
        assert_eq!(r.answer, "read");
        assert_eq!(r.kind, MatchKind::Substring);
    }

    #[test]
    fn token_overlap_skips_short_words() {
        let options = opts(&["at the station", "in the meeting room"]);
        let r = resolve(&options, "to meeting by it").unwrap();
        assert_eq!(r.answer, "in the meeting room");
        assert_eq!(r.kind, MatchKind::Token);

        // Two-character words never count.
        let r = resolve(&options, "at xx").unwrap();
        assert_eq!(r.kind, MatchKind::Fallback);
    }

    #[test]
    fn token_overlap_prefers_option_order() {
        let options = opts(&["blue car", "red car"]);
        let r = resolve(&options, "red car parked").unwrap();
        assert_eq!(r.answer, "red car");
        assert_eq!(r.kind, MatchKind::Substring);

        // "car" is in both; the first option wins.
        let r = resolve(&options, "fast car here").unwrap();
        assert_eq!(r.answer, "blue car");
        assert_eq!(r.kind, MatchKind::Token);
    }

    #[test]
    fn no_match_falls_back_to_first() {
        let options = opts(&["a", "b", "c"]);
        assert_eq!(answer(&options, "zzz-no-match"), Some("a"));

        let options = opts(&["x", "y"]);
        let r = resolve(&options, "zzz-no-match").unwrap();
        assert_eq!(r.answer, "x");
        assert_eq!(r.kind, MatchKind::Fallback);
    }

    #[test]
    fn empty_hint_matches_first_by_containment() {
        let options = opts(&["one", "two"]);
        assert_eq!(answer(&options, ""), Some("one"));
    }

    #[test]
    fn empty_options_resolve_to_none() {
        let options: Vec<String> = vec![];
        assert!(resolve(&options, "anything").is_none());
    }
}

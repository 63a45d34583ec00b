//! Korean scripture reference parsing.
//!
//! Recognizes references like `요한복음3:16-18` or `창 1:1` anywhere in a
//! query string.

use std::sync::LazyLock;

use regex::Regex;

use super::books::{self, BookEntry};

/// Hangul syllable run, then `chapter:verse` or `chapter:start-end`.
///
/// Applied to the query with all whitespace removed. Numbers are ASCII digits,
/// one to three of them.
#[allow(clippy::expect_used)]
static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\x{AC00}-\x{D7AF}]+)([0-9]{1,3}):([0-9]{1,3}(?:-[0-9]{1,3})?)")
        .expect("valid regex: RE_REFERENCE")
});

/// A reference recognized in a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Book name exactly as typed.
    pub book_alias: String,
    /// Resolved book, `None` when the alias is not in the table.
    pub book: Option<&'static BookEntry>,
    /// Chapter number as typed.
    pub chapter: String,
    /// `16` or `16-18`.
    pub verse_spec: String,
}

impl ParsedReference {
    /// Whether the book alias resolved to a known book.
    pub const fn is_resolved(&self) -> bool {
        self.book.is_some()
    }

    /// Endpoint lookup key, e.g. `john/3:16-18`.
    pub fn lookup_key(&self) -> Option<String> {
        self.book
            .map(|book| format!("{}/{}:{}", book.key, self.chapter, self.verse_spec))
    }

    /// Human-readable reference using the book's primary Korean name, e.g. `요한복음 3:16-18`.
    pub fn display_reference(&self) -> Option<String> {
        self.book
            .map(|book| format!("{} {}:{}", book.display_name(), self.chapter, self.verse_spec))
    }
}

/// Parse the first Korean scripture reference in `query`.
///
/// Returns `None` when nothing matches. A match whose book alias is unknown
/// is still returned, with `book` left empty.
pub fn parse_reference(query: &str) -> Option<ParsedReference> {
    let cleaned: String = query.chars().filter(|c| !c.is_whitespace()).collect();
    let caps = RE_REFERENCE.captures(&cleaned)?;

    let book_alias = caps.get(1)?.as_str().to_string();
    let book = books::find_by_korean_alias(&book_alias);
    if book.is_none() {
        tracing::debug!("Reference matched but book alias {book_alias:?} is unknown");
    }

    Some(ParsedReference {
        book,
        book_alias,
        chapter: caps.get(2)?.as_str().to_string(),
        verse_spec: caps.get(3)?.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_range() {
        let r = parse_reference("요한복음3:16-18").unwrap();
        assert_eq!(r.book_alias, "요한복음");
        assert_eq!(r.chapter, "3");
        assert_eq!(r.verse_spec, "16-18");
        assert_eq!(r.book.unwrap().english_name, "John");
    }

    #[test]
    fn test_parse_single_verse() {
        let r = parse_reference("창1:1").unwrap();
        assert_eq!(r.chapter, "1");
        assert_eq!(r.verse_spec, "1");
        assert_eq!(r.book.unwrap().key, "ge");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let r = parse_reference("  요한 복음 3 : 16 - 18 ").unwrap();
        assert_eq!(r.book_alias, "요한복음");
        assert_eq!(r.verse_spec, "16-18");
    }

    #[test]
    fn test_no_reference() {
        assert!(parse_reference("hello world").is_none());
        assert!(parse_reference("John 3:16").is_none());
        assert!(parse_reference("요한복음").is_none());
        assert!(parse_reference("").is_none());
    }

    #[test]
    fn test_verse_lists_are_not_supported() {
        // Only the leading verse survives; the list tail is outside the pattern.
        let r = parse_reference("시편23:1,3,5").unwrap();
        assert_eq!(r.verse_spec, "1");
        assert!(parse_reference("시편23:,3").is_none());
    }

    #[test]
    fn test_unknown_alias_still_parses() {
        let r = parse_reference("가나다3:16").unwrap();
        assert_eq!(r.book_alias, "가나다");
        assert!(!r.is_resolved());
        assert!(r.lookup_key().is_none());
        assert!(r.display_reference().is_none());
    }

    #[test]
    fn test_first_korean_run_before_digits_wins() {
        let r = parse_reference("오늘은 로마서8:28 말씀").unwrap();
        assert_eq!(r.book_alias, "오늘은로마서");
        assert!(!r.is_resolved());

        let r = parse_reference("read 롬8:28 today").unwrap();
        assert_eq!(r.book_alias, "롬");
        assert_eq!(r.book.unwrap().key, "rom");
    }

    #[test]
    fn test_digit_in_alias_falls_back_to_trailing_run() {
        // `요한1서` cannot match as a whole; the run after the digit is taken.
        let r = parse_reference("요한1서3:16").unwrap();
        assert_eq!(r.book_alias, "서");
        assert!(!r.is_resolved());
    }

    #[test]
    fn test_digit_counts_are_capped() {
        let r = parse_reference("시편119:1055").unwrap();
        assert_eq!(r.chapter, "119");
        assert_eq!(r.verse_spec, "105");
        assert!(parse_reference("시편1190:1").is_none());
    }

    #[test]
    fn test_lookup_key_and_display() {
        let r = parse_reference("요3:16-18").unwrap();
        assert_eq!(r.lookup_key().as_deref(), Some("john/3:16-18"));
        assert_eq!(r.display_reference().as_deref(), Some("요한복음 3:16-18"));
    }

    #[test]
    fn test_fullwidth_digits_do_not_match() {
        assert!(parse_reference("요한복음３:１６").is_none());
    }
}

//! Extract verses from an ibibles quote page.
//!
//! The page marks each verse with `<small>book:verse</small>` followed by the
//! verse text and a `<br>`:
//!
//! ```text
//! <small>43:16</small> 하나님이 세상을 이처럼 사랑하사 ... <br>
//! <small>43:17</small> 하나님이 그 아들을 세상에 보내신 것은 ... <br>
//! ```

use std::sync::LazyLock;

use scraper::{node::Node, ElementRef, Html, Selector};

use crate::services::scripture::Verse;

#[allow(clippy::expect_used)]
static SMALL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("small").expect("valid selector: small"));

/// Extract every verse marked in `html`, in document order.
///
/// A page without markers yields an empty vector.
pub fn extract_verses(html: &str) -> Vec<Verse> {
    let doc = Html::parse_document(html);
    doc.select(&SMALL).map(verse_from_marker).collect()
}

/// Build a verse from its `<small>` marker and the text nodes after it.
///
/// The text ends at the next `<br>` or the next verse marker, whichever
/// comes first.
fn verse_from_marker(marker: ElementRef<'_>) -> Verse {
    let number = marker.text().collect::<String>().trim().to_string();

    let mut text = String::new();
    for sibling in marker.next_siblings() {
        match sibling.value() {
            Node::Element(el)
                if el.name().eq_ignore_ascii_case("br") || el.name().eq_ignore_ascii_case("small") =>
            {
                break
            }
            Node::Text(t) => text.push_str(t.trim()),
            _ => {}
        }
    }

    Verse { number, text }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const JOHN_3_16_18: &str = "<html><body>\
        <small>43:16</small> 하나님이 세상을 이처럼 사랑하사 <br>\
        <small>43:17</small> 하나님이 그 아들을 세상에 보내신 것은 <br>\
        <small>43:18</small> 저를 믿는 자는 심판을 받지 아니하는 것이요 <br>\
        </body></html>";

    #[test]
    fn test_extracts_each_marker() {
        let verses = extract_verses(JOHN_3_16_18);
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[0], Verse::new("43:16", "하나님이 세상을 이처럼 사랑하사"));
        assert_eq!(verses[2].number, "43:18");
    }

    #[test]
    fn test_text_is_trimmed_and_stops_at_br() {
        for verse in extract_verses(JOHN_3_16_18) {
            assert_eq!(verse.text, verse.text.trim());
            assert!(!verse.text.contains("43:"));
            assert!(!verse.text.is_empty());
        }
    }

    #[test]
    fn test_last_verse_without_br_runs_to_end() {
        let verses = extract_verses("<small> 1:1 </small> 태초에 하나님이 천지를 창조하시니라");
        assert_eq!(verses, vec![Verse::new("1:1", "태초에 하나님이 천지를 창조하시니라")]);
    }

    #[test]
    fn test_text_pieces_are_joined_without_separator() {
        let verses = extract_verses("<small>19:1</small> 하늘이 <i>하나님의</i> 영광을 <br>");
        assert_eq!(verses[0].text, "하늘이영광을");
    }

    #[test]
    fn test_adjacent_markers_without_br() {
        let verses = extract_verses("<small>43:16</small> 첫째 절 <small>43:17</small> 둘째 절");
        assert_eq!(
            verses,
            vec![Verse::new("43:16", "첫째 절"), Verse::new("43:17", "둘째 절")]
        );
    }

    #[test]
    fn test_marker_without_text() {
        let verses = extract_verses("<small>43:16</small><br><small>43:17</small><br>");
        assert_eq!(verses.len(), 2);
        assert!(verses.iter().all(|v| v.text.is_empty()));
    }

    #[test]
    fn test_no_markers() {
        assert!(extract_verses("<html><body>Verse not found</body></html>").is_empty());
        assert!(extract_verses("").is_empty());
    }
}

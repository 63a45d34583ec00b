//! Markdown quote callout rendering.
//!
//! Output looks like:
//!
//! ```text
//! > [!quote]+ 요한복음 3:16-17
//! > 16 For God so loved the world...
//! > 17 For God did not send his Son...
//! ```
//!
//! The header line keeps a trailing space after the reference.

use std::fmt;
use std::str::FromStr;

use crate::constants::callout::{HEADER_MARKER, LINE_PREFIX};
use crate::services::scripture::Verse;

/// How continuation lines of a multi-verse callout are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalloutStyle {
    /// Every body line carries the `> ` prefix.
    #[default]
    Quoted,
    /// Only the first body line carries the prefix. Later verses fall outside
    /// the callout when rendered.
    Compat,
}

impl CalloutStyle {
    /// Returns the configuration name of this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quoted => "quoted",
            Self::Compat => "compat",
        }
    }
}

impl fmt::Display for CalloutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalloutStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quoted" => Ok(Self::Quoted),
            "compat" => Ok(Self::Compat),
            _ => Err(()),
        }
    }
}

/// Render verses as `{number} {text}` lines joined by newlines.
pub fn format_verses(verses: &[Verse]) -> String {
    verses
        .iter()
        .map(|v| format!("{} {}", v.display_number(), v.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap an already formatted body in a quote callout.
pub fn format_callout(body: &str, display_reference: &str, style: CalloutStyle) -> String {
    let header = format!("{LINE_PREFIX}{HEADER_MARKER} {display_reference} ");
    let quoted = match style {
        CalloutStyle::Compat => format!("{LINE_PREFIX}{body}"),
        CalloutStyle::Quoted => body
            .split('\n')
            .map(|line| format!("{LINE_PREFIX}{line}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    format!("{header}\n{quoted}")
}

/// Render verses straight into a callout.
pub fn format(verses: &[Verse], display_reference: &str, style: CalloutStyle) -> String {
    format_callout(&format_verses(verses), display_reference, style)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn john_3() -> Vec<Verse> {
        vec![
            Verse::new("43:16", "For God so loved the world"),
            Verse::new("43:17", "For God did not send his Son"),
        ]
    }

    #[test]
    fn test_single_verse_callout() {
        let verses = [Verse::new("43:16", "For God so loved...")];
        let expected = "> [!quote]+ 요한복음 3:16 \n> 16 For God so loved...";
        assert_eq!(format(&verses, "요한복음 3:16", CalloutStyle::Quoted), expected);
        assert_eq!(format(&verses, "요한복음 3:16", CalloutStyle::Compat), expected);
    }

    #[test]
    fn test_body_lines() {
        assert_eq!(
            format_verses(&john_3()),
            "16 For God so loved the world\n17 For God did not send his Son"
        );
        assert_eq!(format_verses(&[]), "");
    }

    #[test]
    fn test_quoted_prefixes_every_line() {
        let out = format(&john_3(), "요한복음 3:16-17", CalloutStyle::Quoted);
        assert_eq!(
            out,
            "> [!quote]+ 요한복음 3:16-17 \n> 16 For God so loved the world\n> 17 For God did not send his Son"
        );
        assert!(out.lines().all(|l| l.starts_with("> ")));
    }

    #[test]
    fn test_compat_prefixes_first_line_only() {
        let out = format(&john_3(), "요한복음 3:16-17", CalloutStyle::Compat);
        assert_eq!(
            out,
            "> [!quote]+ 요한복음 3:16-17 \n> 16 For God so loved the world\n17 For God did not send his Son"
        );
    }

    #[test]
    fn test_displayed_number_round_trips() {
        for raw in ["43:16", "1:1", "66:22:21", ":7"] {
            let verse = Verse::new(raw, "text");
            let body = format_verses(std::slice::from_ref(&verse));
            let shown = body.split(' ').next().unwrap();
            assert_eq!(shown, raw.rsplit(':').next().unwrap());
        }
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("quoted".parse(), Ok(CalloutStyle::Quoted));
        assert_eq!(" Compat ".parse(), Ok(CalloutStyle::Compat));
        assert_eq!("fancy".parse::<CalloutStyle>(), Err(()));
        assert_eq!(CalloutStyle::Compat.to_string(), "compat");
    }
}

//! Scripture lookup service.
//!
//! This module provides the verse type shared by the pipeline stages and the
//! trait for remote verse sources.

use async_trait::async_trait;

use crate::bible::ParsedReference;
use crate::error::Result;

/// A single verse with its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Verse marker as found in the payload. Often `book:verse`, e.g. `43:16`.
    pub number: String,
    /// Verse text, trimmed.
    pub text: String,
}

impl Verse {
    /// Create a new verse.
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
        }
    }

    /// Verse number with any `book:` prefix removed.
    pub fn display_number(&self) -> &str {
        self.number.rsplit(':').next().unwrap_or(&self.number)
    }
}

/// Trait for remote verse sources.
///
/// Implementations return the raw markup for a reference; extraction is a
/// separate step so a source can be swapped without touching the parser.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// Fetch the raw payload for a resolved reference.
    ///
    /// # Errors
    /// `UnresolvedBook` when the reference has no book, `Network` or
    /// `Remote` when the request fails.
    async fn fetch(&self, reference: &ParsedReference) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_number_strips_book_prefix() {
        assert_eq!(Verse::new("43:16", "").display_number(), "16");
        assert_eq!(Verse::new("16", "").display_number(), "16");
        assert_eq!(Verse::new("kor:43:16", "").display_number(), "16");
        assert_eq!(Verse::new("43:", "").display_number(), "");
    }
}

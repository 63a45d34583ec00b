//! Query-to-suggestion pipeline.
//!
//! A query runs parse → fetch → extract → format in a single call and hands
//! back everything needed to render the callout later, so no state is kept
//! between the suggestion and selection steps.

use crate::bible::parse_reference;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::ibibles::{extract_verses, IbiblesClient};
use crate::services::callout::{self, CalloutStyle};
use crate::services::scripture::{Verse, VerseSource};

/// A candidate passage for the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Verse lines as shown in the suggestion list.
    pub body: String,
    /// Canonical reference for the callout header, e.g. `요한복음 3:16-18`.
    pub display_reference: String,
    /// Verses the body was built from.
    pub verses: Vec<Verse>,
}

/// Turns live query text into passage suggestions.
pub struct VerseSuggester<S> {
    source: S,
    style: CalloutStyle,
}

impl VerseSuggester<IbiblesClient> {
    /// Create a suggester backed by the ibibles endpoint.
    pub fn from_config(config: &Config) -> Self {
        Self::new(IbiblesClient::new(config), config.callout_style)
    }
}

impl<S: VerseSource> VerseSuggester<S> {
    /// Create a suggester over any verse source.
    pub const fn new(source: S, style: CalloutStyle) -> Self {
        Self { source, style }
    }

    /// Look up the passage named in `query`.
    ///
    /// # Errors
    /// `ReferenceMismatch` or `UnresolvedBook` for queries that do not name a
    /// known passage, `Network`/`Remote` when the fetch fails, and
    /// `EmptyPassage` when the payload holds no verses.
    pub async fn lookup(&self, query: &str) -> Result<Suggestion> {
        let reference = parse_reference(query)
            .ok_or_else(|| Error::ReferenceMismatch(query.to_string()))?;
        let display_reference = reference
            .display_reference()
            .ok_or_else(|| Error::UnresolvedBook(reference.book_alias.clone()))?;

        tracing::debug!("Looking up {display_reference} for query {query:?}");
        let html = self.source.fetch(&reference).await?;

        let verses = extract_verses(&html);
        if verses.is_empty() {
            return Err(Error::EmptyPassage(display_reference));
        }

        Ok(Suggestion {
            body: callout::format_verses(&verses),
            display_reference,
            verses,
        })
    }

    /// Suggestions for the current query: zero or one entries.
    ///
    /// Never fails. Every error is logged and yields an empty list.
    pub async fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        match self.lookup(query).await {
            Ok(suggestion) => vec![suggestion],
            Err(e) if e.is_query_error() => {
                tracing::debug!("No suggestion for {query:?}: {e}");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Verse lookup failed for {query:?}: {e}");
                Vec::new()
            }
        }
    }

    /// Render the chosen suggestion as the text to insert.
    pub fn choose(&self, suggestion: &Suggestion) -> String {
        callout::format_callout(&suggestion.body, &suggestion.display_reference, self.style)
    }
}

//! Service modules for the lookup pipeline.
//!
//! Each stage after parsing lives here: the verse source seam, callout
//! rendering, the suggestion pipeline and the editing surface.

pub mod callout;
pub mod editor;
pub mod scripture;
pub mod suggest;

pub use suggest::{Suggestion, VerseSuggester};

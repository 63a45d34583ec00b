//! `korbible` - Korean scripture references to Markdown quote callouts.
//!
//! Type a reference such as `요한복음3:16-18`, get back a `[!quote]` callout
//! holding the verse text, ready to insert at the cursor.

pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod ibibles;
pub mod services;
pub mod settings;

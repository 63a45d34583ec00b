//! Korean book table and scripture reference parsing.

pub mod books;
pub mod reference;

pub use books::{find_by_english, find_by_key, find_by_korean_alias, BookEntry, BOOKS};
pub use reference::{parse_reference, ParsedReference};

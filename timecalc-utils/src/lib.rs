/// Environment flag helpers.
pub mod env;
/// Shared formatting helpers.
pub mod formatting;
/// Pure parser helpers.
pub mod parse;

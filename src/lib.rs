/// Random password generation from a selection of character classes.
pub mod generator;
/// The additive strength heuristic.
pub mod strength;
/// Breach lookups against a k-anonymity range service, only the first five characters of the
/// SHA-1 hash ever leave the process.
/// https://haveibeenpwned.com/API/v3#SearchingPwnedPasswordsByRange
pub mod breach;
/// The state of one interactive session.
pub mod session;
pub mod clipboard;
pub mod settings;

pub mod error;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
mod test_helpers;

//! Fixed-capacity text fields.
//!
//! Every text field of a definition has a hard maximum length. Input longer
//! than the maximum is cut at the last UTF-8 character boundary that fits,
//! without any diagnostic. Generated artifacts rely on these bounds.

use std::fmt;
use std::ops::Deref;

/// Maximum length of a definition name, in bytes.
pub const NAME_MAX: usize = 63;
/// Maximum length of a description, in bytes.
pub const DESCRIPTION_MAX: usize = 255;
/// Maximum length of an output symbol, in bytes.
pub const SYMBOL_MAX: usize = 63;
/// Maximum length of a string value, in bytes.
pub const STRING_VALUE_MAX: usize = 127;

/// A string that never holds more than `MAX` bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedString<const MAX: usize>(String);

impl<const MAX: usize> BoundedString<MAX> {
    /// Copy `text`, truncating it to at most `MAX` bytes.
    pub fn new(text: &str) -> Self {
        Self(truncate(text, MAX).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace the contents, truncating as in [`new`](Self::new).
    pub fn set(&mut self, text: &str) {
        self.0.clear();
        self.0.push_str(truncate(text, MAX));
    }
}

impl<const MAX: usize> Deref for BoundedString<MAX> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl<const MAX: usize> fmt::Display for BoundedString<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MAX: usize> From<&str> for BoundedString<MAX> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<const MAX: usize> PartialEq<str> for BoundedString<MAX> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<const MAX: usize> PartialEq<&str> for BoundedString<MAX> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Longest prefix of `text` that fits in `max` bytes without splitting a char.
pub fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

//! Bounded-length name field
//!
//! Names live in a fixed 50-byte slot that includes its terminator, so at most
//! `MAX_NAME_LEN` bytes of text survive. Truncation is applied on construction
//! and never splits a UTF-8 character.

use std::fmt;
use std::ops::Deref;

/// Maximum number of bytes a stored name may hold
pub const MAX_NAME_LEN: usize = 49;

/// A name that is guaranteed to fit the record's name slot
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundedName(String);

impl BoundedName {
    /// Build a name from arbitrary input, cutting at the first NUL and then
    /// at the byte bound
    pub fn new(input: &str) -> Self {
        let text = match input.find('\0') {
            Some(nul) => &input[..nul],
            None => input,
        };

        let end = floor_char_boundary(text, MAX_NAME_LEN);
        Self(text[..end].to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Largest char boundary in `s` that is `<= max`
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

impl Deref for BoundedName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoundedName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for BoundedName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BoundedName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for BoundedName {
    // Delegates to str so width/alignment flags are honoured
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_kept() {
        let name = BoundedName::new("Alice");
        assert_eq!(name, "Alice");
    }

    #[test]
    fn test_long_ascii_truncated_to_max() {
        let input = "x".repeat(80);
        let name = BoundedName::new(&input);
        assert_eq!(name.len(), MAX_NAME_LEN);
        assert!(input.starts_with(name.as_str()));
    }

    #[test]
    fn test_exact_max_not_truncated() {
        let input = "y".repeat(MAX_NAME_LEN);
        assert_eq!(BoundedName::new(&input).as_str(), input);
    }

    #[test]
    fn test_multibyte_not_split() {
        // 48 ASCII bytes then a 2-byte char straddling the bound
        let input = format!("{}é", "a".repeat(48));
        let name = BoundedName::new(&input);
        assert_eq!(name.len(), 48);
        assert!(input.starts_with(name.as_str()));
    }

    #[test]
    fn test_embedded_nul_terminates() {
        let name = BoundedName::new("Bob\0ignored");
        assert_eq!(name, "Bob");
        assert!(!name.contains('\0'));
    }

    #[test]
    fn test_display_honours_width() {
        let name = BoundedName::new("Bob");
        assert_eq!(format!("[{:<5}]", name), "[Bob  ]");
    }
}

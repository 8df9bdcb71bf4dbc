//! Bounded CPU model label

use std::ffi::c_char;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const CAPACITY: usize = 256;

/// CPU model label with a fixed byte capacity
///
/// Holds at most [`ModelName::MAX_LEN`] bytes of UTF-8 so that a C copy of
/// [`ModelName::CAPACITY`] bytes always has room for its terminator.
/// Construction never fails: longer input is cut at the last character
/// boundary that fits, and everything from an interior NUL onward is dropped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelName {
    bytes: [u8; CAPACITY],
    len: usize,
    truncated: bool,
}

impl ModelName {
    /// Size of the C `model` field, terminator included
    pub const CAPACITY: usize = CAPACITY;

    /// Longest label that fits alongside the terminator
    pub const MAX_LEN: usize = Self::CAPACITY - 1;

    /// The empty label used when the host has no model string
    pub const fn empty() -> Self {
        Self {
            bytes: [0; Self::CAPACITY],
            len: 0,
            truncated: false,
        }
    }

    /// Build a label from an OS-provided string
    pub fn new(raw: &str) -> Self {
        let raw = match raw.find('\0') {
            Some(nul) => &raw[..nul],
            None => raw,
        };
        let raw = raw.trim();

        let mut end = raw.len().min(Self::MAX_LEN);
        while !raw.is_char_boundary(end) {
            end -= 1;
        }

        let mut bytes = [0; Self::CAPACITY];
        bytes[..end].copy_from_slice(&raw.as_bytes()[..end]);

        Self {
            bytes,
            len: end,
            truncated: end < raw.len(),
        }
    }

    /// Read a label back out of a NUL-terminated C buffer
    ///
    /// Invalid UTF-8 is replaced rather than rejected. A buffer without any
    /// NUL is read to its full length.
    pub fn from_c_chars(chars: &[c_char; Self::CAPACITY]) -> Self {
        let raw: Vec<u8> = chars
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        Self::new(&String::from_utf8_lossy(&raw))
    }

    /// Copy into a zero-padded C buffer
    pub fn to_c_chars(&self) -> [c_char; Self::CAPACITY] {
        let mut out = [0; Self::CAPACITY];
        for (dst, &src) in out.iter_mut().zip(&self.bytes[..self.len]) {
            *dst = src as c_char;
        }
        out
    }

    pub fn as_str(&self) -> &str {
        // Only ever filled from a &str cut on a char boundary
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the source string was longer than [`ModelName::MAX_LEN`]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Default for ModelName {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for ModelName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelName").field(&self.as_str()).finish()
    }
}

impl Serialize for ModelName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_kept_verbatim() {
        let name = ModelName::new("AMD Ryzen 7 5800X 8-Core Processor");
        assert_eq!(name.as_str(), "AMD Ryzen 7 5800X 8-Core Processor");
        assert!(!name.is_truncated());
    }

    #[test]
    fn test_whitespace_trimmed() {
        let name = ModelName::new("  Apple M2\n");
        assert_eq!(name.as_str(), "Apple M2");
    }

    #[test]
    fn test_long_name_truncated_to_max_len() {
        let raw = "x".repeat(400);
        let name = ModelName::new(&raw);
        assert_eq!(name.len(), ModelName::MAX_LEN);
        assert!(name.is_truncated());
    }

    #[test]
    fn test_exact_max_len_not_truncated() {
        let raw = "y".repeat(ModelName::MAX_LEN);
        let name = ModelName::new(&raw);
        assert_eq!(name.len(), 255);
        assert!(!name.is_truncated());
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 254 ASCII bytes then a 3-byte char straddling the limit
        let raw = format!("{}€tail", "a".repeat(254));
        let name = ModelName::new(&raw);
        assert_eq!(name.len(), 254);
        assert!(name.as_str().chars().all(|c| c == 'a'));
        assert!(name.is_truncated());
    }

    #[test]
    fn test_interior_nul_ends_label() {
        let name = ModelName::new("Cortex-A72\0garbage");
        assert_eq!(name.as_str(), "Cortex-A72");
    }

    #[test]
    fn test_c_buffer_always_terminated() {
        let name = ModelName::new(&"z".repeat(1000));
        let chars = name.to_c_chars();
        assert_eq!(chars[ModelName::MAX_LEN], 0);
        assert_eq!(chars[ModelName::MAX_LEN - 1], b'z' as c_char);
    }

    #[test]
    fn test_c_buffer_zero_padded() {
        let chars = ModelName::new("ab").to_c_chars();
        assert_eq!(chars[0], b'a' as c_char);
        assert_eq!(chars[1], b'b' as c_char);
        assert!(chars[2..].iter().all(|&c| c == 0));
    }

    #[test]
    fn test_from_c_chars_reads_up_to_nul() {
        let original = ModelName::new("Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz");
        let restored = ModelName::from_c_chars(&original.to_c_chars());
        assert_eq!(restored, original);
    }

    #[test]
    fn test_from_c_chars_without_terminator() {
        let chars = [b'q' as c_char; ModelName::CAPACITY];
        let name = ModelName::from_c_chars(&chars);
        assert_eq!(name.len(), ModelName::MAX_LEN);
        assert!(name.is_truncated());
    }

    #[test]
    fn test_empty_default() {
        let name = ModelName::default();
        assert!(name.is_empty());
        assert!(name.to_c_chars().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ModelName::new("Apple M1")).unwrap();
        assert_eq!(json, "\"Apple M1\"");

        let back: ModelName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "Apple M1");
    }
}

//! Growable string representation.
//!
//! [`ByteString`] is the owned, self-sizing counterpart to the fixed-buffer
//! routines in [`fixed`](super::fixed). It stores no explicit terminator; for
//! traversal uniformity every operation reads the contents as if
//! NUL-terminated, so the observable semantics of each operation match its
//! fixed-buffer counterpart bit for bit.

use super::fixed;

/// An owned, dynamically sized byte string.
///
/// The container manages its own storage and reports its own length; callers
/// never supply capacity. An interior `0x00` byte (only present if pushed
/// explicitly) ends the logical content early, exactly as it would in a
/// fixed buffer.
#[derive(Debug, Clone, Default)]
pub struct ByteString {
    bytes: Vec<u8>,
}

impl ByteString {
    /// Creates an empty string.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates a string holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Returns the logical length: the number of bytes preceding the first
    /// NUL, or the full storage length when none exists.
    pub fn len(&self) -> usize {
        fixed::strlen(&self.bytes)
    }

    /// Returns `true` if the logical content is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the raw stored bytes (including any bytes past an interior
    /// NUL).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the raw stored bytes mutably, for in-place transforms.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Appends a single byte to the storage.
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Clears the storage.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Overwrites `self` with the logical content of `src`.
    ///
    /// Resizes the storage to exactly `src.len()` bytes, then overwrites
    /// each position element-wise. Observationally identical to plain
    /// assignment.
    pub fn assign(&mut self, src: &ByteString) {
        let len = src.len();
        self.bytes.resize(len, 0);
        for (i, byte) in self.bytes.iter_mut().enumerate() {
            *byte = src.bytes[i];
        }
    }

    /// Appends the logical content of `src` to `self` using the container's
    /// native append; the length updates automatically.
    pub fn append(&mut self, src: &ByteString) {
        let len = src.len();
        self.bytes.extend_from_slice(&src.bytes[..len]);
    }
}

impl PartialEq for ByteString {
    /// Logical-content equality, matching [`fixed::streq`]: position by
    /// position, terminating together with no prior mismatch.
    fn eq(&self, other: &Self) -> bool {
        fixed::streq(&self.bytes, &other.bytes)
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_reports_logical_length() {
        assert_eq!(ByteString::from("hello").len(), 5);
        assert_eq!(ByteString::new().len(), 0);
        assert!(ByteString::new().is_empty());
    }

    #[test]
    fn test_len_stops_at_interior_nul() {
        let s = ByteString::from_bytes(b"ab\0cd");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_eq_matches_fixed_semantics() {
        assert_eq!(ByteString::from("World"), ByteString::from("World"));
        assert_ne!(ByteString::from("Hello!"), ByteString::from("Hell!"));
        assert_ne!(ByteString::from("ab"), ByteString::from("abc"));
        // Content past an interior NUL is storage, not content.
        assert_eq!(
            ByteString::from_bytes(b"ab\0xy"),
            ByteString::from_bytes(b"ab\0\0\0")
        );
    }

    #[test]
    fn test_assign() {
        let src = ByteString::from("copy me");
        let mut dest = ByteString::from("previous contents, longer");
        dest.assign(&src);
        assert_eq!(dest, src);
        assert_eq!(dest.len(), 7);
    }

    #[test]
    fn test_assign_into_empty() {
        let src = ByteString::from("abc");
        let mut dest = ByteString::new();
        dest.assign(&src);
        assert_eq!(dest, src);
    }

    #[test]
    fn test_append() {
        let mut dest = ByteString::from("Hello");
        dest.append(&ByteString::from(" World"));
        assert_eq!(dest, ByteString::from("Hello World"));
        assert_eq!(dest.len(), 11);
    }

    #[test]
    fn test_append_skips_bytes_past_interior_nul() {
        let mut dest = ByteString::from("x");
        dest.append(&ByteString::from_bytes(b"yz\0junk"));
        assert_eq!(dest, ByteString::from("xyz"));
    }

    #[test]
    fn test_representations_agree() {
        // The growable overloads must match fixed-buffer observable output.
        let a = ByteString::from("Hello");
        let b = ByteString::from("Help");
        assert_eq!(a == b, fixed::streq(b"Hello\0", b"Help\0"));

        let mut buf = [0u8; 16];
        fixed::strcpy(&mut buf, b"Hello\0");
        fixed::strcat(&mut buf, b" World\0");

        let mut grow = ByteString::new();
        grow.assign(&ByteString::from("Hello"));
        grow.append(&ByteString::from(" World"));

        assert_eq!(grow.as_bytes(), &buf[..fixed::strlen(&buf)]);
    }

    #[test]
    fn test_in_place_transforms_via_as_bytes_mut() {
        let mut s = ByteString::from("Hello");
        fixed::strrev(s.as_bytes_mut());
        assert_eq!(s, ByteString::from("olleH"));
        fixed::strupr(s.as_bytes_mut());
        assert_eq!(s, ByteString::from("OLLEH"));
    }
}

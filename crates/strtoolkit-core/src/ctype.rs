//! Character classification and case conversion.
//!
//! Single-byte, ASCII-only helpers backing the in-place case-conversion
//! routines. C locale only.

/// Returns `true` if `c` is an alphabetic character (`[A-Za-z]`).
#[inline]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` if `c` is an uppercase letter (`[A-Z]`).
#[inline]
pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Returns `true` if `c` is a lowercase letter (`[a-z]`).
#[inline]
pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Converts `c` to uppercase if it is a lowercase letter.
///
/// Non-letters map to themselves.
#[inline]
pub fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - 32 } else { c }
}

/// Converts `c` to lowercase if it is an uppercase letter.
///
/// Non-letters map to themselves.
#[inline]
pub fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + 32 } else { c }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha(b'A'));
        assert!(is_alpha(b'Z'));
        assert!(is_alpha(b'a'));
        assert!(is_alpha(b'z'));
        assert!(!is_alpha(b'0'));
        assert!(!is_alpha(b' '));
        assert!(!is_alpha(0));
    }

    #[test]
    fn test_is_upper_lower() {
        for c in b'A'..=b'Z' {
            assert!(is_upper(c));
            assert!(!is_lower(c));
        }
        for c in b'a'..=b'z' {
            assert!(is_lower(c));
            assert!(!is_upper(c));
        }
    }

    #[test]
    fn test_to_upper_lower() {
        assert_eq!(to_upper(b'a'), b'A');
        assert_eq!(to_upper(b'z'), b'Z');
        assert_eq!(to_upper(b'A'), b'A');
        assert_eq!(to_upper(b'0'), b'0');
        assert_eq!(to_lower(b'A'), b'a');
        assert_eq!(to_lower(b'Z'), b'z');
        assert_eq!(to_lower(b'a'), b'a');
        assert_eq!(to_lower(b'5'), b'5');
    }

    #[test]
    fn exhaustive_invariants() {
        for c in 0u8..=255 {
            assert_eq!(
                is_alpha(c),
                is_upper(c) || is_lower(c),
                "alpha invariant failed for {c}"
            );
            assert_eq!(
                to_upper(c) != c,
                is_lower(c),
                "to_upper must change exactly the lowercase letters, failed for {c}"
            );
            assert_eq!(
                to_lower(c) != c,
                is_upper(c),
                "to_lower must change exactly the uppercase letters, failed for {c}"
            );
            assert_eq!(
                to_lower(to_upper(c)),
                to_lower(c),
                "round-trip failed for {c}"
            );
            assert_eq!(
                to_upper(to_lower(c)),
                to_upper(c),
                "round-trip failed for {c}"
            );
        }
    }
}

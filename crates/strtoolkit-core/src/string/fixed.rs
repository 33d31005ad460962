//! Fixed-buffer string operations: strlen, streq, strneq, strcpy, strncpy,
//! strcat, strncat, strchr, strrev, strupr, strlwr.
//!
//! These are safe Rust implementations operating on byte slices that
//! represent NUL-terminated C strings. Strings are `&[u8]` slices where a NUL
//! byte (`0x00`) marks the logical end of the string; the slice length is the
//! caller-declared capacity. A slice with no NUL is treated as terminated at
//! the slice boundary, so every scan is bounded.
//!
//! Mutating operations always leave the destination with exactly one
//! terminator at the end of its logical content. Destination-capacity
//! contracts are checked: violating one panics with a message naming the
//! operation and the shortfall.

use crate::ctype;

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Scans `s` for the first `0x00` byte and returns its index. If no NUL is
/// found, returns the full slice length.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Compares two NUL-terminated byte strings for equality.
///
/// Walks both strings position by position, short-circuiting `false` at the
/// first mismatching byte. Two strings are equal iff they reach their
/// terminator at the same offset with no prior mismatch: equal length and
/// equal content.
pub fn streq(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    loop {
        let ca = if i < a.len() { a[i] } else { 0 };
        let cb = if i < b.len() { b[i] } else { 0 };

        if ca != cb {
            return false;
        }
        if ca == 0 {
            return true;
        }
        i += 1;
    }
}

/// Compares at most `n` bytes of two NUL-terminated byte strings for equality.
///
/// At each position a mismatch returns `false` immediately; reaching `a`'s
/// terminator returns `true` (the mismatch check already ruled out `b`
/// differing there). If `n` positions pass without either event the strings
/// are bounded-equal regardless of what follows: `n` bounds the comparison
/// window, it does not enforce full-string equality.
pub fn strneq(a: &[u8], b: &[u8], n: usize) -> bool {
    for i in 0..n {
        let ca = if i < a.len() { a[i] } else { 0 };
        let cb = if i < b.len() { b[i] } else { 0 };

        if ca != cb {
            return false;
        }
        if ca == 0 {
            return true;
        }
    }
    true
}

/// Copies a NUL-terminated string from `src` into `dest`.
///
/// Writes every content byte of `src` starting at offset 0, then exactly one
/// terminator. Returns the number of bytes written (including the NUL).
///
/// # Panics
///
/// Panics if `dest` is too small to hold the source string plus NUL.
pub fn strcpy(dest: &mut [u8], src: &[u8]) -> usize {
    let src_len = strlen(src);
    assert!(
        dest.len() > src_len,
        "strcpy: destination buffer too small ({} bytes for {} byte string + NUL)",
        dest.len(),
        src_len
    );
    dest[..src_len].copy_from_slice(&src[..src_len]);
    dest[src_len] = 0;
    src_len + 1
}

/// Copies at most `n` content bytes from `src` into `dest`, stopping early
/// at `src`'s terminator, then writes exactly one terminator.
///
/// Unlike C `strncpy`, this never pads the remaining destination capacity
/// with NUL bytes, and it always terminates the result. Bytes beyond the
/// written terminator keep their prior values.
///
/// Returns the number of content bytes copied (not counting the NUL).
///
/// # Panics
///
/// Panics if `dest` is too small to hold `min(n, strlen(src))` bytes plus NUL.
pub fn strncpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let copy_len = strlen(src).min(n);
    assert!(
        dest.len() > copy_len,
        "strncpy: destination buffer too small ({} bytes for {} byte string + NUL)",
        dest.len(),
        copy_len
    );
    dest[..copy_len].copy_from_slice(&src[..copy_len]);
    dest[copy_len] = 0;
    copy_len
}

/// Appends `src` to the end of the NUL-terminated string in `dest`.
///
/// Finds the terminator in `dest`, writes `src`'s content there, then a
/// fresh terminator. Returns the total length of the resulting string (not
/// counting the NUL).
///
/// # Panics
///
/// Panics if `dest` is too small to hold the combined result plus NUL.
pub fn strcat(dest: &mut [u8], src: &[u8]) -> usize {
    let dest_len = strlen(dest);
    let src_len = strlen(src);
    let total = dest_len + src_len;
    assert!(
        dest.len() > total,
        "strcat: destination buffer too small ({} bytes for {} byte result + NUL)",
        dest.len(),
        total,
    );
    dest[dest_len..total].copy_from_slice(&src[..src_len]);
    dest[total] = 0;
    total
}

/// Appends at most `n` content bytes from `src` to the NUL-terminated string
/// in `dest`, stopping early at `src`'s terminator.
///
/// Always terminates the result with exactly one NUL and never pads beyond
/// it. Returns the total length of the resulting string (not counting the
/// NUL).
///
/// # Panics
///
/// Panics if `dest` is too small to hold the combined result plus NUL.
pub fn strncat(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let dest_len = strlen(dest);
    let src_len = strlen(src).min(n);
    let total = dest_len + src_len;
    assert!(
        dest.len() > total,
        "strncat: destination buffer too small ({} bytes for {} byte result + NUL)",
        dest.len(),
        total,
    );
    dest[dest_len..total].copy_from_slice(&src[..src_len]);
    dest[total] = 0;
    total
}

/// Locates the first occurrence of `c` in the NUL-terminated string `s`.
///
/// `c` is compared as an unsigned byte. Returns the index of the first match
/// within the logical content, or `None` if not found before the terminator.
/// If `c` is `0`, returns the index of the terminator itself.
pub fn strchr(s: &[u8], c: u8) -> Option<usize> {
    let len = strlen(s);
    if c == 0 {
        return Some(len);
    }
    s[..len].iter().position(|&b| b == c)
}

/// Reverses the logical content of `s` in place.
///
/// Two-index walk from both ends toward the center, swapping until the
/// indices meet or cross. The terminator does not move. Zero- and one-length
/// strings are untouched.
pub fn strrev(s: &mut [u8]) {
    let len = strlen(s);
    if len == 0 {
        return;
    }
    let mut i = 0;
    let mut j = len - 1;
    while i < j {
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Converts the logical content of `s` to uppercase in place.
///
/// Each byte is mapped through [`ctype::to_upper`]; non-alphabetic bytes
/// pass through unchanged.
pub fn strupr(s: &mut [u8]) {
    let len = strlen(s);
    for byte in &mut s[..len] {
        *byte = ctype::to_upper(*byte);
    }
}

/// Converts the logical content of `s` to lowercase in place.
///
/// Each byte is mapped through [`ctype::to_lower`]; non-alphabetic bytes
/// pass through unchanged.
pub fn strlwr(s: &mut [u8]) {
    let len = strlen(s);
    for byte in &mut s[..len] {
        *byte = ctype::to_lower(*byte);
    }
}

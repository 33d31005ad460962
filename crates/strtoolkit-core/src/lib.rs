//! # strtoolkit-core
//!
//! Primitive string-manipulation routines reimplemented from scratch as safe
//! Rust, over two representations of a string:
//!
//! - **fixed buffers**: caller-owned byte slices modeling NUL-terminated C
//!   strings, where the byte `0x00` is the sentinel marking logical end;
//! - **growable strings**: [`ByteString`], an owned byte container that
//!   manages its own storage and reports its own length.
//!
//! Every operation is a stateless, single-pass transformation of its
//! arguments. The crate performs no I/O and no printing; capacity contracts
//! on the mutating fixed-buffer operations are checked and fail with a
//! descriptive panic rather than being left undefined.

#![deny(unsafe_code)]

pub mod ctype;
pub mod string;

pub use string::fixed::{
    strcat, strchr, strcpy, streq, strlen, strlwr, strncat, strncpy, strneq, strrev, strupr,
};
pub use string::growable::ByteString;

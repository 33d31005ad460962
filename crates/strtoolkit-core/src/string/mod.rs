//! String operations over both representations.
//!
//! `fixed` holds the NUL-terminated byte-slice routines; `growable` holds
//! [`ByteString`](growable::ByteString) and its equivalent operations. Both
//! expose the same observable semantics for every operation offered on both.

pub mod fixed;
pub mod growable;

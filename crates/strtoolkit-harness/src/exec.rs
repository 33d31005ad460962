//! Fixture case execution.
//!
//! Dispatches a fixture's `function` name and JSON `inputs` onto the core
//! string primitives and formats the observable result deterministically:
//! counts as decimal, booleans as `true`/`false`, search results as
//! `Some(i)`/`None`, and mutated buffers as full byte dumps so that
//! termination and no-padding behavior are visible in the output.

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use strtoolkit_core::ByteString;
use strtoolkit_core::string::fixed;
use thiserror::Error;

/// Fill byte for destination buffers. Never a value the operations write,
/// so untouched capacity stays visible in byte dumps.
const POISON: u8 = 0xAA;

/// Errors raised while decoding fixture inputs.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("missing input field: {0}")]
    MissingInput(String),
    #[error("invalid input field `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Executes one fixture case against the core library.
///
/// Contract violations panic inside the core; those panics are caught and
/// surfaced as `panic: <message>` output so fixtures can pin down the
/// checked-contract paths without aborting the run.
pub fn run_case(function: &str, inputs: &Value) -> Result<String, ExecError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| execute(function, inputs)));
    match result {
        Ok(outcome) => outcome,
        Err(payload) => Ok(format!("panic: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    }
}

fn execute(function: &str, inputs: &Value) -> Result<String, ExecError> {
    match function {
        "strlen" => {
            let s = terminated_field(inputs, "s")?;
            Ok(fixed::strlen(&s).to_string())
        }
        "streq" => {
            let a = terminated_field(inputs, "a")?;
            let b = terminated_field(inputs, "b")?;
            Ok(fixed::streq(&a, &b).to_string())
        }
        "strneq" => {
            let a = terminated_field(inputs, "a")?;
            let b = terminated_field(inputs, "b")?;
            let n = usize_field(inputs, "n")?;
            Ok(fixed::strneq(&a, &b, n).to_string())
        }
        "strcpy" => {
            let src = terminated_field(inputs, "src")?;
            let mut dest = dest_buffer(inputs)?;
            fixed::strcpy(&mut dest, &src);
            Ok(format!("{dest:?}"))
        }
        "strncpy" => {
            let src = terminated_field(inputs, "src")?;
            let n = usize_field(inputs, "n")?;
            let mut dest = dest_buffer(inputs)?;
            fixed::strncpy(&mut dest, &src, n);
            Ok(format!("{dest:?}"))
        }
        "strcat" => {
            let src = terminated_field(inputs, "src")?;
            let mut dest = seeded_dest_buffer(inputs)?;
            fixed::strcat(&mut dest, &src);
            Ok(format!("{dest:?}"))
        }
        "strncat" => {
            let src = terminated_field(inputs, "src")?;
            let n = usize_field(inputs, "n")?;
            let mut dest = seeded_dest_buffer(inputs)?;
            fixed::strncat(&mut dest, &src, n);
            Ok(format!("{dest:?}"))
        }
        "strchr" => {
            let s = terminated_field(inputs, "s")?;
            let c = byte_field(inputs, "c")?;
            Ok(format!("{:?}", fixed::strchr(&s, c)))
        }
        "strrev" => {
            let mut s = terminated_field(inputs, "s")?;
            fixed::strrev(&mut s);
            Ok(format!("{s:?}"))
        }
        "strupr" => {
            let mut s = terminated_field(inputs, "s")?;
            fixed::strupr(&mut s);
            Ok(format!("{s:?}"))
        }
        "strlwr" => {
            let mut s = terminated_field(inputs, "s")?;
            fixed::strlwr(&mut s);
            Ok(format!("{s:?}"))
        }
        "bytestring_len" => {
            let s = bytestring_field(inputs, "s")?;
            Ok(s.len().to_string())
        }
        "bytestring_eq" => {
            let a = bytestring_field(inputs, "a")?;
            let b = bytestring_field(inputs, "b")?;
            Ok((a == b).to_string())
        }
        "bytestring_assign" => {
            let src = bytestring_field(inputs, "src")?;
            let mut dest = bytestring_field(inputs, "dest")?;
            dest.assign(&src);
            Ok(format!("{:?}", dest.as_bytes()))
        }
        "bytestring_append" => {
            let src = bytestring_field(inputs, "src")?;
            let mut dest = bytestring_field(inputs, "dest")?;
            dest.append(&src);
            Ok(format!("{:?}", dest.as_bytes()))
        }
        other => Err(ExecError::UnknownFunction(other.to_string())),
    }
}

/// Decodes a byte-string input: a JSON string (taken as its UTF-8 bytes) or
/// an array of byte values.
fn bytes_field(inputs: &Value, field: &str) -> Result<Vec<u8>, ExecError> {
    let value = inputs
        .get(field)
        .ok_or_else(|| ExecError::MissingInput(field.to_string()))?;
    match value {
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .filter(|&b| b <= 255)
                    .map(|b| b as u8)
                    .ok_or_else(|| ExecError::InvalidInput {
                        field: field.to_string(),
                        reason: format!("expected byte value, got {item}"),
                    })
            })
            .collect(),
        other => Err(ExecError::InvalidInput {
            field: field.to_string(),
            reason: format!("expected string or byte array, got {other}"),
        }),
    }
}

/// Decodes a byte-string input and appends the terminator, yielding a
/// fixed buffer sized exactly to its content.
fn terminated_field(inputs: &Value, field: &str) -> Result<Vec<u8>, ExecError> {
    let mut bytes = bytes_field(inputs, field)?;
    bytes.push(0);
    Ok(bytes)
}

fn bytestring_field(inputs: &Value, field: &str) -> Result<ByteString, ExecError> {
    Ok(ByteString::from_bytes(&bytes_field(inputs, field)?))
}

fn usize_field(inputs: &Value, field: &str) -> Result<usize, ExecError> {
    let value = inputs
        .get(field)
        .ok_or_else(|| ExecError::MissingInput(field.to_string()))?;
    value
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| ExecError::InvalidInput {
            field: field.to_string(),
            reason: format!("expected non-negative count, got {value}"),
        })
}

/// Decodes a single byte: a number in `0..=255` or a one-character ASCII
/// string.
fn byte_field(inputs: &Value, field: &str) -> Result<u8, ExecError> {
    let value = inputs
        .get(field)
        .ok_or_else(|| ExecError::MissingInput(field.to_string()))?;
    match value {
        Value::Number(_) => value
            .as_u64()
            .filter(|&b| b <= 255)
            .map(|b| b as u8)
            .ok_or_else(|| ExecError::InvalidInput {
                field: field.to_string(),
                reason: format!("expected byte value, got {value}"),
            }),
        Value::String(s) if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        other => Err(ExecError::InvalidInput {
            field: field.to_string(),
            reason: format!("expected byte value or one-character string, got {other}"),
        }),
    }
}

/// Builds a poison-filled destination buffer of `dest_len` bytes.
fn dest_buffer(inputs: &Value) -> Result<Vec<u8>, ExecError> {
    let dest_len = usize_field(inputs, "dest_len")?;
    Ok(vec![POISON; dest_len])
}

/// Builds a poison-filled destination buffer of `dest_len` bytes seeded with
/// the terminated content of the `dest` input, for the concatenate family.
fn seeded_dest_buffer(inputs: &Value) -> Result<Vec<u8>, ExecError> {
    let seed = bytes_field(inputs, "dest")?;
    let dest_len = usize_field(inputs, "dest_len")?;
    if seed.len() >= dest_len {
        return Err(ExecError::InvalidInput {
            field: "dest".to_string(),
            reason: format!(
                "initial content of {} bytes plus terminator does not fit in dest_len {}",
                seed.len(),
                dest_len
            ),
        });
    }
    let mut buf = vec![POISON; dest_len];
    buf[..seed.len()].copy_from_slice(&seed);
    buf[seed.len()] = 0;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn executes_strlen() {
        let out = run_case("strlen", &json!({"s": "Hello"})).expect("exec");
        assert_eq!(out, "5");
    }

    #[test]
    fn executes_strlen_from_byte_array() {
        let out = run_case("strlen", &json!({"s": [72, 105]})).expect("exec");
        assert_eq!(out, "2");
    }

    #[test]
    fn executes_strncpy_without_padding() {
        let out = run_case("strncpy", &json!({"src": "hi", "n": 5, "dest_len": 6})).expect("exec");
        assert_eq!(out, "[104, 105, 0, 170, 170, 170]");
    }

    #[test]
    fn surfaces_contract_violations_as_panic_output() {
        let out = run_case("strcpy", &json!({"src": "Hello", "dest_len": 5})).expect("exec");
        assert_eq!(
            out,
            "panic: strcpy: destination buffer too small (5 bytes for 5 byte string + NUL)"
        );
    }

    #[test]
    fn rejects_unknown_function() {
        let err = run_case("strdup", &json!({})).unwrap_err();
        assert!(matches!(err, ExecError::UnknownFunction(_)));
    }

    #[test]
    fn rejects_missing_input() {
        let err = run_case("strlen", &json!({})).unwrap_err();
        assert!(matches!(err, ExecError::MissingInput(_)));
    }

    #[test]
    fn rejects_oversized_byte_value() {
        let err = run_case("strlen", &json!({"s": [300]})).unwrap_err();
        assert!(matches!(err, ExecError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_seed_that_cannot_fit() {
        let err = run_case("strcat", &json!({"dest": "abcd", "src": "e", "dest_len": 4}))
            .unwrap_err();
        assert!(matches!(err, ExecError::InvalidInput { .. }));
    }

    #[test]
    fn strchr_accepts_character_and_numeric_forms() {
        let by_char = run_case("strchr", &json!({"s": "Hello", "c": "e"})).expect("exec");
        let by_code = run_case("strchr", &json!({"s": "Hello", "c": 101})).expect("exec");
        assert_eq!(by_char, "Some(1)");
        assert_eq!(by_code, by_char);
    }
}

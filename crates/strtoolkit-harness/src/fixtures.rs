//! Fixture loading and management.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Errors raised while loading a fixture set.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested.
    pub function: String,
    /// Contract the case exercises (e.g. "bounded copy never pads").
    pub contract: String,
    /// Input parameters. Byte strings encode as JSON strings or arrays of
    /// byte values; counts encode as numbers.
    pub inputs: serde_json::Value,
    /// Expected output (serialized as string for comparison).
    pub expected_output: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

fn case(
    name: &str,
    function: &str,
    contract: &str,
    inputs: serde_json::Value,
    expected_output: &str,
) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        function: function.to_string(),
        contract: contract.to_string(),
        inputs,
        expected_output: expected_output.to_string(),
    }
}

/// The builtin fixture set covering every operation of the core library.
///
/// Destination buffers are poison-filled with `0xAA` (170) by the executor,
/// so the expected byte dumps also pin down the no-padding behavior of the
/// bounded copy/concatenate operations.
pub fn builtin_set() -> FixtureSet {
    FixtureSet {
        version: "v1".to_string(),
        family: "string".to_string(),
        cases: vec![
            case(
                "strlen_hello",
                "strlen",
                "length counts bytes before the terminator",
                json!({"s": "Hello"}),
                "5",
            ),
            case(
                "strlen_empty",
                "strlen",
                "length of the empty string is zero",
                json!({"s": ""}),
                "0",
            ),
            case(
                "streq_equal",
                "streq",
                "equality requires equal length and content",
                json!({"a": "Hello", "b": "Hello"}),
                "true",
            ),
            case(
                "streq_prefix_mismatch",
                "streq",
                "equality requires equal length and content",
                json!({"a": "Hello!", "b": "Hell!"}),
                "false",
            ),
            case(
                "strneq_window_holds",
                "strneq",
                "bound limits the comparison window",
                json!({"a": "Hello", "b": "Help", "n": 3}),
                "true",
            ),
            case(
                "strneq_window_breaks",
                "strneq",
                "bound limits the comparison window",
                json!({"a": "Hello", "b": "Help", "n": 4}),
                "false",
            ),
            case(
                "strneq_shared_terminator",
                "strneq",
                "shared terminator before the bound compares equal",
                json!({"a": "abcde", "b": "abcde", "n": 10}),
                "true",
            ),
            case(
                "strcpy_basic",
                "strcpy",
                "copy writes content plus one terminator",
                json!({"src": "Hello", "dest_len": 8}),
                "[72, 101, 108, 108, 111, 0, 170, 170]",
            ),
            case(
                "strcpy_capacity_violation",
                "strcpy",
                "capacity violations fail loudly",
                json!({"src": "Hello", "dest_len": 5}),
                "panic: strcpy: destination buffer too small (5 bytes for 5 byte string + NUL)",
            ),
            case(
                "strncpy_truncates",
                "strncpy",
                "bounded copy stops at the bound and terminates",
                json!({"src": "HelloWorld", "n": 5, "dest_len": 8}),
                "[72, 101, 108, 108, 111, 0, 170, 170]",
            ),
            case(
                "strncpy_no_padding",
                "strncpy",
                "bounded copy never pads past its terminator",
                json!({"src": "hi", "n": 5, "dest_len": 6}),
                "[104, 105, 0, 170, 170, 170]",
            ),
            case(
                "strcat_basic",
                "strcat",
                "concatenate appends at the existing terminator",
                json!({"dest": "Hello", "src": " World", "dest_len": 12}),
                "[72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100, 0]",
            ),
            case(
                "strncat_truncates",
                "strncat",
                "bounded concatenate stops at the bound and terminates",
                json!({"dest": "hi", "src": "there", "n": 3, "dest_len": 8}),
                "[104, 105, 116, 104, 101, 0, 170, 170]",
            ),
            case(
                "strchr_found",
                "strchr",
                "search returns the first matching offset",
                json!({"s": "Hello", "c": "e"}),
                "Some(1)",
            ),
            case(
                "strchr_absent",
                "strchr",
                "search returns absent when no match precedes the terminator",
                json!({"s": "Hello", "c": "z"}),
                "None",
            ),
            case(
                "strchr_terminator",
                "strchr",
                "the terminator itself is a valid search target",
                json!({"s": "Hello", "c": 0}),
                "Some(5)",
            ),
            case(
                "strrev_basic",
                "strrev",
                "reverse swaps from both ends toward the center",
                json!({"s": "Hello"}),
                "[111, 108, 108, 101, 72, 0]",
            ),
            case(
                "strrev_empty",
                "strrev",
                "reversing the empty string is a no-op",
                json!({"s": ""}),
                "[0]",
            ),
            case(
                "strupr_basic",
                "strupr",
                "uppercase maps letters only",
                json!({"s": "Hello World!"}),
                "[72, 69, 76, 76, 79, 32, 87, 79, 82, 76, 68, 33, 0]",
            ),
            case(
                "strlwr_basic",
                "strlwr",
                "lowercase maps letters only",
                json!({"s": "Hello World!"}),
                "[104, 101, 108, 108, 111, 32, 119, 111, 114, 108, 100, 33, 0]",
            ),
            case(
                "bytestring_len",
                "bytestring_len",
                "growable length matches fixed-buffer length",
                json!({"s": "World"}),
                "5",
            ),
            case(
                "bytestring_eq",
                "bytestring_eq",
                "growable equality matches fixed-buffer equality",
                json!({"a": "World", "b": "World"}),
                "true",
            ),
            case(
                "bytestring_assign",
                "bytestring_assign",
                "growable copy is observationally plain assignment",
                json!({"dest": "previous", "src": "copy me"}),
                "[99, 111, 112, 121, 32, 109, 101]",
            ),
            case(
                "bytestring_append",
                "bytestring_append",
                "growable concatenate uses the native append",
                json!({"dest": "Hello", "src": " World"}),
                "[72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_round_trips_through_json() {
        let set = builtin_set();
        let json = set.to_json().expect("serialize");
        let parsed = FixtureSet::from_json(&json).expect("parse");
        assert_eq!(parsed.cases.len(), set.cases.len());
        assert_eq!(parsed.family, "string");
    }

    #[test]
    fn builtin_set_covers_every_operation() {
        let set = builtin_set();
        for function in [
            "strlen",
            "streq",
            "strneq",
            "strcpy",
            "strncpy",
            "strcat",
            "strncat",
            "strchr",
            "strrev",
            "strupr",
            "strlwr",
            "bytestring_len",
            "bytestring_eq",
            "bytestring_assign",
            "bytestring_append",
        ] {
            assert!(
                set.cases.iter().any(|c| c.function == function),
                "no builtin case for {function}"
            );
        }
    }
}

//! Minimal line diff for verification output.

/// Renders a unified-style diff of expected vs actual output.
pub fn render_diff(expected: &str, actual: &str) -> String {
    let mut out = String::new();
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => break,
            (exp, act) => {
                if exp == act {
                    if let Some(line) = exp {
                        out.push_str("  ");
                        out.push_str(line);
                        out.push('\n');
                    }
                } else {
                    if let Some(line) = exp {
                        out.push_str("- ");
                        out.push_str(line);
                        out.push('\n');
                    }
                    if let Some(line) = act {
                        out.push_str("+ ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_output_has_no_markers() {
        let diff = render_diff("5", "5");
        assert_eq!(diff, "  5\n");
    }

    #[test]
    fn mismatch_shows_both_sides() {
        let diff = render_diff("true", "false");
        assert_eq!(diff, "- true\n+ false\n");
    }

    #[test]
    fn missing_actual_line_is_marked() {
        let diff = render_diff("a\nb", "a");
        assert_eq!(diff, "  a\n- b\n");
    }
}

//! Shared helpers for hydration integration tests: scenario manifests and
//! readable failure output.

use std::fmt::Write;

pub mod scenarios;

pub use scenarios::{SCENARIOS_FORMAT_V1, Scenario, ScenarioManifest, WalkMode, load_scenarios};

const CONTEXT_LINES: usize = 2;
const MISSING: &str = "<missing>";

/// Escape control characters and quotes so a node description fits on one
/// line of assertion output.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' => {
                let _ = write!(out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Render the first divergence between two line lists with a little context.
///
/// Returns an empty string when the lists are equal.
pub fn diff_lines<E: AsRef<str>, A: AsRef<str>>(expected: &[E], actual: &[A]) -> String {
    let expected: Vec<&str> = expected.iter().map(AsRef::as_ref).collect();
    let actual: Vec<&str> = actual.iter().map(AsRef::as_ref).collect();
    let line = |lines: &[&str], i: usize| -> String {
        lines
            .get(i)
            .map(|l| escape_text(l))
            .unwrap_or_else(|| MISSING.to_string())
    };

    let total = expected.len().max(actual.len());
    let Some(first) = (0..total).find(|&i| expected.get(i) != actual.get(i)) else {
        return String::new();
    };

    let mut out = String::new();
    let start = first.saturating_sub(CONTEXT_LINES);
    let end = (first + CONTEXT_LINES + 1).min(total);
    let _ = writeln!(out, "first difference at line {}:", first + 1);
    for i in start..end {
        let marker = if i == first { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {:>3} expected: {}", i + 1, line(&expected, i));
        let _ = writeln!(out, "{marker} {:>3}   actual: {}", i + 1, line(&actual, i));
    }
    let _ = writeln!(
        out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

/// `dom::describe` for each node; `None` entries render as `<missing>`.
pub fn describe_all(dom: &dom::Dom, nodes: &[Option<dom::NodeId>]) -> Vec<String> {
    nodes
        .iter()
        .map(|id| match id {
            Some(id) => dom::describe(dom, *id),
            None => MISSING.to_string(),
        })
        .collect()
}

//! Logic-body normalization for display.

use regex::Regex;
use std::sync::LazyLock;

/// `await` as a standalone word. Identifiers that merely contain the word
/// (e.g. `awaited`, `no_await`) must be left alone.
static AWAIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bawait\b").expect("static regex must compile"));

static MULTI_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

/// Converts a raw multi-line logic fragment into a single display line.
///
/// Applied in fixed order: every standalone `await` keyword is removed,
/// exactly one trailing `;` is stripped from the end of the fragment
/// (trailing whitespace ignored), then all whitespace runs collapse to
/// single spaces and the result is trimmed. The output never contains a
/// newline. For well-formed fragments (at most one trailing terminator)
/// a second pass changes nothing; a doubled terminator like `Run();;`
/// loses one `;` per pass.
pub fn normalize_action(raw: &str) -> String {
    let without_await = AWAIT_RE.replace_all(raw, "");

    let trimmed = without_await.trim_end();
    let without_terminator = trimmed.strip_suffix(';').unwrap_or(trimmed);

    MULTI_WS_RE
        .replace_all(without_terminator, " ")
        .trim()
        .to_string()
}

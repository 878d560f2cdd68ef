//! Locating the dispatch block inside the source text.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::ExtractError;

/// Opening of the dispatch construct: a `switch` keyword, a parenthesized
/// expression, and the opening brace.
static SWITCH_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"switch\s*\([^)]*\)\s*\{").expect("static regex must compile")
});

/// Terminal marker: the default branch label ends the command groups.
static DEFAULT_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"default\s*:").expect("static regex must compile"));

/// Returns the text span strictly between the first `switch (...) {` opening
/// and the first `default:` label that follows it.
///
/// The span is where all command groups live; the caller segments it further.
/// Fails with [`ExtractError::BlockNotFound`] when either marker is missing,
/// before any output could be produced.
pub fn locate_dispatch_block(source: &str) -> Result<&str, ExtractError> {
    let open = SWITCH_OPEN_RE
        .find(source)
        .ok_or(ExtractError::BlockNotFound)?;

    let rest = &source[open.end()..];
    let terminal = DEFAULT_LABEL_RE
        .find(rest)
        .ok_or(ExtractError::BlockNotFound)?;

    debug!(
        start = open.end(),
        len = terminal.start(),
        "located dispatch block"
    );
    Ok(&rest[..terminal.start()])
}

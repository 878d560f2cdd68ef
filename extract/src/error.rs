//! Typed errors for dispatch-block extraction.

/// Typed error for dispatch-block extraction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The dispatch block could not be located in the source text.
    #[error(
        "could not locate the command dispatch block: expected a `switch (...) {{` opening \
         followed by a `default:` branch; the source file layout has likely changed"
    )]
    BlockNotFound,

    /// A label group parsed to zero command names, such as a bare `case "/":`.
    ///
    /// The whole run fails rather than emitting a blank table row; `group`
    /// is the 1-based position of the offending group in the block.
    #[error("command group {group} contains no command names")]
    MalformedGroup {
        /// 1-based position of the group within the dispatch block.
        group: usize,
    },
}

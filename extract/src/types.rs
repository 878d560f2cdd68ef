//! Data model for extracted command documentation.

/// One documented chat command group: a primary command, its aliases, and
/// the display-ready action text.
///
/// Entries are built once per run, in the order their groups appear in the
/// dispatch block, and are never mutated afterwards.
///
/// # Examples
///
/// ```
/// use dispatch_docs_extract::CommandEntry;
///
/// let entry = CommandEntry::new("help", vec!["?".to_string()], "OpenHelp()");
/// assert_eq!(entry.primary, "help");
/// assert_eq!(entry.aliases, vec!["?"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// First command name of the group, without the leading slash.
    pub primary: String,
    /// Remaining names of the group, in source order. Duplicates are kept.
    pub aliases: Vec<String>,
    /// Single-line, whitespace-collapsed rendering of the group's logic body.
    pub action: String,
}

impl CommandEntry {
    /// Creates an entry from already-normalized parts.
    pub fn new(primary: impl Into<String>, aliases: Vec<String>, action: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            aliases,
            action: action.into(),
        }
    }
}

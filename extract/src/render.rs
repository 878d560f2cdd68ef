//! Markdown rendering for extracted command entries.

use crate::types::CommandEntry;

/// Renders the ordered entries as a Markdown command reference table.
///
/// One data row per entry: the primary command slash-prefixed and bold,
/// aliases as slash-prefixed inline code joined with `, ` (the literal text
/// `None` when the group has no aliases), and the normalized action wrapped
/// in a triple-backtick fence. Pipe characters inside action text are passed
/// through unescaped.
pub fn render_markdown(entries: &[CommandEntry]) -> String {
    let mut out = String::new();

    out.push_str("# Command Documentation\n\n");
    out.push_str("| Command | Aliases | Action / Function |\n");
    out.push_str("| :--- | :--- | :--- |\n");

    for entry in entries {
        let aliases = if entry.aliases.is_empty() {
            "None".to_string()
        } else {
            entry
                .aliases
                .iter()
                .map(|alias| format!("`/{alias}`"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!(
            "| **/{}** | {aliases} | ```{}``` |\n",
            entry.primary, entry.action
        ));
    }

    out
}

//! Segmenting the dispatch block into command groups.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::normalize::normalize_action;
use crate::types::CommandEntry;

/// One command label: `case "/<name>":`. The capture is the name between
/// the slash and the closing quote, which may be empty for a bare `case "/":`.
static CASE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"case\s+"/([^"]*)"\s*:"#).expect("static regex must compile"));

/// A raw (command-group, logic-body) segment, before name validation and
/// body normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGroup {
    /// Captured command names, label order, empty captures included.
    pub labels: Vec<String>,
    /// Text between the group's last label and the next group (or block end).
    pub body: String,
}

/// Splits the dispatch block into raw groups.
///
/// A maximal run of consecutive case labels (nothing but whitespace between
/// them) forms one group; its body runs from the last label of the run to the
/// first label of the next group, or to the end of the block for the final
/// group. Bodies are trimmed but otherwise uninterpreted. Segment order
/// equals source order.
pub fn segment_groups(block: &str) -> Vec<RawGroup> {
    let mut groups: Vec<RawGroup> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    let mut last_label_end = 0usize;

    for caps in CASE_LABEL_RE.captures_iter(block) {
        let label = caps.get(0).expect("capture group 0 always exists");
        let gap = &block[last_label_end..label.start()];

        if !labels.is_empty() && !gap.trim().is_empty() {
            // The gap holds logic text, so this label starts a new group and
            // the gap is the previous group's body.
            groups.push(RawGroup {
                labels: std::mem::take(&mut labels),
                body: gap.trim().to_string(),
            });
        }

        labels.push(caps[1].to_string());
        last_label_end = label.end();
    }

    if !labels.is_empty() {
        groups.push(RawGroup {
            labels,
            body: block[last_label_end..].trim().to_string(),
        });
    }

    debug!(groups = groups.len(), "segmented dispatch block");
    groups
}

/// Extracts the non-empty command names of a group, in label order.
///
/// An empty capture (a bare `case "/":`) contributes no name; it is dropped
/// with a warning, and only dooms the group when no real name remains.
fn command_names(group: &RawGroup, position: usize) -> Vec<String> {
    group
        .labels
        .iter()
        .filter(|name| {
            if name.is_empty() {
                warn!(group = position, "discarding empty command label");
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Parses the dispatch block into ordered [`CommandEntry`] values.
///
/// Empty-name labels are discarded (see [`command_names`]); a group left
/// with zero command names fails the whole run with
/// [`ExtractError::MalformedGroup`] naming the group's 1-based position.
pub fn parse_entries(block: &str) -> Result<Vec<CommandEntry>, ExtractError> {
    let mut entries = Vec::new();

    for (index, group) in segment_groups(block).iter().enumerate() {
        let names = command_names(group, index + 1);
        let Some((primary, aliases)) = names.split_first() else {
            return Err(ExtractError::MalformedGroup { group: index + 1 });
        };

        entries.push(CommandEntry::new(
            primary.clone(),
            aliases.to_vec(),
            normalize_action(&group.body),
        ));
    }

    Ok(entries)
}

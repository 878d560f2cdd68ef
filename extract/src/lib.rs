//! Command documentation extraction from a dispatch switch block.
//!
//! This crate reads source text containing a string-keyed dispatch construct
//! (a `switch` over quoted, slash-prefixed chat command names with a
//! `default:` fallback branch) and turns it into a Markdown reference table.
//! The pipeline is a linear chain of independently testable stages:
//!
//! - [`locate::locate_dispatch_block`] — find the span between the `switch`
//!   opening and the `default:` label.
//! - [`segment::parse_entries`] — split the span into command groups,
//!   associate aliases, and normalize each logic body for display.
//! - [`render::render_markdown`] — render the entries as a Markdown table.
//!
//! # Main entry points
//!
//! - [`extract_command_entries`] — source text to ordered [`CommandEntry`]
//!   values.
//! - [`generate_markdown`] — source text straight to the Markdown document.
//!
//! # Example
//!
//! ```
//! use dispatch_docs_extract::generate_markdown;
//!
//! let source = r#"
//! switch (command)
//! {
//!     case "/help":
//!     case "/h":
//!         await OpenHelp();
//!         return true;
//!
//!     default:
//!         return false;
//! }
//! "#;
//!
//! let markdown = generate_markdown(source).unwrap();
//! assert!(markdown.contains("| **/help** | `/h` | ```OpenHelp(); return true``` |"));
//! ```
//!
//! # Crate type
//!
//! This is a **library-only crate** with no binary targets. For CLI usage,
//! use the `dispatch-docs-cli` crate which provides the `dispatch-docs`
//! binary.

pub mod error;
pub mod locate;
pub mod normalize;
pub mod render;
pub mod segment;
pub mod types;

pub use error::ExtractError;
pub use types::CommandEntry;

/// Extracts the ordered command entries from dispatch source text.
///
/// Fails with [`ExtractError::BlockNotFound`] when the source does not
/// contain the dispatch construct, and with [`ExtractError::MalformedGroup`]
/// when a label group yields no command names.
pub fn extract_command_entries(source: &str) -> Result<Vec<CommandEntry>, ExtractError> {
    let block = locate::locate_dispatch_block(source)?;
    segment::parse_entries(block)
}

/// Runs the full pipeline: locate, segment, normalize, render.
pub fn generate_markdown(source: &str) -> Result<String, ExtractError> {
    let entries = extract_command_entries(source)?;
    Ok(render::render_markdown(&entries))
}

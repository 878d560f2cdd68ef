use std::fs;
use std::path::PathBuf;

use clap::Parser;
use dispatch_docs_extract::{extract_command_entries, render::render_markdown};

#[derive(Debug, Parser)]
#[command(name = "dispatch-docs")]
#[command(about = "Generate a Markdown command reference from a chat dispatch switch block")]
struct Cli {
    /// Source file containing the command dispatch switch.
    input: PathBuf,
    /// Path of the Markdown file to write (overwritten on each run).
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let source = fs::read_to_string(&cli.input)
        .map_err(|err| format!("Failed to read '{}': {err}", cli.input.display()))?;

    // Extraction runs to completion before the output path is touched, so a
    // missing block or malformed group never clobbers an existing file.
    let entries = extract_command_entries(&source).map_err(|err| err.to_string())?;
    let markdown = render_markdown(&entries);

    fs::write(&cli.output, markdown)
        .map_err(|err| format!("Failed to write '{}': {err}", cli.output.display()))?;

    println!(
        "Documented {} command(s) in '{}'.",
        entries.len(),
        cli.output.display()
    );
    Ok(())
}

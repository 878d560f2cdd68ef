use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("dispatch_docs_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

const DISPATCH_SOURCE: &str = r#"
switch (command)
{
    case "/help":
    case "/h":
        await ShowHelp();
        return true;

    case "/clear":
        chatBox.Clear();
        return true;

    default:
        return false;
}
"#;

#[test]
fn test_generates_markdown_file_from_source() {
    let dir = TempDir::new("generate");
    let input = dir.join("commands.cs");
    let output = dir.join("COMMANDS.md");
    fs::write(&input, DISPATCH_SOURCE).expect("failed to write input");

    let result = Command::new(env!("CARGO_BIN_EXE_dispatch-docs"))
        .arg(&input)
        .arg(&output)
        .output()
        .expect("failed to run dispatch-docs");

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Documented 2 command(s)"), "stdout: {stdout}");

    let markdown = fs::read_to_string(&output).expect("output file should exist");
    assert!(markdown.starts_with("# Command Documentation\n"));
    assert!(markdown.contains("| **/help** | `/h` | ```ShowHelp(); return true``` |"));
    assert!(markdown.contains("| **/clear** | None | ```chatBox.Clear(); return true``` |"));
}

#[test]
fn test_output_is_fully_overwritten_on_rerun() {
    let dir = TempDir::new("overwrite");
    let input = dir.join("commands.cs");
    let output = dir.join("COMMANDS.md");
    fs::write(&input, DISPATCH_SOURCE).expect("failed to write input");
    fs::write(&output, "stale contents\n").expect("failed to seed output");

    let result = Command::new(env!("CARGO_BIN_EXE_dispatch-docs"))
        .arg(&input)
        .arg(&output)
        .output()
        .expect("failed to run dispatch-docs");

    assert!(result.status.success());
    let markdown = fs::read_to_string(&output).expect("output file should exist");
    assert!(!markdown.contains("stale contents"));
}

#[test]
fn test_missing_block_reports_diagnostic_and_writes_nothing() {
    let dir = TempDir::new("no_block");
    let input = dir.join("plain.cs");
    let output = dir.join("COMMANDS.md");
    fs::write(&input, "public class Nothing { }").expect("failed to write input");

    let result = Command::new(env!("CARGO_BIN_EXE_dispatch-docs"))
        .arg(&input)
        .arg(&output)
        .output()
        .expect("failed to run dispatch-docs");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("could not locate the command dispatch block"),
        "stderr: {stderr}"
    );
    assert!(!output.exists(), "no output file may be written on failure");
}

#[test]
fn test_failed_run_preserves_existing_output_file() {
    let dir = TempDir::new("preserve");
    let input = dir.join("plain.cs");
    let output = dir.join("COMMANDS.md");
    fs::write(&input, "no dispatch here").expect("failed to write input");
    fs::write(&output, "previous docs\n").expect("failed to seed output");

    let result = Command::new(env!("CARGO_BIN_EXE_dispatch-docs"))
        .arg(&input)
        .arg(&output)
        .output()
        .expect("failed to run dispatch-docs");

    assert!(!result.status.success());
    let preserved = fs::read_to_string(&output).expect("output file should remain");
    assert_eq!(preserved, "previous docs\n");
}

#[test]
fn test_unreadable_input_surfaces_io_cause() {
    let dir = TempDir::new("missing_input");
    let input = dir.join("does-not-exist.cs");
    let output = dir.join("COMMANDS.md");

    let result = Command::new(env!("CARGO_BIN_EXE_dispatch-docs"))
        .arg(&input)
        .arg(&output)
        .output()
        .expect("failed to run dispatch-docs");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Failed to read"), "stderr: {stderr}");
}

#[test]
fn test_malformed_group_names_offending_position() {
    let dir = TempDir::new("malformed");
    let input = dir.join("commands.cs");
    let output = dir.join("COMMANDS.md");
    let source = r#"
switch (command)
{
    case "/ok":
        Run();
    case "/":
        Broken();
    default:
        return false;
}
"#;
    fs::write(&input, source).expect("failed to write input");

    let result = Command::new(env!("CARGO_BIN_EXE_dispatch-docs"))
        .arg(&input)
        .arg(&output)
        .output()
        .expect("failed to run dispatch-docs");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("command group 2 contains no command names"),
        "stderr: {stderr}"
    );
    assert!(!output.exists());
}

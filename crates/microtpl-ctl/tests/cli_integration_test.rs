//! Integration tests for the folder → template → insert pipeline.
//!
//! Each test builds a small vault in a temp directory, points `microtpl` at it
//! with an explicit settings file, and checks documents and settings on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Get the path to the compiled microtpl binary.
fn microtpl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_microtpl"))
}

/// Temp vault plus its settings file, kept outside the vault.
#[derive(Debug)]
struct Fixture {
    _temp: TempDir,
    vault: PathBuf,
    config: PathBuf,
}

impl Fixture {
    fn new(templates: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().unwrap();
        let vault = temp.path().join("vault");
        let tpl_dir = vault.join("templates");
        fs::create_dir_all(&tpl_dir).unwrap();
        fs::create_dir_all(vault.join("journal/2024")).unwrap();
        fs::write(vault.join("journal/2024/today.md"), "line zero\nline one\n").unwrap();

        for (name, content) in templates {
            fs::write(tpl_dir.join(name), content).unwrap();
        }

        let config = temp.path().join("settings.toml");
        Self {
            _temp: temp,
            vault,
            config,
        }
    }

    fn with_templates_dir(self, dir: &str) -> Self {
        fs::write(&self.config, format!("templates-dir = \"{dir}\"\n")).unwrap();
        self
    }

    fn doc(&self) -> PathBuf {
        self.vault.join("journal/2024/today.md")
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, "")
    }

    fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = Command::new(microtpl_bin())
            .arg("--vault")
            .arg(&self.vault)
            .arg("--config")
            .arg(&self.config)
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute microtpl");

        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{what} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// ==========================================================================
// Folder selection
// ==========================================================================

#[test]
fn test_select_dir_with_flag_saves_trimmed_setting() {
    let fx = Fixture::new(&[("daily.md", "x")]);

    let output = fx.run(&["select-dir", "--dir", "  templates  "]);
    assert_success(&output, "select-dir");
    assert!(read(&fx.config).contains("templates-dir = \"templates\""));
}

#[test]
fn test_select_dir_interactive_lists_source_folders() {
    let fx = Fixture::new(&[("daily.md", "x")]);

    // Folders sorted by path: journal/2024, templates.
    let output = fx.run_with_stdin(&["select-dir"], "2\n");
    assert_success(&output, "select-dir");

    let ui = stderr(&output);
    assert!(ui.contains("<root>/2024"), "stderr: {ui}");
    assert!(ui.contains("<root>/templates"), "stderr: {ui}");
    assert!(!stdout(&output).contains("<root>/2024"));
    assert!(read(&fx.config).contains("templates-dir = \"templates\""));
}

#[test]
fn test_select_dir_cancelled_leaves_settings_alone() {
    let fx = Fixture::new(&[("daily.md", "x")]);

    let output = fx.run_with_stdin(&["select-dir"], "\n");
    assert_success(&output, "select-dir");
    assert!(stdout(&output).contains("No folder selected"));
    assert!(!fx.config.exists());
}

// ==========================================================================
// Listing and rendering
// ==========================================================================

#[test]
fn test_list_shows_templates_in_configured_folder() {
    let fx = Fixture::new(&[("daily.md", "a"), ("meeting.md", "b")]).with_templates_dir("templates");

    let output = fx.run(&["list"]);
    assert_success(&output, "list");
    let out = stdout(&output);
    assert!(out.contains("daily.md"));
    assert!(out.contains("meeting.md"));
    assert!(!out.contains("today.md"));
}

#[test]
fn test_list_without_templates_hints_at_select_dir() {
    let fx = Fixture::new(&[]).with_templates_dir("templates");

    let output = fx.run(&["list"]);
    assert_success(&output, "list");
    assert!(stdout(&output).contains("microtpl select-dir"));
}

#[test]
fn test_render_applies_filters_and_keeps_marker() {
    let fx = Fixture::new(&[("note.md", "# {{ \"Weekly Review\" | kebab_case }}\n$cur")])
        .with_templates_dir("templates");

    let output = fx.run(&["render", "note"]);
    assert_success(&output, "render");
    let out = stdout(&output);
    assert!(out.contains("# weekly-review"));
    assert!(out.contains("$cur"));
}

#[test]
fn test_render_unknown_template_fails() {
    let fx = Fixture::new(&[("note.md", "x")]).with_templates_dir("templates");

    let output = fx.run(&["render", "missing"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing"));
}

#[test]
fn test_render_syntax_error_fails() {
    let fx = Fixture::new(&[("bad.md", "{{ oops")]).with_templates_dir("templates");

    let output = fx.run(&["render", "bad.md"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bad.md"));
}

// ==========================================================================
// Insertion
// ==========================================================================

#[test]
fn test_insert_moves_cursor_to_marker_and_strips_it() {
    let fx = Fixture::new(&[("greet.md", "Hello $cur world")]).with_templates_dir("templates");

    let output = fx.run(&[
        "insert",
        "--file",
        fx.doc().to_str().unwrap(),
        "--line",
        "2",
        "--ch",
        "0",
        "--template",
        "greet.md",
    ]);
    assert_success(&output, "insert");

    assert_eq!(read(&fx.doc()), "line zero\nline one\nHello  world");
    assert!(stdout(&output).contains("Cursor: 2:6"));
}

#[test]
fn test_insert_multiline_template() {
    let fx = Fixture::new(&[("block.md", "A\n$cur\nB")]).with_templates_dir("templates");

    let output = fx.run(&[
        "insert",
        "--file",
        fx.doc().to_str().unwrap(),
        "--line",
        "0",
        "--ch",
        "4",
        "--template",
        "block",
    ]);
    assert_success(&output, "insert");

    assert_eq!(read(&fx.doc()), "lineA\n\nB zero\nline one\n");
    assert!(stdout(&output).contains("Cursor: 1:0"));
}

#[test]
fn test_insert_dry_run_does_not_write() {
    let fx = Fixture::new(&[("greet.md", "Hi $cur")]).with_templates_dir("templates");
    let before = read(&fx.doc());

    let output = fx.run(&[
        "insert",
        "--file",
        fx.doc().to_str().unwrap(),
        "--template",
        "greet",
        "--dry-run",
    ]);
    assert_success(&output, "insert --dry-run");

    assert_eq!(stdout(&output), "Hi line zero\nline one\n");
    assert!(stderr(&output).contains("Cursor: 0:3"));
    assert_eq!(read(&fx.doc()), before);
}

#[test]
fn test_insert_dry_run_with_picker_prints_only_the_document() {
    let fx = Fixture::new(&[("alpha.md", "first $cur"), ("beta.md", "second $cur")])
        .with_templates_dir("templates");

    let output = fx.run_with_stdin(
        &["insert", "--file", fx.doc().to_str().unwrap(), "--dry-run"],
        "2\n",
    );
    assert_success(&output, "insert --dry-run");

    assert_eq!(stdout(&output), "second line zero\nline one\n");
    let ui = stderr(&output);
    assert!(ui.contains("alpha.md"), "stderr: {ui}");
    assert!(ui.contains("Cursor: 0:7"), "stderr: {ui}");
}

#[test]
fn test_insert_keeps_crlf_line_endings() {
    let fx = Fixture::new(&[("greet.md", "Hello $cur world")]).with_templates_dir("templates");
    fs::write(fx.doc(), "line zero\r\nline one\r\n").unwrap();

    let output = fx.run(&[
        "insert",
        "--file",
        fx.doc().to_str().unwrap(),
        "--line",
        "1",
        "--template",
        "greet",
    ]);
    assert_success(&output, "insert");

    assert_eq!(read(&fx.doc()), "line zero\r\nHello  worldline one\r\n");
    assert!(stdout(&output).contains("Cursor: 1:6"));
}

#[test]
fn test_insert_cursor_adjusted_offsets_first_line() {
    let fx = Fixture::new(&[("tag.md", "#$cur")]).with_templates_dir("templates");

    let output = fx.run(&[
        "insert",
        "--file",
        fx.doc().to_str().unwrap(),
        "--line",
        "1",
        "--ch",
        "4",
        "--template",
        "tag",
        "--marker-column",
        "cursor-adjusted",
    ]);
    assert_success(&output, "insert");

    assert_eq!(read(&fx.doc()), "line zero\nline# one\n");
    assert!(stdout(&output).contains("Cursor: 1:5"));
}

#[test]
fn test_insert_picks_template_interactively() {
    let fx = Fixture::new(&[("alpha.md", "first $cur"), ("beta.md", "second $cur")])
        .with_templates_dir("templates");

    let output = fx.run_with_stdin(
        &["insert", "--file", fx.doc().to_str().unwrap()],
        "beta\n1\n",
    );
    assert_success(&output, "insert");
    assert_eq!(read(&fx.doc()), "second line zero\nline one\n");
}

#[test]
fn test_insert_out_of_range_position_fails_without_writing() {
    let fx = Fixture::new(&[("greet.md", "Hello")]).with_templates_dir("templates");
    let before = read(&fx.doc());

    let output = fx.run(&[
        "insert",
        "--file",
        fx.doc().to_str().unwrap(),
        "--line",
        "40",
        "--template",
        "greet",
    ]);
    assert!(!output.status.success());
    assert_eq!(read(&fx.doc()), before);
}

// ==========================================================================
// Settings
// ==========================================================================

#[test]
fn test_config_set_dir_then_show() {
    let fx = Fixture::new(&[]);

    let output = fx.run(&["config", "set-dir", "journal/2024"]);
    assert_success(&output, "config set-dir");

    let output = fx.run(&["config", "show"]);
    assert_success(&output, "config show");
    let out = stdout(&output);
    assert!(out.contains("journal/2024"));
    assert!(out.contains("line-relative"));
}

#[test]
fn test_invalid_settings_file_is_reported() {
    let fx = Fixture::new(&[]);
    fs::write(&fx.config, "templates-dir = [").unwrap();

    let output = fx.run(&["config", "show"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse"));
}

//! End-to-end CLI tests driving the built `pmmc` binary against temp
//! source files, covering scenarios S1-S6 plus the driver-error paths.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pmmc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pmmc"))
}

fn run(dir: &TempDir, source: &str) -> assert_cmd::assert::Assert {
    let source_path = dir.path().join("input.pmm");
    fs::write(&source_path, source).expect("write source fixture");

    Command::new(pmmc_bin())
        .arg(&source_path)
        .current_dir(dir.path())
        .assert()
}

/// S1: minimal program — six tokens then EOF, zero errors.
#[test]
fn s1_minimal_program_compiles_clean() {
    let dir = TempDir::new().expect("temp dir");
    run(&dir, "program p;\nbegin\nend.")
        .success()
        .stdout(predicate::str::contains("Program compiled successfully"));

    let tokens = fs::read_to_string(dir.path().join("tokenOutput.txt")).unwrap();
    let lines: Vec<_> = tokens.lines().collect();
    assert_eq!(
        lines,
        vec![
            "program, PROGRAM",
            "p, ID",
            ";, SEMICOLON",
            "begin, BEGIN",
            "end, END",
            "., DOT",
            "EOF",
        ]
    );

    let diagnostics = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert!(diagnostics.is_empty());
}

/// S4: a missing `;` before `begin` is reported once, then the parser
/// resumes and the rest of the program compiles clean.
#[test]
fn s4_missing_semicolon_recovers_with_one_error() {
    let dir = TempDir::new().expect("temp dir");
    run(&dir, "program p;\nvar x : integer\nbegin\nend.")
        .success()
        .stdout(predicate::str::contains("Program compiled with 1 errors"));

    let diagnostics = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert_eq!(diagnostics.lines().count(), 1);
    assert!(diagnostics.contains("expected ; but found begin"));
    // `begin` is the first byte of line 3, column 1 — pin the position so a
    // regression that stamps it against the previous line's retreat point
    // (spec.md §7's "offending token's first character") is caught here.
    assert!(
        diagnostics.contains("line 3 col 1"),
        "diagnostic did not name begin's actual position: {diagnostics}"
    );
}

/// S5: a malformed real at the top of an otherwise valid program is
/// reported by the lexer, and tokenization resumes at the next byte.
#[test]
fn s5_malformed_real_reports_lexer_diagnostic() {
    let dir = TempDir::new().expect("temp dir");
    run(&dir, "program p;\nconst x = 1. ;\nbegin\nend.")
        .success()
        .stdout(predicate::str::contains("Program compiled"));

    let diagnostics = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert!(diagnostics.contains("did you mean to type a real number?"));
}

/// S6: an unterminated comment produces a single lexical "unexpected
/// end of file" diagnostic, and `LAMBDA`/`EOF` still reaches the parser.
#[test]
fn s6_unterminated_comment_reports_single_diagnostic() {
    let dir = TempDir::new().expect("temp dir");
    run(&dir, "program p;\nbegin\nend. { hello")
        .success()
        .stdout(predicate::str::contains("Program compiled"));

    let diagnostics = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert!(diagnostics.contains("Unexpected end of file"));

    let tokens = fs::read_to_string(dir.path().join("tokenOutput.txt")).unwrap();
    assert_eq!(tokens.lines().last(), Some("EOF"));
}

/// Every sink line written to the files is also mirrored to stdout.
#[test]
fn sinks_are_mirrored_to_stdout() {
    let dir = TempDir::new().expect("temp dir");
    run(&dir, "program p;\nbegin\nend.")
        .success()
        .stdout(predicate::str::contains("program, PROGRAM"))
        .stdout(predicate::str::contains("EOF"));
}

#[test]
fn missing_source_argument_exits_nonzero() {
    Command::new(pmmc_bin())
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("usage: pmmc <source-file>"));
}

#[test]
fn unreadable_source_file_exits_nonzero() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("does-not-exist.pmm");

    Command::new(pmmc_bin())
        .arg(&missing)
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("cannot read source file"));
}

//! Tests for shell completion functionality.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use mvnargs::cli::{Cli, Commands, CompletionsArgs};

/// Test parsing the completions command for all supported shells.
#[test]
fn test_completions_command_parsing() -> Result<()> {
    let shells = [
        ("bash", Shell::Bash),
        ("zsh", Shell::Zsh),
        ("fish", Shell::Fish),
        ("powershell", Shell::PowerShell),
        ("elvish", Shell::Elvish),
    ];

    for (shell_str, expected_shell) in shells {
        let args = Cli::parse_from(["mvnargs", "completions", shell_str]);
        match args.command {
            Commands::Completions(opts) => {
                assert_eq!(opts.shell, expected_shell, "Mismatched shell for '{}'", shell_str);
            }
            _ => panic!("Expected Completions command for shell '{}'", shell_str),
        }
    }

    Ok(())
}

/// Test that completion generation produces output for every supported shell.
#[test]
fn test_completions_generation() -> Result<()> {
    for shell in Shell::value_variants() {
        let mut buffer = Vec::new();
        mvnargs::run_completions(&CompletionsArgs { shell: *shell }, &mut buffer);
        assert!(!buffer.is_empty(), "Generated completion for {:?} was empty", shell);
    }

    Ok(())
}

/// Test that completions mention every subcommand.
#[test]
fn test_completion_contents() -> Result<()> {
    let test_cases = [
        (Shell::Bash, &["mvnargs", "render", "flags", "completions"] as &[_]),
        (Shell::Zsh, &["#compdef mvnargs", "render", "flags"]),
        (Shell::Fish, &["mvnargs", "render", "flags", "completions"]),
    ];

    for (shell, patterns) in test_cases {
        let mut buffer = Vec::new();
        mvnargs::run_completions(&CompletionsArgs { shell }, &mut buffer);
        let output = String::from_utf8(buffer)?;

        for pattern in patterns {
            assert!(
                output.contains(pattern),
                "Pattern '{}' not found in {:?} completions",
                pattern,
                shell
            );
        }
    }

    Ok(())
}

/// Test that invalid shell names are rejected.
#[test]
fn test_invalid_shell_rejected() {
    let result = Cli::try_parse_from(["mvnargs", "completions", "invalid-shell"]);
    assert!(result.is_err(), "Expected parsing to fail for invalid shell");
}

use super::Cli;
use clap::Parser;

#[test]
fn test_parse_positional_args() {
    let cli = Cli::try_parse_from(["depsync", "package.json", "spec.json"]).unwrap();
    assert_eq!(cli.top_level_file.to_str(), Some("package.json"));
    assert_eq!(cli.spec_file.to_str(), Some("spec.json"));
    assert!(!cli.quiet);
    assert!(!cli.dry);
    assert!(!cli.note);
}

#[test]
fn test_parse_long_flags() {
    let cli = Cli::try_parse_from(["depsync", "--quiet", "--dry", "--note", "top.json", "spec.json"])
        .unwrap();
    assert!(cli.quiet);
    assert!(cli.dry);
    assert!(cli.note);
}

#[test]
fn test_parse_short_flags() {
    let cli = Cli::try_parse_from(["depsync", "-q", "-d", "top.json", "spec.json"]).unwrap();
    assert!(cli.quiet);
    assert!(cli.dry);
}

#[test]
fn test_note_has_no_short_form() {
    assert!(Cli::try_parse_from(["depsync", "-n", "top.json", "spec.json"]).is_err());
}

#[test]
fn test_missing_positional_args_rejected() {
    assert!(Cli::try_parse_from(["depsync"]).is_err());
    assert!(Cli::try_parse_from(["depsync", "only-one.json"]).is_err());
}

#[test]
fn test_flags_after_positionals() {
    let cli = Cli::try_parse_from(["depsync", "top.json", "spec.json", "--note"]).unwrap();
    assert!(cli.note);
    assert_eq!(cli.top_level_file.to_str(), Some("top.json"));
}

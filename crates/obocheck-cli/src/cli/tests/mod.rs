//! CLI parse tests.

use super::{Cli, CliCommand, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_check_defaults() {
    match parse(&["obocheck", "check", "ontology/obi.md"]) {
        CliCommand::Check {
            paths,
            jobs,
            format,
        } => {
            assert_eq!(paths, vec![PathBuf::from("ontology/obi.md")]);
            assert!(jobs.is_none());
            assert_eq!(format, OutputFormat::Text);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_many_with_options() {
    match parse(&[
        "obocheck",
        "check",
        "ontology/",
        "extra/aero.yml",
        "--jobs",
        "8",
        "--format",
        "json",
    ]) {
        CliCommand::Check {
            paths,
            jobs,
            format,
        } => {
            assert_eq!(paths.len(), 2);
            assert_eq!(jobs, Some(8));
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("expected Check with options"),
    }
}

#[test]
fn cli_parse_check_requires_path() {
    assert!(Cli::try_parse_from(["obocheck", "check"]).is_err());
}

#[test]
fn cli_parse_check_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["obocheck", "check", "x.md", "--format", "xml"]).is_err());
}

#[test]
fn cli_parse_probe() {
    match parse(&["obocheck", "probe", "http://obi-ontology.org"]) {
        CliCommand::Probe { url } => assert_eq!(url, "http://obi-ontology.org"),
        _ => panic!("expected Probe"),
    }
}

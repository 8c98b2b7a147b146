use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn draft_path() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/draft-sample.txt")
        .to_string_lossy()
        .to_string()
}

fn oiddir() -> Command {
    Command::cargo_bin("oiddir").unwrap()
}

#[test]
fn test_extract_openldap() {
    oiddir()
        .args(["schema", "extract", "-t", "openldap", "-f", &draft_path()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "## OID Directory schema - EXPERIMENTAL USE ONLY\n## Formatted for openldap\n",
        ))
        .stdout(predicate::str::contains("# 2 attribute types\n#\nattributetype ( 1.3.6.1.4.1.56521.101.2.3.1\n"))
        .stdout(predicate::str::contains("# 1 object classes\n#\nobjectclass ( "))
        .stdout(predicate::str::contains("# 1 (disabled) name forms\n#\n#nameform ( "))
        .stdout(predicate::str::contains("X-ORIGIN 'draft-coretta-oiddir-schema' )"));
}

#[test]
fn test_extract_389ds_single_line() {
    oiddir()
        .args(["schema", "extract", "-t", "389ds", "-n", "-x", "-f", &draft_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("dn: cn=schema\n#\n"))
        .stdout(predicate::str::contains(
            "objectclasses: ( 1.3.6.1.4.1.56521.101.2.5.1 NAME 'registration' SUP top ABSTRACT )\n#\n",
        ))
        .stdout(predicate::str::contains("X-ORIGIN").not());
}

#[test]
fn test_extract_opendj_custom_syntaxes() {
    oiddir()
        .args(["schema", "extract", "-t", "opendj", "-s", "-n", "-f", &draft_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 7 CUSTOM ldap syntaxes\n#\nldapSyntaxes: ( 1.3.6.1.4.1.56521.101.2.1.3 "))
        .stdout(predicate::str::contains(
            "SYNTAX 1.3.6.1.4.1.56521.101.2.1.3 X-ORIGIN 'draft-coretta-oiddir-schema' X-WARNING 'syntax replacement' )",
        ))
        .stdout(predicate::str::contains("# 1 name forms\n#\nnameForms: ( "));
}

#[test]
fn test_extract_stdin() {
    oiddir()
        .args(["schema", "extract", "-t", "opendj"])
        .write_stdin(std::fs::read_to_string(draft_path()).unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("## Sourced from -\n"));
}

#[test]
fn test_extract_no_definitions() {
    oiddir()
        .args(["schema", "extract", "-t", "openldap"])
        .write_stdin("no schema in here\n")
        .assert()
        .failure()
        .stdout("# No definitions parsed\n");
}

#[test]
fn test_extract_requires_type() {
    oiddir()
        .args(["schema", "extract", "-f", &draft_path()])
        .assert()
        .failure();
}

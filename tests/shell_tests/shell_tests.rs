//! Shell Tests
//!
//! Tests drive the menu with scripted input and inspect both output streams.

use rosterdb::record::{Record, Sex};
use rosterdb::shell::{parse_choice, MenuChoice, Shell};
use rosterdb::{Config, Database, RosterError};

// =============================================================================
// Helper Functions
// =============================================================================

struct Session {
    result: Result<(), RosterError>,
    out: String,
    diag: String,
}

fn run(database: &mut Database, script: &str) -> Session {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let result = Shell::new(database, script.as_bytes(), &mut out, &mut diag).run();

    Session {
        result,
        out: String::from_utf8(out).unwrap(),
        diag: String::from_utf8(diag).unwrap(),
    }
}

fn seeded() -> Database {
    let mut db = Database::new(Config::default());
    db.insert(Record::new("X", Sex::Male, 1, "A").unwrap()).unwrap();
    db.insert(Record::new("X", Sex::Male, 2, "B").unwrap()).unwrap();
    db.insert(Record::new("Y", Sex::Female, 3, "C").unwrap()).unwrap();
    db
}

// =============================================================================
// Menu Tests
// =============================================================================

#[test]
fn test_exit_immediately() {
    let mut db = Database::new(Config::default());
    let session = run(&mut db, "3\n");

    assert!(session.result.is_ok());
    assert!(session.out.is_empty());
    assert!(session.diag.contains("0: Add new employee to database"));
    assert!(session.diag.contains("3: Exit database program"));
    assert!(session.diag.contains("Enter option: "));
}

#[test]
fn test_end_of_input_at_menu_ends_session() {
    let mut db = Database::new(Config::default());
    let session = run(&mut db, "");
    assert!(session.result.is_ok());
}

#[test]
fn test_illegal_and_corrupted_choices() {
    let mut db = Database::new(Config::default());
    let session = run(&mut db, "7\nabc\n-1\n3\n");

    assert!(session.result.is_ok());
    assert!(session.diag.contains("illegal choice 7\n"));
    assert!(session.diag.contains("illegal choice -1\n"));
    assert_eq!(session.diag.matches("corrupted menu choice\n").count(), 1);
    assert_eq!(session.diag.matches("Enter option: ").count(), 4);
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_add_then_print() {
    let mut db = Database::new(Config::default());
    let session = run(&mut db, "0\nBob\nM\n30\nBaker\n2\n3\n");

    assert!(session.result.is_ok());
    assert_eq!(session.out, "Name: Bob\nSex: M\nAge: 30\nJob: Baker\n\n");
    assert!(session.diag.contains("Name: Sex: Age: Job: "));
    assert_eq!(db.len(), 1);
}

#[test]
fn test_add_with_retries() {
    let mut db = Database::new(Config::default());
    let session = run(&mut db, "0\nBob\nQ\nM\nthirty\n30\nBaker\n3\n");

    assert!(session.result.is_ok());
    assert!(session.diag.contains("Invalid sex, please enter again.\n"));
    assert!(session.diag.contains("Invalid age, please enter again.\n"));
    assert_eq!(db.find_first("Bob").unwrap().age(), 30);
}

#[test]
fn test_add_interrupted_by_end_of_input() {
    let mut db = Database::new(Config::default());
    let session = run(&mut db, "0\nBob\nM\n");

    assert!(matches!(session.result, Err(RosterError::EndOfInput)));
    assert!(db.is_empty());
}

#[test]
fn test_delete_all_matching_names() {
    let mut db = seeded();
    let session = run(&mut db, "1\nX\n2\n3\n");

    assert!(session.result.is_ok());
    assert!(session
        .diag
        .contains("Please enter the name of the employee to be deleted: "));
    assert_eq!(session.out, "Name: Y\nSex: F\nAge: 3\nJob: C\n\n");
    assert_eq!(db.len(), 1);
}

#[test]
fn test_delete_not_found() {
    let mut db = seeded();
    let session = run(&mut db, "1\nZ\n3\n");

    assert!(session.diag.contains("Employee not found.\n"));
    assert_eq!(db.len(), 3);
}

#[test]
fn test_delete_interrupted_by_end_of_input() {
    let mut db = seeded();
    let session = run(&mut db, "1\n");

    assert!(matches!(session.result, Err(RosterError::EndOfInput)));
    assert_eq!(db.len(), 3);
}

#[test]
fn test_print_empty_database() {
    let mut db = Database::new(Config::default());
    let session = run(&mut db, "2\n3\n");
    assert!(session.out.is_empty());
}

#[test]
fn test_prompts_never_reach_output() {
    let mut db = seeded();
    let session = run(&mut db, "0\nAnn\nF\n5\nPilot\n9\n1\nnobody\n2\n3\n");

    assert!(!session.out.contains("Options:"));
    assert!(!session.out.contains("not found"));
    assert!(!session.out.contains("illegal"));
    assert!(session.out.starts_with("Name: Ann\n"));
}

// =============================================================================
// Choice Parsing Tests
// =============================================================================

#[test]
fn test_parse_choice() {
    assert_eq!(parse_choice(b"2"), Some(2));
    assert_eq!(parse_choice(b"  3"), Some(3));
    assert_eq!(parse_choice(b"+1"), Some(1));
    assert_eq!(parse_choice(b"-4"), Some(-4));
    assert_eq!(parse_choice(b"2abc"), Some(2));
    assert_eq!(parse_choice(b""), None);
    assert_eq!(parse_choice(b"abc"), None);
    assert_eq!(parse_choice(b"-"), None);
    assert_eq!(parse_choice(b"99999999999999999999"), None);
}

#[test]
fn test_menu_choice_codes() {
    assert_eq!(MenuChoice::from_code(0), Some(MenuChoice::Add));
    assert_eq!(MenuChoice::from_code(3), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::from_code(4), None);
}

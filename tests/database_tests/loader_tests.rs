//! Tests for the database loader
//!
//! These tests verify:
//! - Loading well-formed files
//! - Empty file handling
//! - Separator strictness
//! - Fatal handling of malformed and truncated records

use rosterdb::database::load;
use rosterdb::input::LineReader;
use rosterdb::record::Field;
use rosterdb::roster::Roster;
use rosterdb::RosterError;

// =============================================================================
// Helper Functions
// =============================================================================

fn load_text(text: &str) -> (Result<usize, RosterError>, Roster) {
    let mut source = LineReader::new(text.as_bytes());
    let mut roster = Roster::new();
    let result = load(&mut source, &mut roster);
    (result, roster)
}

fn entry(name: &str, sex: char, age: &str, job: &str) -> String {
    format!("Name: {name}\nSex: {sex}\nAge: {age}\nJob: {job}\n")
}

// =============================================================================
// Well-formed Files
// =============================================================================

#[test]
fn test_load_single_record() {
    let text = entry("Alice", 'F', "30", "Pilot") + "\n";
    let (result, roster) = load_text(&text);

    assert_eq!(result.unwrap(), 1);
    assert_eq!(roster.iter().next().unwrap().name(), "Alice");
}

#[test]
fn test_load_sorts_records() {
    let text = [
        entry("Zed", 'M', "50", "Chef"),
        entry("Alice", 'F', "30", "Pilot"),
        entry("Mia", 'F', "22", "Nurse"),
    ]
    .join("\n")
        + "\n";

    let (result, roster) = load_text(&text);
    assert_eq!(result.unwrap(), 3);

    let names: Vec<&str> = roster.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Alice", "Mia", "Zed"]);
    assert!(roster.is_consistent());
}

#[test]
fn test_load_equal_names_reverse_file_order() {
    let text = [entry("Bob", 'M', "1", "A"), entry("Bob", 'M', "2", "B")].join("\n") + "\n";
    let (result, roster) = load_text(&text);

    assert_eq!(result.unwrap(), 2);
    let ages: Vec<u32> = roster.iter().map(|r| r.age()).collect();
    assert_eq!(ages, vec![2, 1]);
}

#[test]
fn test_empty_file_is_empty_database() {
    let (result, roster) = load_text("");

    assert_eq!(result.unwrap(), 0);
    assert!(roster.is_empty());
}

// =============================================================================
// Separator Tests
// =============================================================================

#[test]
fn test_missing_blank_line_between_records() {
    let text = entry("Alice", 'F', "30", "Pilot") + &entry("Bob", 'M', "40", "Baker") + "\n";
    let (result, _) = load_text(&text);

    assert!(matches!(result, Err(RosterError::MalformedSeparator { record: 1 })));
}

#[test]
fn test_missing_final_blank_line() {
    let text = entry("Alice", 'F', "30", "Pilot");
    let (result, _) = load_text(&text);

    assert!(matches!(result, Err(RosterError::MalformedSeparator { record: 1 })));
}

#[test]
fn test_two_blank_lines_between_records() {
    let text = entry("Alice", 'F', "30", "Pilot") + "\n\n" + &entry("Bob", 'M', "40", "Baker") + "\n";
    let (result, _) = load_text(&text);

    // The extra blank line is read as the start of the next record
    assert!(matches!(
        result,
        Err(RosterError::PrefixMismatch { field: Field::Name })
    ));
}

// =============================================================================
// Malformed Record Tests
// =============================================================================

#[test]
fn test_invalid_age_in_first_record() {
    let text = entry("Alice", 'F', "twelve", "Pilot") + "\n";
    let (result, roster) = load_text(&text);

    assert!(matches!(result, Err(RosterError::InvalidField { field: Field::Age })));
    assert!(roster.is_empty());
}

#[test]
fn test_invalid_record_after_valid_ones() {
    let text = [entry("Alice", 'F', "30", "Pilot"), entry("Bob", 'X', "40", "Baker")].join("\n") + "\n";
    let (result, _) = load_text(&text);

    let err = result.unwrap_err();
    assert!(matches!(err, RosterError::InvalidField { field: Field::Sex }));
    assert!(err.is_malformed_database());
}

#[test]
fn test_truncated_record() {
    let (result, _) = load_text("Name: Alice\nSex: F\n");
    assert!(matches!(result, Err(RosterError::TruncatedDatabase)));
}

#[test]
fn test_truncated_last_line() {
    let (result, _) = load_text("Name: Alice\nSex: F\nAge: 3\nJob: Pil");
    assert!(matches!(result, Err(RosterError::TruncatedDatabase)));
}

#[test]
fn test_blank_only_file() {
    let (result, _) = load_text("\n");
    assert!(matches!(
        result,
        Err(RosterError::PrefixMismatch { field: Field::Name })
    ));
}

#[test]
fn test_partial_label_at_end() {
    let text = entry("Alice", 'F', "30", "Pilot") + "\nNa";
    let (result, _) = load_text(&text);

    assert!(matches!(
        result,
        Err(RosterError::PrefixMismatch { field: Field::Name })
    ));
}

//! Unit tests for the reserved-name guard

use boardlink::{Error, ReservedNames};

#[test]
fn test_builtin_module_names_are_reserved() {
    let names = ReservedNames::micropython();
    let expected = [
        "storage",
        "os",
        "touchio",
        "microcontroller",
        "bitbangio",
        "digitalio",
        "audiobusio",
        "multiterminal",
        "nvm",
        "pulseio",
        "usb_hid",
        "analogio",
        "time",
        "busio",
        "random",
        "audioio",
        "sys",
        "math",
        "builtins",
    ];
    for name in expected {
        assert!(names.is_reserved(name), "{} must be reserved", name);
    }
    assert_eq!(names.len(), expected.len());
}

#[test]
fn test_match_is_case_sensitive() {
    let names = ReservedNames::micropython();
    assert!(names.is_reserved("os"));
    assert!(!names.is_reserved("Os"));
    assert!(!names.is_reserved("oS"));
    assert!(!names.is_reserved("MATH"));
}

#[test]
fn test_ordinary_names_pass() {
    let names = ReservedNames::micropython();
    for name in ["main", "boot", "blinky", "sensor_log", "os2", "time_utils"] {
        assert!(!names.is_reserved(name));
        assert!(names.check(name).is_ok());
    }
}

#[test]
fn test_check_reports_the_offending_name() {
    let names = ReservedNames::micropython();
    match names.check("usb_hid") {
        Err(Error::ReservedName { name }) => assert_eq!(name, "usb_hid"),
        other => panic!("expected ReservedName, got {:?}", other),
    }
}

#[test]
fn test_empty_string_is_not_reserved() {
    // Filename syntax is the caller's problem; the guard only does
    // membership.
    let names = ReservedNames::micropython();
    assert!(!names.is_reserved(""));
}

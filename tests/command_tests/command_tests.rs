//! Command Tests
//!
//! Tests for parsing the text command language and executing it
//! against a store.

use restrictkv::command::{Command, CommandType};
use restrictkv::{NullSink, RestrictError, RestrictedStore};

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_set() {
    let cmd = Command::parse("SET company Google").unwrap();
    assert_eq!(
        cmd,
        Command::Set {
            key: "company".to_string(),
            value: "Google".to_string(),
        }
    );
    assert_eq!(cmd.command_type(), CommandType::Set);
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(Command::parse("ping").unwrap(), Command::Ping);
    assert_eq!(
        Command::parse("get company").unwrap(),
        Command::Get {
            key: "company".to_string()
        }
    );
}

#[test]
fn test_parse_restrict_family() {
    assert_eq!(
        Command::parse("RESTRICT employee=Andy company=Google").unwrap(),
        Command::Restrict {
            slave: "employee=Andy".to_string(),
            master: "company=Google".to_string(),
        }
    );
    assert_eq!(
        Command::parse("MRESTRICT employee=Andy company=Google location=USA").unwrap(),
        Command::MultiRestrict {
            slave: "employee=Andy".to_string(),
            masters: vec!["company=Google".to_string(), "location=USA".to_string()],
        }
    );
    assert_eq!(
        Command::parse("UNRESTRICT employee=Andy company=Google").unwrap(),
        Command::Unrestrict {
            slave: "employee=Andy".to_string(),
            master: "company=Google".to_string(),
        }
    );
    assert_eq!(
        Command::parse("UNRESTRICT_ALL employee=Andy").unwrap(),
        Command::UnrestrictAll {
            slave: "employee=Andy".to_string(),
        }
    );
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(Command::parse("").is_err());
    assert!(Command::parse("   ").is_err());
    assert!(Command::parse("FROB x").is_err());
    assert!(Command::parse("SET company").is_err());
    assert!(Command::parse("MRESTRICT employee=Andy").is_err());
    assert!(Command::parse("RULES extra").is_err());
}

#[test]
fn test_keyword_round_trip() {
    for ty in [
        CommandType::Set,
        CommandType::Get,
        CommandType::Restrict,
        CommandType::MultiRestrict,
        CommandType::Unrestrict,
        CommandType::UnrestrictAll,
        CommandType::Rules,
        CommandType::Ping,
    ] {
        let args = match ty {
            CommandType::Set | CommandType::Restrict | CommandType::Unrestrict => " a=b c=d",
            CommandType::MultiRestrict => " a=b c=d e=f",
            CommandType::Get | CommandType::UnrestrictAll => " a=b",
            CommandType::Rules | CommandType::Ping => "",
        };
        let cmd = Command::parse(&format!("{}{}", ty.keyword(), args)).unwrap();
        assert_eq!(cmd.command_type(), ty);
    }
}

// =============================================================================
// Execution Tests
// =============================================================================

#[test]
fn test_execute_session() {
    let mut store = RestrictedStore::new(10).unwrap().with_sink(NullSink);
    let mut run = |line: &str| Command::parse(line).and_then(|cmd| store.execute(cmd));

    assert_eq!(run("PING").unwrap(), Some("PONG".to_string()));
    assert_eq!(run("RESTRICT employee=Andy company=Google").unwrap(), None);
    assert_eq!(run("SET company Google").unwrap(), None);
    assert!(matches!(
        run("SET employee Andy"),
        Err(RestrictError::Vetoed { .. })
    ));
    assert_eq!(run("GET employee").unwrap(), None);
    assert_eq!(run("GET company").unwrap(), Some("Google".to_string()));
    assert_eq!(
        run("RULES").unwrap(),
        Some("employee=Andy <- company=Google".to_string())
    );
    assert_eq!(run("UNRESTRICT_ALL employee=Andy").unwrap(), Some("1".to_string()));
    assert_eq!(run("SET employee Andy").unwrap(), None);
    assert_eq!(run("RULES").unwrap(), Some(String::new()));
}

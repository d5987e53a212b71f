//! Integration tests for leveled, sectioned, indented emission.
//!
//! Each test builds its own `SharedConfig` so the captured settings do not
//! leak between tests running in the same process.

use std::fs;
use std::io::{self, Write};

use argdb::ArgDatabase;
use logger::{Logger, LoggerError, SharedConfig};

fn logger_for(args: &[&str]) -> Logger<Vec<u8>, Vec<u8>> {
    let shared = SharedConfig::new();
    let mut db = ArgDatabase::from_args(args).expect("valid arguments");
    Logger::with_shared(&shared, &mut db, Some(Vec::new()), Vec::new())
}

fn outputs(logger: Logger<Vec<u8>, Vec<u8>>) -> (String, String) {
    let (log, console) = logger.into_parts();
    (
        String::from_utf8(log.expect("log sink configured")).expect("utf-8"),
        String::from_utf8(console).expect("utf-8"),
    )
}

// ============================================================================
// Level gate
// ============================================================================

#[test]
fn message_above_level_skips_console_but_reaches_log() {
    let mut logger = logger_for(&["-debugLevel=1"]);
    logger.debug_print("detail", 3, None).unwrap();

    let (log, console) = outputs(logger);
    assert_eq!(console, "");
    assert_eq!(log, "detail\n");
}

#[test]
fn default_level_zero_shows_only_level_zero() {
    let mut logger = logger_for(&[]);
    logger.debug_print("always", 0, None).unwrap();
    logger.debug_print("default level", 1, None).unwrap();

    let (log, console) = outputs(logger);
    assert_eq!(console, "always\n");
    assert_eq!(log, "always\ndefault level\n");
}

#[test]
fn max_level_shows_every_valid_level() {
    let mut logger = logger_for(&["-debugLevel=5"]);
    for level in 0..=5 {
        logger.debug_print(format!("level {level}"), level, None).unwrap();
    }
    logger.debug_print("beyond", 6, None).unwrap();

    let (log, console) = outputs(logger);
    assert_eq!(console.lines().count(), 6);
    assert_eq!(log.lines().count(), 7);
}

// ============================================================================
// Section filter
// ============================================================================

#[test]
fn unlisted_section_skips_console() {
    let mut logger = logger_for(&["-debugLevel=2", "-debugSections=[compile]"]);
    logger.debug_print("linking", 1, Some("link")).unwrap();

    let (log, console) = outputs(logger);
    assert_eq!(console, "");
    assert_eq!(log, "linking\n");
}

#[test]
fn listed_section_reaches_console_with_indentation() {
    let mut logger = logger_for(&["-debugLevel=1", "-debugSections=[compile,link]"]);
    {
        let mut step = logger.nested();
        step.debug_print("linking", 1, Some("link")).unwrap();
    }

    let (log, console) = outputs(logger);
    assert_eq!(console, "  linking\n");
    assert_eq!(log, "  linking\n");
}

#[test]
fn level_gate_applies_before_section() {
    let mut logger = logger_for(&["-debugLevel=1", "-debugSections=[link]"]);
    logger.debug_print("too detailed", 2, Some("link")).unwrap();

    let (_, console) = outputs(logger);
    assert_eq!(console, "");
}

#[test]
fn no_section_filter_lets_any_section_through() {
    let mut logger = logger_for(&["-debugLevel=1"]);
    logger.debug_print("bk", 1, Some("bk")).unwrap();
    logger.debug_print("install", 1, Some("install")).unwrap();

    let (_, console) = outputs(logger);
    assert_eq!(console, "bk\ninstall\n");
}

// ============================================================================
// Argument validation
// ============================================================================

#[test]
fn non_integer_level_fails_without_output() {
    let mut logger = logger_for(&["-debugLevel=5"]);
    let result = logger.debug_print("never", "x", None);
    assert!(matches!(result, Err(LoggerError::InvalidArgument { .. })));

    let (log, console) = outputs(logger);
    assert!(log.is_empty());
    assert!(console.is_empty());
}

#[test]
fn sink_failure_propagates_as_io_error() {
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let shared = SharedConfig::new();
    let mut db = ArgDatabase::new();
    let mut logger = Logger::with_shared(&shared, &mut db, Some(Closed), Vec::new());
    let error = logger.debug_print("lost", 0, None).unwrap_err();
    match error {
        LoggerError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected io error, got {other:?}"),
    }
}

// ============================================================================
// Nesting through recursive build steps
// ============================================================================

fn build(logger: &mut Logger<Vec<u8>, Vec<u8>>, target: &str, deps: &[(&str, &[&str])]) {
    logger
        .debug_print(format!("building {target}"), 1, Some("build"))
        .unwrap();
    let children = deps
        .iter()
        .find(|(name, _)| *name == target)
        .map_or(&[][..], |(_, children)| *children);
    for child in children {
        let mut nested = logger.nested();
        build(&mut nested, child, deps);
    }
}

#[test]
fn recursive_steps_indent_by_depth() {
    let mut logger = logger_for(&["-debugLevel=1"]);
    let deps: &[(&str, &[&str])] = &[("app", &["lib", "main.o"]), ("lib", &["util.o"])];
    build(&mut logger, "app", deps);
    assert_eq!(logger.depth(), 0);

    let (log, console) = outputs(logger);
    let expected = "building app\n  building lib\n    building util.o\n  building main.o\n";
    assert_eq!(console, expected);
    assert_eq!(log, expected);
}

// ============================================================================
// File-backed log sink
// ============================================================================

#[test]
fn file_log_records_every_message() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("build.log");
    let file = fs::File::create(&path).expect("create log");

    let shared = SharedConfig::new();
    let mut db = ArgDatabase::from_args(["-debugLevel=0"]).unwrap();
    let mut logger = Logger::with_shared(&shared, &mut db, Some(file), Vec::new());
    logger.debug_print("configure", 0, None).unwrap();
    {
        let mut nested = logger.nested();
        nested.debug_print("hidden on console", 4, Some("compile")).unwrap();
    }
    logger.flush().unwrap();

    assert_eq!(logger.console_ref().as_slice(), b"configure\n");
    drop(logger);

    let contents = fs::read_to_string(&path).expect("read log");
    assert_eq!(contents, "configure\n  hidden on console\n");
}

//! Integration tests for level masks and filtering.
//!
//! These tests verify that the enabled mask decides which calls reach the
//! sink, that invalid masks are rejected with a single diagnostic, and that
//! masks parse from their textual form.

use logging::{
    ALL_LEVEL, DEBUG, ERROR, INFO, LevelMask, Logger, LoggerConfig, Priority, Severity, VERBOSE,
    WARN,
};
use test_support::{Record, RecordingSink};

fn log_everything(logger: &Logger<RecordingSink>) {
    logger.verbose("T", "v");
    logger.debug("T", "d");
    logger.info("T", "i");
    logger.warn("T", "w");
    logger.error("T", "e");
}

// ============================================================================
// Filtering
// ============================================================================

/// Verifies every severity is enabled by default.
#[test]
fn default_mask_passes_everything() {
    let logger = Logger::new(RecordingSink::new());
    assert_eq!(logger.level().bits(), ALL_LEVEL);

    log_everything(&logger);

    assert_eq!(logger.sink().len(), 5);
}

/// Verifies each single-bit mask lets exactly its severity through.
#[test]
fn single_bit_masks_select_one_severity() {
    for (bits, expected) in [
        (VERBOSE, "v"),
        (DEBUG, "d"),
        (INFO, "i"),
        (WARN, "w"),
        (ERROR, "e"),
    ] {
        let logger = Logger::new(RecordingSink::new());
        logger.set_level(i64::from(bits));

        log_everything(&logger);

        assert_eq!(logger.sink().texts(), [expected], "mask {bits:#07b}");
    }
}

/// Verifies a zero mask silences every call.
#[test]
fn zero_mask_silences_everything() {
    let logger = Logger::new(RecordingSink::new());
    logger.set_level(0);

    log_everything(&logger);

    assert!(logger.sink().is_empty());
}

/// Verifies combined masks pass each member severity.
#[test]
fn combined_mask_passes_members() {
    let logger = Logger::new(RecordingSink::new());
    logger.set_level(i64::from(WARN | ERROR));

    log_everything(&logger);

    assert_eq!(logger.sink().texts(), ["w", "e"]);
}

/// Verifies the last accepted mask wins.
#[test]
fn last_set_level_wins() {
    let logger = Logger::new(RecordingSink::new());
    logger.set_level(i64::from(ERROR));
    logger.set_level(i64::from(DEBUG));

    log_everything(&logger);

    assert_eq!(logger.sink().texts(), ["d"]);
}

// ============================================================================
// Invalid Masks
// ============================================================================

/// Verifies an out-of-range mask is rejected with one diagnostic line.
#[test]
fn out_of_range_masks_are_reported() {
    for rejected in [-1_i64, i64::from(ALL_LEVEL) + 1, 1 << 40, i64::MIN] {
        let logger = Logger::new(RecordingSink::new());
        logger.set_level(i64::from(INFO));

        logger.set_level(rejected);

        assert_eq!(logger.level(), LevelMask::from(Severity::Info));
        assert_eq!(
            logger.sink().take(),
            [Record::new(
                Priority::Error,
                "Logger",
                &format!("[Error] log level ({rejected}) is out of range 0 ~ 31"),
            )]
        );
    }
}

/// Verifies the diagnostic uses the configured internal tag.
#[test]
fn diagnostic_uses_configured_tag() {
    let logger = Logger::with_config(
        RecordingSink::new(),
        LoggerConfig::default().with_internal_tag("Facade"),
    );

    logger.set_level(64);

    let records = logger.sink().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tag, "Facade");
}

/// Verifies both range boundaries are accepted.
#[test]
fn range_boundaries_are_accepted() {
    let logger = Logger::new(RecordingSink::new());

    logger.set_level(0);
    assert_eq!(logger.level(), LevelMask::NONE);
    logger.set_level(i64::from(ALL_LEVEL));
    assert_eq!(logger.level(), LevelMask::ALL);

    assert!(logger.sink().is_empty());
}

// ============================================================================
// Parsing
// ============================================================================

/// Verifies textual masks in the accepted spellings.
#[test]
fn masks_parse_from_text() {
    let cases = [
        ("all", ALL_LEVEL),
        ("none", 0),
        ("debug|info", DEBUG | INFO),
        ("W, E", WARN | ERROR),
        ("warning", WARN),
        ("verbose", VERBOSE),
    ];
    for (text, bits) in cases {
        let mask: LevelMask = text.parse().expect("mask parses");
        assert_eq!(mask.bits(), bits, "{text}");
    }
}

/// Verifies unknown tokens are rejected and reported.
#[test]
fn unknown_tokens_are_rejected() {
    let err = "info|loud".parse::<LevelMask>().expect_err("loud is not a level");
    assert_eq!(err.token(), "loud");
}

/// Verifies a parsed mask drives filtering.
#[test]
fn parsed_mask_drives_filtering() {
    let logger = Logger::with_config(
        RecordingSink::new(),
        LoggerConfig::default().with_levels("error".parse::<LevelMask>().expect("mask parses")),
    );

    log_everything(&logger);

    assert_eq!(logger.sink().texts(), ["e"]);
    assert!(!logger.is_enabled(Severity::Warn));
}

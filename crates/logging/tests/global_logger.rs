//! Integration tests for the process-wide logger.
//!
//! The process-wide logger can only be installed once per process, so the
//! whole lifecycle is exercised by a single test.

use std::sync::Arc;

use logging::{INFO, InstallError, LevelMask, LoggerConfig, Priority, Severity, global};
use test_support::{Record, RecordingSink};

/// Verifies installation, the free functions, and rejection of a second install.
#[test]
fn install_then_log_through_free_functions() {
    let sink = Arc::new(RecordingSink::new());
    let config = LoggerConfig::default().with_internal_tag("Global");
    let installed =
        global::install_with_config(Arc::clone(&sink), config).expect("first install succeeds");
    assert_eq!(installed.internal_tag(), "Global");
    assert!(std::ptr::eq(installed, global::logger()));

    global::verbose("G", "v");
    global::debug("G", "d");
    global::info("G", "i");
    global::warn("G", "w");
    global::error("G", None);
    global::info_fmt("G", "%s#%d", &["job".into(), 4.into()]).expect("format succeeds");
    assert!(global::debug_fmt("G", "%d", &[true.into()]).is_err());
    assert_eq!(
        sink.take(),
        [
            Record::new(Priority::Verbose, "G", "v"),
            Record::new(Priority::Debug, "G", "d"),
            Record::new(Priority::Info, "G", "i"),
            Record::new(Priority::Warn, "G", "w"),
            Record::new(Priority::Error, "G", " "),
            Record::new(Priority::Info, "G", "job#4"),
        ]
    );

    global::set_level(i64::from(INFO));
    assert_eq!(global::level(), LevelMask::from(Severity::Info));
    global::warn_fmt("G", "hidden", &[]).expect("format succeeds");
    global::verbose_fmt("G", "hidden", &[]).expect("format succeeds");
    global::error_fmt("G", "hidden", &[]).expect("format succeeds");
    global::info("G", "shown");
    assert_eq!(sink.texts(), ["shown"]);

    global::set_level(-3);
    assert_eq!(global::level(), LevelMask::from(Severity::Info));
    assert_eq!(sink.take().last().map(|r| r.tag.clone()).as_deref(), Some("Global"));

    let second = global::install(RecordingSink::new());
    assert_eq!(second.err(), Some(InstallError::AlreadyInstalled));
}

//! Tests for the run module.

use super::*;
use clipboard_monitor::logger::Severity;
use std::path::Path;
use std::time::Duration;

fn config_for(log_file: &Path, level: Severity) -> ValidatedConfig {
    ValidatedConfig {
        log_file: log_file.to_path_buf(),
        log_level: level,
        interval: Duration::from_millis(250),
        verbose: false,
    }
}

mod run_error {
    use super::*;

    #[test]
    fn signal_error_names_the_signal() {
        let error = RunError::Signal {
            signal: "SIGTERM",
            source: std::io::Error::other("not permitted"),
        };

        assert_eq!(
            error.to_string(),
            "Failed to install SIGTERM handler: not permitted"
        );
    }

    #[test]
    fn runtime_error_displays_source() {
        let error = RunError::Runtime(std::io::Error::other("no threads"));
        assert!(error.to_string().contains("Failed to start async runtime"));
    }

    #[test]
    fn setup_errors_are_classified() {
        let setup = RunError::Runtime(std::io::Error::other("x"));
        let open = RunError::OpenLog(LogError::Write(std::io::Error::other("x")));
        let monitor = RunError::Monitor(MonitorError::Sink(LogError::Write(
            std::io::Error::other("x"),
        )));

        assert!(setup.is_setup());
        assert!(open.is_setup());
        assert!(!monitor.is_setup());
    }

    #[test]
    fn debug_format_works() {
        let error = RunError::Runtime(std::io::Error::other("x"));
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("Runtime"));
    }
}

mod open_log {
    use super::*;

    #[test]
    fn writes_started_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.log");

        let logger = open_log(&config_for(&path, Severity::Info)).unwrap();
        drop(logger);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.ends_with(" - INFO - Clipboard monitoring started.\n"));
    }

    #[test]
    fn debug_level_also_records_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.log");

        open_log(&config_for(&path, Severity::Debug)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(" - DEBUG - Configuration: Config { log_file: "));
        assert!(lines[1].contains("interval: 250ms"));
    }

    #[test]
    fn error_level_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.log");

        open_log(&config_for(&path, Severity::Error)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unopenable_path_is_setup_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone").join("clip.log");

        let result = open_log(&config_for(&path, Severity::Info));

        let err = result.unwrap_err();
        assert!(matches!(err, RunError::OpenLog(LogError::Open { .. })));
        assert!(err.is_setup());
    }
}

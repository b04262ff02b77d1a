//! Tests for CLI argument parsing.

use super::cli::{Cli, Command, LevelArg};
use crate::logger::Severity;

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["clipboard-monitor"]);

        assert!(cli.command.is_none());
        assert!(cli.log_file.is_none());
        assert!(cli.log_level.is_none());
        assert!(cli.interval.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_all_options() {
        let cli = Cli::parse_from_iter([
            "clipboard-monitor",
            "--log-file",
            "my_clipboard.log",
            "--log-level",
            "DEBUG",
            "--interval",
            "2",
        ]);

        assert_eq!(
            cli.log_file.as_ref().unwrap().to_str(),
            Some("my_clipboard.log")
        );
        assert_eq!(cli.log_level, Some(LevelArg::Debug));
        assert_eq!(cli.interval, Some(2.0));
    }

    #[test]
    fn parse_fractional_interval() {
        let cli = Cli::parse_from_iter(["clipboard-monitor", "--interval", "0.5"]);
        assert_eq!(cli.interval, Some(0.5));
    }

    #[test]
    fn negative_interval_reaches_validation() {
        let cli = Cli::parse_from_iter(["clipboard-monitor", "--interval", "-1"]);
        assert_eq!(cli.interval, Some(-1.0));
    }

    #[test]
    fn parse_all_levels() {
        let cases = [
            ("DEBUG", LevelArg::Debug),
            ("INFO", LevelArg::Info),
            ("WARNING", LevelArg::Warning),
            ("ERROR", LevelArg::Error),
            ("CRITICAL", LevelArg::Critical),
        ];

        for (name, expected) in cases {
            let cli = Cli::parse_from_iter(["clipboard-monitor", "--log-level", name]);
            assert_eq!(cli.log_level, Some(expected), "level {name}");
        }
    }

    #[test]
    fn level_is_case_insensitive() {
        let cli = Cli::parse_from_iter(["clipboard-monitor", "--log-level", "warning"]);
        assert_eq!(cli.log_level, Some(LevelArg::Warning));
    }

    #[test]
    fn parse_misc_options() {
        let cli = Cli::parse_from_iter([
            "clipboard-monitor",
            "--config",
            "/path/to/config.toml",
            "--verbose",
        ]);

        assert_eq!(
            cli.config.as_ref().unwrap().to_str(),
            Some("/path/to/config.toml")
        );
        assert!(cli.verbose);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter(["clipboard-monitor", "-c", "cfg.toml", "-v"]);

        assert!(cli.config.is_some());
        assert!(cli.verbose);
    }
}

mod rejection {
    use super::*;

    #[test]
    fn unknown_level_is_rejected() {
        let result = Cli::try_parse_from_iter(["clipboard-monitor", "--log-level", "TRACE"]);
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_interval_is_rejected() {
        let result = Cli::try_parse_from_iter(["clipboard-monitor", "--interval", "fast"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = Cli::try_parse_from_iter(["clipboard-monitor", "--poll-interval", "5"]);
        assert!(result.is_err());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["clipboard-monitor", "init"]);

        assert!(cli.is_init());
        let Some(Command::Init { output }) = cli.command else {
            panic!("expected init command");
        };
        assert_eq!(output.to_str(), Some("clipboard-monitor.toml"));
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from_iter(["clipboard-monitor", "init", "-o", "custom.toml"]);

        let Some(Command::Init { output }) = cli.command else {
            panic!("expected init command");
        };
        assert_eq!(output.to_str(), Some("custom.toml"));
    }

    #[test]
    fn run_mode_is_not_init() {
        let cli = Cli::parse_from_iter(["clipboard-monitor"]);
        assert!(!cli.is_init());
    }
}

mod level_conversion {
    use super::*;

    #[test]
    fn every_level_maps_to_matching_severity() {
        let pairs = [
            (LevelArg::Debug, Severity::Debug),
            (LevelArg::Info, Severity::Info),
            (LevelArg::Warning, Severity::Warning),
            (LevelArg::Error, Severity::Error),
            (LevelArg::Critical, Severity::Critical),
        ];

        for (arg, severity) in pairs {
            assert_eq!(Severity::from(arg), severity);
        }
    }
}

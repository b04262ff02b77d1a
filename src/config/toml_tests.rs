//! Tests for TOML configuration parsing.

use std::path::Path;

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.log.file.is_none());
        assert!(config.log.level.is_none());
        assert!(config.monitor.interval.is_none());
    }

    #[test]
    fn full_document() {
        let config = TomlConfig::parse(
            r#"
            [log]
            file = "/var/log/clipboard.log"
            level = "WARNING"

            [monitor]
            interval = 0.25
        "#,
        )
        .unwrap();

        assert_eq!(
            config.log.file.as_deref(),
            Some(Path::new("/var/log/clipboard.log"))
        );
        assert_eq!(config.log.level.as_deref(), Some("WARNING"));
        assert_eq!(config.monitor.interval, Some(0.25));
    }

    #[test]
    fn partial_section() {
        let config = TomlConfig::parse(
            r"
            [monitor]
            interval = 3.0
        ",
        )
        .unwrap();

        assert!(config.log.file.is_none());
        assert_eq!(config.monitor.interval, Some(3.0));
    }

    #[test]
    fn integer_interval_is_accepted() {
        let config = TomlConfig::parse(
            r"
            [monitor]
            interval = 2
        ",
        )
        .unwrap();

        assert_eq!(config.monitor.interval, Some(2.0));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = TomlConfig::parse(
            r"
            [monitor]
            poll_interval = 1.0
        ",
        );

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse(
            r#"
            [clipboard]
            format = "text"
        "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result = TomlConfig::parse("[log\nfile = ");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[log]\nlevel = \"DEBUG\"\n").unwrap();

        let config = TomlConfig::load(&path).unwrap();

        assert_eq!(config.log.level.as_deref(), Some("DEBUG"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = TomlConfig::load(&path);

        let Err(ConfigError::FileRead { path: reported, .. }) = result else {
            panic!("expected FileRead error");
        };
        assert_eq!(reported, path);
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(
            config.log.file.as_deref(),
            Some(Path::new("clipboard_monitor.log"))
        );
        assert_eq!(config.log.level.as_deref(), Some("INFO"));
        assert_eq!(config.monitor.interval, Some(1.0));
    }

    #[test]
    fn template_lists_all_levels() {
        let template = default_config_template();

        for level in ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"] {
            assert!(template.contains(level), "missing {level}");
        }
    }
}

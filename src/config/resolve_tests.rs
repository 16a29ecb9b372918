//! Tests for layered parameter resolution and precedence rules.

use std::io::Write;

use super::cli::Cli;
use super::error::ConfigError;
use super::resolve::{PartialParams, ResolvedParams};

fn cli(args: &[&str]) -> Cli {
    let argv = std::iter::once("router-restart").chain(args.iter().copied());
    Cli::parse_from_iter(argv)
}

mod defaults {
    use super::*;

    #[test]
    fn no_sources_yield_the_built_in_defaults() {
        let params = ResolvedParams::resolve([]);

        assert_eq!(
            params,
            ResolvedParams {
                host: "192.168.0.1".to_string(),
                port: 80,
                username: "admin".to_string(),
                password: "admin".to_string(),
            }
        );
    }

    #[test]
    fn unset_fields_fall_back_per_field() {
        let layer = PartialParams {
            host: Some("10.0.0.1".to_string()),
            ..PartialParams::default()
        };

        let params = ResolvedParams::resolve([layer]);

        assert_eq!(params.host, "10.0.0.1");
        assert_eq!(params.port, 80);
        assert_eq!(params.username, "admin");
        assert_eq!(params.password, "admin");
    }
}

mod precedence {
    use super::*;

    fn layer(host: Option<&str>, port: Option<u16>) -> PartialParams {
        PartialParams {
            host: host.map(ToOwned::to_owned),
            port,
            ..PartialParams::default()
        }
    }

    #[test]
    fn higher_layer_wins_per_field() {
        let higher = layer(Some("cli.lan"), None);
        let lower = layer(Some("file.lan"), Some(8080));

        let params = ResolvedParams::resolve([higher, lower]);

        // host comes from the higher layer, port from the lower one
        assert_eq!(params.host, "cli.lan");
        assert_eq!(params.port, 8080);
    }

    #[test]
    fn set_field_is_never_overwritten_by_a_later_layer() {
        let first = layer(Some("first.lan"), Some(1));
        let second = layer(Some("second.lan"), Some(2));
        let third = layer(Some("third.lan"), Some(3));

        let params = ResolvedParams::resolve([first, second, third]);

        assert_eq!(params.host, "first.lan");
        assert_eq!(params.port, 1);
    }

    #[test]
    fn fields_resolve_independently_across_layers() {
        let cli_layer = PartialParams {
            username: Some("root".to_string()),
            ..PartialParams::default()
        };
        let file_layer = PartialParams {
            host: Some("10.0.0.1".to_string()),
            password: Some("secret".to_string()),
            ..PartialParams::default()
        };

        let params = ResolvedParams::resolve([cli_layer, file_layer]);

        assert_eq!(params.username, "root");
        assert_eq!(params.host, "10.0.0.1");
        assert_eq!(params.password, "secret");
        assert_eq!(params.port, 80);
    }
}

mod loading {
    use super::*;

    #[test]
    fn cli_values_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "file.lan", "port": 8080}}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let cli = cli(&["--host", "cli.lan", "--config-file", path]);

        let params = ResolvedParams::load_with_personal(&cli, None).unwrap();

        assert_eq!(params.host, "cli.lan");
        assert_eq!(params.port, 8080);
    }

    #[test]
    fn config_file_overrides_personal_file() {
        let mut user_file = tempfile::NamedTempFile::new().unwrap();
        write!(user_file, r#"{{"username": "from-user-file"}}"#).unwrap();

        let mut personal = tempfile::NamedTempFile::new().unwrap();
        write!(
            personal,
            r#"{{"username": "from-personal", "password": "personal-pass"}}"#
        )
        .unwrap();

        let path = user_file.path().to_str().unwrap();
        let cli = cli(&["--config-file", path]);

        let params =
            ResolvedParams::load_with_personal(&cli, Some(personal.path().to_path_buf()))
                .unwrap();

        assert_eq!(params.username, "from-user-file");
        assert_eq!(params.password, "personal-pass");
    }

    #[test]
    fn missing_personal_file_is_silently_ignored() {
        let cli = cli(&[]);

        let params = ResolvedParams::load_with_personal(
            &cli,
            Some("/nonexistent/.router-restart.conf".into()),
        )
        .unwrap();

        assert_eq!(params.host, "192.168.0.1");
    }

    #[test]
    fn malformed_personal_file_is_skipped() {
        let mut personal = tempfile::NamedTempFile::new().unwrap();
        write!(personal, "not json at all").unwrap();

        let cli = cli(&[]);
        let params =
            ResolvedParams::load_with_personal(&cli, Some(personal.path().to_path_buf()))
                .unwrap();

        assert_eq!(params.host, "192.168.0.1");
    }

    #[test]
    fn missing_user_config_file_is_fatal() {
        let cli = cli(&["--config-file", "/nonexistent/router.conf"]);

        let result = ResolvedParams::load_with_personal(&cli, None);
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn non_numeric_port_in_config_file_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": "not-a-number"}}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let cli = cli(&["--config-file", path]);

        let result = ResolvedParams::load_with_personal(&cli, None);
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_omits_the_password() {
        let params = ResolvedParams::resolve([PartialParams {
            password: Some("secret".to_string()),
            ..PartialParams::default()
        }]);

        let rendered = params.to_string();
        assert!(rendered.contains("192.168.0.1"));
        assert!(!rendered.contains("secret"));
    }
}

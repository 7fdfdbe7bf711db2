use airportdex::config::Config;

#[test]
fn test_default_config_values() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert!(config.server.cpu_count >= 1);

    assert_eq!(config.database.database_url, "airports.db");
    assert_eq!(config.database.pool_size, 10);

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "plain");
    assert!(config.logging.file.is_none());
    assert!(config.logging.enable_rotation);
    assert_eq!(config.logging.max_backups, 7);
}

#[test]
fn test_parse_full_toml() {
    let content = r#"
[server]
host = "0.0.0.0"
port = 8080
cpu_count = 4

[database]
database_url = "postgres://geo:secret@db/geo"
pool_size = 25

[logging]
level = "debug"
file = "/var/log/airportdex.log"
enable_rotation = false
max_backups = 3
format = "json"
"#;

    let config: Config = toml::from_str(content).expect("Failed to parse TOML");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.cpu_count, 4);
    assert_eq!(config.database.database_url, "postgres://geo:secret@db/geo");
    assert_eq!(config.database.pool_size, 25);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some("/var/log/airportdex.log")
    );
    assert!(!config.logging.enable_rotation);
    assert_eq!(config.logging.max_backups, 3);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_partial_toml_uses_defaults() {
    let content = r#"
[server]
port = 9000
"#;

    let config: Config = toml::from_str(content).expect("Failed to parse TOML");

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.database.database_url, "airports.db");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_toml_is_all_defaults() {
    let config: Config = toml::from_str("").expect("Failed to parse TOML");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.database.pool_size, 10);
    assert_eq!(config.logging.format, "plain");
}

use agentic_patterns::core::config::loader::CONFIG_FILE_NAME;
use agentic_patterns::core::{ConfigLoader, ErrorCategory};
use agentic_patterns::utils::OutputFormat;
use insta::assert_debug_snapshot;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_patterns_env() {
    for v in &[
        "PATTERNS_FRAMEWORK",
        "PATTERNS_LINK_BY_ROLE",
        "PATTERNS_OUTPUT_DIR",
        "PATTERNS_OUTPUT_FORMAT",
        "PATTERNS_OUTPUT_PRETTY",
        "PATTERNS_RECURSIVE",
    ] {
        env::remove_var(v);
    }
}

/// Test integration of config loading with environment variables
#[test]
#[serial]
fn test_config_loading_integration() {
    clear_patterns_env();
    let temp_dir = TempDir::new().unwrap();
    let workspace_path = temp_dir.path();

    let config_content = r#"
[extractor]
framework = "crewai"
link_by_role = true

[output]
directory = "patterns"
format = "yaml"
pretty = false

[discovery]
recursive = false

[logging]
default_level = "debug"
"#;
    fs::write(workspace_path.join(CONFIG_FILE_NAME), config_content).unwrap();

    let config = ConfigLoader::load_from_workspace(workspace_path).unwrap();

    assert_debug_snapshot!(config, @r###"
    AppConfig {
        extractor: ExtractorConfig {
            framework: "crewai",
            link_by_role: true,
        },
        output: OutputConfig {
            directory: Some(
                "patterns",
            ),
            format: Yaml,
            pretty: false,
        },
        discovery: DiscoveryConfig {
            recursive: false,
        },
    }
    "###);

    env::set_var("PATTERNS_FRAMEWORK", "autogen");
    env::set_var("PATTERNS_OUTPUT_FORMAT", "json");
    env::set_var("PATTERNS_RECURSIVE", "true");
    env::set_var("PATTERNS_OUTPUT_DIR", "");

    let config = ConfigLoader::load_from_workspace(workspace_path).unwrap();
    assert_eq!(config.extractor.framework, "autogen");
    assert!(config.extractor.link_by_role);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.directory.is_none());
    assert!(config.discovery.recursive);

    clear_patterns_env();
}

#[test]
#[serial]
fn test_partial_config_keeps_defaults() {
    clear_patterns_env();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[output]\ndirectory = \"out\"\n").unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.extractor.framework, "generic");
    assert!(!config.extractor.link_by_role);
    assert_eq!(config.output.directory, Some(PathBuf::from("out")));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.pretty);
    assert!(config.discovery.recursive);
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_patterns_env();
    let temp_dir = TempDir::new().unwrap();
    env::set_var("PATTERNS_OUTPUT_PRETTY", "sometimes");
    env::set_var("PATTERNS_OUTPUT_FORMAT", "xml");

    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    assert!(config.output.pretty);
    assert_eq!(config.output.format, OutputFormat::Json);

    clear_patterns_env();
}

#[test]
#[serial]
fn test_framework_with_path_separator_is_rejected() {
    clear_patterns_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[extractor]\nframework = \"crew/ai\"\n",
    )
    .unwrap();

    let err = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ConfigurationError);
    assert!(err.message.contains("crew/ai"));
}

#[test]
#[serial]
fn test_malformed_toml_is_a_configuration_error() {
    clear_patterns_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[extractor\n").unwrap();

    let err = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ConfigurationError);
}

#[test]
fn test_env_var_documentation_lists_every_override() {
    let docs = ConfigLoader::env_var_documentation();
    assert_eq!(docs.len(), 6);
    assert!(docs.iter().all(|line| line.starts_with("PATTERNS_")));
}

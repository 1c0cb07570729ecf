use bindery_kernel::config::{ConfigError, ConfigErrorExt, env_overrides, load_config, load_config_from};
use bindery_kernel::domain::context::HostContext;
use serial_test::serial;
use std::collections::HashMap;
use std::fs;

#[test]
#[serial]
fn load_config_reads_file_values() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("host.toml");
    fs::write(
        &path,
        r#"
[runtime]
name = "test-host"
locale = "de-DE"

[storage]
data_dir = "/tmp/bindery-data"
"#,
    )
    .expect("write config");

    let ctx: HostContext = load_config(Some(&path)).expect("load config");
    assert_eq!(ctx.runtime.name, "test-host");
    assert_eq!(ctx.runtime.locale, "de-DE");
    assert_eq!(ctx.storage.data_dir, std::path::PathBuf::from("/tmp/bindery-data"));
    // Untouched sections fall back to defaults.
    assert_eq!(ctx.logging.level, "info");
}

#[test]
#[serial]
fn load_config_env_overrides_file_values() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("host.toml");
    fs::write(
        &path,
        r#"
[runtime]
name = "test-host"
locale = "de-DE"
"#,
    )
    .expect("write config");

    let vars = HashMap::from([("BINDERY__RUNTIME__LOCALE".to_owned(), "ja-JP".to_owned())]);
    let env = env_overrides().source(Some(vars));

    let ctx: HostContext = load_config_from(Some(&path), env).expect("load config");
    // The variable wins over the file, other keys keep their file values.
    assert_eq!(ctx.runtime.locale, "ja-JP");
    assert_eq!(ctx.runtime.name, "test-host");
}

#[test]
#[serial]
fn load_config_missing_file_errors() {
    let result: Result<HostContext, ConfigError> = load_config(Some("definitely/not/here"));
    assert!(result.is_err());
}

#[test]
fn context_ext_annotates_errors() {
    let source = config::Config::builder()
        .add_source(config::File::with_name("definitely/not/here").required(true))
        .build();
    let err = source.context("Loading host settings").expect_err("must fail");
    assert!(err.to_string().contains("Loading host settings"));
}

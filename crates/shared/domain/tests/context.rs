use bindery_domain::context::{HostContext, LoggingConfig, RuntimeConfig, StorageConfig};
use serde_json::json;

#[test]
fn context_defaults_are_sane() {
    let runtime = RuntimeConfig::default();
    assert_eq!(runtime.name, "bindery");
    assert_eq!(runtime.locale, "en-US");

    let storage = StorageConfig::default();
    assert_eq!(storage.data_dir, std::path::PathBuf::from("data"));
    assert_eq!(storage.cache_dir, std::path::PathBuf::from("cache"));

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.path.is_none());
}

#[test]
fn host_context_deserializes() {
    let raw = json!({
        "runtime": { "name": "harmony-shell", "locale": "uk-UA" },
        "storage": { "data_dir": "/tmp/data", "cache_dir": "/tmp/cache" },
        "logging": { "level": "debug", "console": false, "path": "/tmp/logs" }
    });

    let ctx: HostContext = serde_json::from_value(raw).expect("context deserialize");
    assert_eq!(ctx.runtime.name, "harmony-shell");
    assert_eq!(ctx.runtime.locale, "uk-UA");
    assert_eq!(ctx.storage.data_dir, std::path::PathBuf::from("/tmp/data"));
    assert_eq!(ctx.logging.level, "debug");
    assert!(!ctx.logging.console);
}

#[test]
fn host_context_clones_share_inner() {
    let ctx = HostContext::default();
    let clone = ctx.clone();
    assert_eq!(ctx.runtime.name, clone.runtime.name);
}

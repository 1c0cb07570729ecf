use anyhow::Context;
use bindery::CapabilityIndex;
use bindery::domain::context::HostContext;
use bindery::kernel::config::load_config;
use bindery_logger::{LevelFilter, Logger};
use std::str::FromStr;

fn main() -> anyhow::Result<()> {
    // Missing host.toml is not fatal; the default context is complete.
    let ctx: HostContext = load_config(Some("host")).unwrap_or_default();

    let level = LevelFilter::from_str(&ctx.logging.level).unwrap_or(LevelFilter::INFO);
    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).console(ctx.logging.console).level(level);
    if let Some(path) = &ctx.logging.path {
        builder = builder.path(path);
    }
    let _log = builder.init().context("Critical: logger initialization failed")?;

    let registry = bindery::get_packages(&ctx).map_err(|e| anyhow::anyhow!("{e}"))?;
    tracing::info!(packages = registry.len(), "Package registry built");

    for package in &registry {
        let descriptor = package.descriptor();
        tracing::info!(
            package = %descriptor.kind,
            modules = descriptor.modules.len(),
            components = descriptor.components.len(),
            "Package bound"
        );
    }

    let index = CapabilityIndex::from_registry(&registry);
    let (modules, components) = index.counts();
    tracing::info!(modules, components, "Capability index ready");

    Ok(())
}

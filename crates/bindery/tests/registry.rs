use bindery::domain::context::HostContext;
use bindery::domain::manifest::{DEFAULT_ORDER, PackageKind};
use bindery::{CapabilityIndex, build, get_packages, packages};
use bindery_generated::{Generated, GeneratedInner};
use proptest::prelude::*;
use std::path::PathBuf;

#[test]
fn default_build_returns_all_packages_in_declared_order() {
    let ctx = HostContext::default();
    let registry = get_packages(&ctx).expect("default build should succeed");

    assert_eq!(registry.len(), 19);
    let kinds: Vec<PackageKind> = registry.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, DEFAULT_ORDER.to_vec());
}

#[test]
fn repeated_builds_are_deterministic() {
    let ctx = HostContext::default();
    let first = get_packages(&ctx).expect("build");
    let second = get_packages(&ctx).expect("build");

    let first_ids: Vec<_> = first.iter().map(|p| (p.kind, p.id)).collect();
    let second_ids: Vec<_> = second.iter().map(|p| (p.kind, p.id)).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn minimal_order_builds_exactly_two() {
    let ctx = HostContext::default();
    let registry = build(&ctx, &[PackageKind::SafeAreaView, PackageKind::Generated])
        .expect("minimal build should succeed");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry[0].kind, PackageKind::SafeAreaView);
    assert_eq!(registry[1].kind, PackageKind::Generated);
}

#[test]
fn duplicate_kind_registers_two_fresh_instances() {
    let ctx = HostContext::default();
    let registry = build(&ctx, &[PackageKind::Generated, PackageKind::Generated])
        .expect("duplicate build should succeed");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry[0].id, registry[1].id);

    let a = registry[0].state.as_any().downcast_ref::<Generated>().expect("downcast");
    let b = registry[1].state.as_any().downcast_ref::<Generated>().expect("downcast");
    let pa: *const GeneratedInner = &**a;
    let pb: *const GeneratedInner = &**b;
    assert!(!std::ptr::eq(pa, pb), "duplicate entries must be independent instances");
}

#[test]
fn construction_failure_aborts_the_build() {
    let mut ctx = HostContext::default();
    ctx.storage.data_dir = PathBuf::new();

    let result =
        build(&ctx, &[PackageKind::WebView, PackageKind::AsyncStorage, PackageKind::Share]);
    let err = result.expect_err("empty data dir must fail AsyncStorage");
    assert!(err.to_string().contains("AsyncStorage"));
}

#[test]
fn invalid_locale_propagates_from_the_intl_package() {
    let mut ctx = HostContext::default();
    ctx.runtime.locale = String::new();

    let err = build(&ctx, &[PackageKind::Localize]).expect_err("empty locale must fail");
    assert!(err.to_string().contains("locale"));
}

#[test]
fn capability_index_covers_the_default_build() {
    let ctx = HostContext::default();
    let registry = get_packages(&ctx).expect("build");
    let index = CapabilityIndex::from_registry(&registry);

    assert_eq!(index.module("AsyncStorage"), Some(PackageKind::AsyncStorage));
    assert_eq!(index.component("SafeAreaProvider"), Some(PackageKind::SafeAreaView));
    assert_eq!(index.module("GeneratedBindings"), Some(PackageKind::Generated));
    assert_eq!(index.module("NoSuchModule"), None);

    let (modules, components) = index.counts();
    assert!(modules >= 15);
    assert!(components >= 5);
}

#[test]
fn every_family_is_enabled() {
    for family in ["view", "web", "storage", "fs", "media", "motion", "intl", "generated"] {
        assert!(packages::is_enabled(family), "{family} should be enabled");
    }
    assert!(!packages::is_enabled("bluetooth"));
}

proptest! {
    /// Any compile-time order over the known kinds builds without dedup or
    /// reordering (the default context satisfies every constructor).
    #[test]
    fn build_preserves_arbitrary_orders(
        order in prop::collection::vec(prop::sample::select(DEFAULT_ORDER.to_vec()), 0..40)
    ) {
        let ctx = HostContext::default();
        let registry = build(&ctx, &order).expect("build should succeed");
        prop_assert_eq!(registry.len(), order.len());
        let kinds: Vec<PackageKind> = registry.iter().map(|p| p.kind).collect();
        prop_assert_eq!(kinds, order);
    }
}

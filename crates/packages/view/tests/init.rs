use bindery_kernel::domain::capabilities::CapabilityClass;
use bindery_kernel::domain::context::HostContext;
use bindery_view::{SafeAreaView, init_immersive, init_safe_area_view, init_view_pager};

#[test]
fn init_creates_safe_area_package() {
    let ctx = HostContext::default();
    let package = init_safe_area_view(&ctx).expect("init should succeed");
    assert_eq!(package.id, std::any::TypeId::of::<SafeAreaView>());

    let descriptor = package.descriptor();
    assert!(descriptor.classes.contains(CapabilityClass::COMPONENTS));
    assert!(descriptor.components.iter().any(|c| c == "SafeAreaProvider"));
}

#[test]
fn pager_and_immersive_expose_distinct_classes() {
    let ctx = HostContext::default();

    let pager = init_view_pager(&ctx).expect("init should succeed");
    assert_eq!(pager.descriptor().classes, CapabilityClass::COMPONENTS);

    let immersive = init_immersive(&ctx).expect("init should succeed");
    assert_eq!(immersive.descriptor().classes, CapabilityClass::MODULES);
}

use bindery_kernel::prelude::*;

#[bindery_derive::package]
pub struct Share {}

impl Capabilities for Share {
    fn descriptor(&self) -> PackageDescriptor {
        PackageDescriptor::new(PackageKind::Share).module("Share")
    }
}

fn main() {
    let handle = Share::new(ShareInner {});
    let registered = RegisteredPackage::new(PackageKind::Share, handle);
    assert_eq!(registered.kind, PackageKind::Share);
    assert_eq!(registered.descriptor().modules, vec!["Share"]);
}

#[test]
fn package_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/package_pass.rs");
    t.pass("tests/ui/package_empty_pass.rs");
    t.compile_fail("tests/ui/package_enum_fail.rs");
    t.compile_fail("tests/ui/package_tuple_fail.rs");
}

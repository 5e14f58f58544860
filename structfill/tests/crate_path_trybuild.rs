//! trybuild coverage for derive expansion outside the runtime crate.
//!
//! Ensures generated code compiles for renamed dependencies and for the
//! generic and enum forms the derive supports.

#[test]
fn derive_fixtures_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_path_alias.rs");
    t.pass("tests/trybuild/generic_and_enum.rs");
}

//! Unit tests for settings construction and the settings dump.

use anyhow::{Result, ensure};
use rstest::rstest;

use super::Settings;
use crate::{
    Complex, with_bool, with_complex, with_custom_type, with_fail_on_unrecognized, with_float,
    with_int, with_max_depth, with_string, with_uint, with_verbose,
};

#[derive(Debug, Clone, PartialEq)]
struct Marker {
    label: &'static str,
}

#[rstest]
fn defaults_match_builtin_constants() {
    let settings = Settings::default();
    assert_eq!(settings.int(), 1);
    assert_eq!(settings.uint(), 2);
    assert!((settings.float() - 3.0).abs() < f64::EPSILON);
    assert_eq!(settings.string(), "string");
    assert!(settings.boolean());
    assert_eq!(settings.complex(), Complex::new(4.0, 5.0));
    assert!(!settings.verbose());
    assert!(!settings.fail_on_unrecognized());
    assert_eq!(settings.max_depth(), 32);
    assert_eq!(settings.override_count(), 0);
}

#[rstest]
fn empty_mutator_list_builds_defaults() {
    let settings = Settings::build([]);
    assert_eq!(settings.int(), Settings::default().int());
    assert_eq!(settings.string(), "string");
}

#[rstest]
fn each_mutator_sets_one_setting() {
    let settings = Settings::build([
        with_bool(false),
        with_string("foobar"),
        with_int(-5),
        with_uint(9),
        with_float(0.5),
        with_complex(Complex::new(1.0, -1.0)),
        with_verbose(),
        with_fail_on_unrecognized(),
        with_max_depth(3),
    ]);
    assert!(!settings.boolean());
    assert_eq!(settings.string(), "foobar");
    assert_eq!(settings.int(), -5);
    assert_eq!(settings.uint(), 9);
    assert!((settings.float() - 0.5).abs() < f64::EPSILON);
    assert_eq!(settings.complex(), Complex::new(1.0, -1.0));
    assert!(settings.verbose());
    assert!(settings.fail_on_unrecognized());
    assert_eq!(settings.max_depth(), 3);
}

#[rstest]
fn later_mutators_win() {
    let settings = Settings::build([with_int(1), with_string("a"), with_int(2), with_string("b")]);
    assert_eq!(settings.int(), 2);
    assert_eq!(settings.string(), "b");
}

#[rstest]
fn repeated_flags_are_idempotent() {
    let settings = Settings::build([with_verbose(), with_verbose()]);
    assert!(settings.verbose());
}

#[rstest]
fn overrides_are_keyed_by_exact_type() {
    let settings = Settings::build([with_custom_type(Marker { label: "first" })]);
    assert!(settings.has_override::<Marker>());
    assert!(!settings.has_override::<Option<Marker>>());
    assert_eq!(settings.override_for::<Marker>(), Some(Marker { label: "first" }));
    assert_eq!(settings.override_for::<String>(), None);
}

#[rstest]
fn reregistering_a_type_replaces_its_override() {
    let settings = Settings::build([
        with_custom_type(Marker { label: "first" }),
        with_custom_type(7_u8),
        with_custom_type(Marker { label: "second" }),
    ]);
    assert_eq!(settings.override_count(), 2);
    assert_eq!(settings.override_for::<Marker>(), Some(Marker { label: "second" }));
    assert_eq!(settings.override_for::<u8>(), Some(7));
}

#[rstest]
fn override_values_are_cloned_per_lookup() {
    let settings = Settings::build([with_custom_type(vec![1_i32, 2])]);
    let mut first = settings.override_for::<Vec<i32>>().unwrap_or_default();
    first.push(3);
    assert_eq!(settings.override_for::<Vec<i32>>(), Some(vec![1, 2]));
}

#[rstest]
fn describe_renders_a_settings_table() -> Result<()> {
    let dump = Settings::build([with_string("foobar")]).describe();
    ensure!(dump.starts_with("[settings]"), "missing table header: {dump}");
    for needle in [
        "int = 1",
        "uint = 2",
        "string = \"foobar\"",
        "bool = true",
        "verbose = false",
        "fail_on_unrecognized = false",
        "max_depth = 32",
    ] {
        ensure!(dump.contains(needle), "missing `{needle}` in {dump}");
    }
    Ok(())
}

#[rstest]
fn describe_lists_custom_types_by_name() -> Result<()> {
    let dump = Settings::build([with_custom_type(Marker { label: "first" })]).describe();
    ensure!(
        dump.contains("[settings.custom_types]"),
        "missing custom type table: {dump}"
    );
    ensure!(dump.contains("Marker"), "missing type name: {dump}");
    ensure!(dump.contains("first"), "missing rendered value: {dump}");
    Ok(())
}

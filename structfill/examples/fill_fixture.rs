//! Example program populating a nested fixture with custom defaults.
//!
//! String and integer defaults are replaced, and every `Inner` record is
//! swapped for a fixed value instead of being populated field by field.

use std::io::{self, Write};

use structfill::{FillResult, Mutator, Populate, fill, with_custom_type, with_int, with_string};

/// Record substituted wholesale through `with_custom_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Populate)]
struct Inner {
    pub one: String,
}

/// Fixture populated by the example.
#[derive(Debug, Default, PartialEq, Eq, Populate)]
struct Outer {
    pub one: String,
    pub two: i64,
    pub three: Inner,
    pub four: String,
}

fn mutators() -> Vec<Mutator> {
    vec![
        with_string("foobar"),
        with_int(123),
        with_custom_type(Inner {
            one: String::from("Hello World!"),
        }),
    ]
}

fn expected() -> Outer {
    Outer {
        one: String::from("foobar"),
        two: 123,
        three: Inner {
            one: String::from("Hello World!"),
        },
        four: String::from("foobar"),
    }
}

fn build() -> FillResult<Outer> {
    let mut got = Outer::default();
    fill(&mut got, mutators())?;
    Ok(got)
}

fn main() -> Result<(), String> {
    let got = build().map_err(|err| err.to_string())?;
    let want = expected();
    if got != want {
        return Err(format!("fill mismatch: want {want:?}, got {got:?}"));
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Done: {got:?}").map_err(|err| err.to_string())
}

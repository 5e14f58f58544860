//! Trybuild fixture verifying `#[populate(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use structfill as fixtures;
use std::collections::BTreeMap;

use fixtures::{MapKey, Populate, fill, with_int};

/// Generated code must reference types through `fixtures::`.
#[derive(Debug, Default, Populate)]
#[populate(crate = "fixtures")]
struct Aliased {
    pub value: String,
    pub count: u32,
    pub nested: Option<Box<Aliased>>,
    pub by_label: BTreeMap<Label, u8>,
}

/// Derived map keys follow the same crate path.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, MapKey)]
#[populate(crate = "fixtures")]
struct Label(String);

fn main() {
    let mut target = Aliased::default();
    let result = fill(&mut target, [with_int(3)]);
    let _: fixtures::FillResult<()> = result;
}

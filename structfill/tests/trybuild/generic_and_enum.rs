//! Trybuild fixture covering generic records and every enum variant style.

use std::collections::BTreeMap;

use structfill::{Populate, Record, fill};

#[derive(Debug, Default, Populate)]
struct Pair<K, V>
where
    K: Ord,
{
    pub entries: BTreeMap<K, V>,
    pub first: Option<V>,
    #[populate(skip)]
    pub untouched: Vec<K>,
}

#[derive(Debug, Default, Populate)]
enum Shape {
    #[default]
    Empty,
    Named {
        width: u16,
        #[populate(skip)]
        cached: u64,
        #[populate(opaque)]
        handle: Option<std::fs::File>,
    },
    Positional(String, #[populate(opaque)] char),
}

#[derive(Debug, Populate)]
enum Never {}

#[derive(Debug, Default, Populate)]
struct Holder {
    pub pair: Pair<String, Shape>,
    pub shapes: Vec<Shape>,
    pub r#ref: u8,
}

fn assert_record<T: Record>() {}

fn assert_populate<T: Populate + ?Sized>() {}

fn main() {
    assert_record::<Holder>();
    assert_record::<Pair<u8, u8>>();
    assert_populate::<Never>();
    let mut holder = Holder::default();
    let _: structfill::FillResult<()> = fill(&mut holder, []);
}

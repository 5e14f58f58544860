//! Fill rules for pointers, sequences, maps, records and enums.

use std::collections::{BTreeMap, HashMap, VecDeque};

use anyhow::{Result, ensure};
use rstest::rstest;
use structfill::{FillResult, Filler, MapKey, Populate, fill, filled, with_int, with_string};

#[derive(Debug, Clone, Default, PartialEq, Populate)]
struct Inner {
    pub c: String,
}

fn inner(c: &str) -> Inner {
    Inner { c: c.to_owned() }
}

#[derive(Debug, Default, PartialEq, Populate)]
struct Example {
    pub a: i64,
    pub b: Inner,
    pub d: Vec<bool>,
}

#[rstest]
fn populates_nested_record_and_sequence() -> Result<()> {
    let target: Example = filled([])?;
    let expected = Example {
        a: 1,
        b: inner("string"),
        d: vec![true],
    };
    ensure!(target == expected, "got {target:?}");
    Ok(())
}

#[rstest]
fn second_fill_keeps_container_lengths() -> Result<()> {
    let mut target = Example::default();
    fill(&mut target, [])?;
    fill(&mut target, [])?;
    ensure!(target.d == [true], "sequence grew: {:?}", target.d);
    Ok(())
}

#[rstest]
fn equal_targets_fill_identically() -> Result<()> {
    let first: Collections = filled([with_int(8)])?;
    let second: Collections = filled([with_int(8)])?;
    ensure!(first == second, "{first:?} != {second:?}");
    Ok(())
}

#[derive(Debug, Default, PartialEq, Populate)]
struct Pointers {
    pub maybe: Option<i64>,
    pub boxed: Box<Inner>,
    pub nested: Option<Box<Inner>>,
    pub present: Option<u8>,
}

#[rstest]
fn allocates_absent_pointers() -> Result<()> {
    let mut target = Pointers {
        present: Some(0),
        ..Pointers::default()
    };
    fill(&mut target, [])?;
    let expected = Pointers {
        maybe: Some(1),
        boxed: Box::new(inner("string")),
        nested: Some(Box::new(inner("string"))),
        present: Some(2),
    };
    ensure!(target == expected, "got {target:?}");
    Ok(())
}

#[derive(Debug, Default, PartialEq, Populate)]
struct Sequences {
    pub numbers: Vec<i32>,
    pub words: Vec<String>,
    pub queue: VecDeque<u16>,
    pub records: Vec<Inner>,
    pub bytes: [u8; 3],
    pub pair_of_records: [Inner; 2],
    pub tuple: (i64, String, bool),
}

#[rstest]
fn populates_sequences() -> Result<()> {
    let mut target = Sequences {
        words: vec!["a".into(), "b".into(), "c".into()],
        ..Sequences::default()
    };
    fill(&mut target, [])?;
    let expected = Sequences {
        numbers: vec![1],
        words: vec!["string".into(); 3],
        queue: VecDeque::from([2]),
        records: vec![inner("string")],
        bytes: [2; 3],
        pair_of_records: [inner("string"), inner("string")],
        tuple: (1, "string".into(), true),
    };
    ensure!(target == expected, "got {target:?}");
    Ok(())
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct TenantId(u32);

impl MapKey for TenantId {
    fn representative_key(_filler: &Filler<'_>) -> FillResult<Self> {
        Ok(Self(77))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, MapKey)]
struct Region(String);

#[derive(Debug, Default, PartialEq, Populate)]
struct Collections {
    pub by_name: HashMap<String, i64>,
    pub by_id: BTreeMap<u32, Inner>,
    pub by_offset: HashMap<i16, Vec<bool>>,
    pub by_letter: BTreeMap<char, bool>,
    pub by_tenant: BTreeMap<TenantId, u8>,
    pub by_region: HashMap<Region, Vec<String>>,
}

#[rstest]
fn maps_gain_one_representative_entry() -> Result<()> {
    let target: Collections = filled([])?;
    ensure!(
        target.by_name == HashMap::from([("string".to_owned(), 1)]),
        "by_name: {:?}",
        target.by_name
    );
    ensure!(
        target.by_id == BTreeMap::from([(2, inner("string"))]),
        "by_id: {:?}",
        target.by_id
    );
    ensure!(
        target.by_offset == HashMap::from([(1, vec![true])]),
        "by_offset: {:?}",
        target.by_offset
    );
    ensure!(
        target.by_letter == BTreeMap::from([('\0', true)]),
        "by_letter: {:?}",
        target.by_letter
    );
    ensure!(
        target.by_tenant == BTreeMap::from([(TenantId(77), 2)]),
        "by_tenant: {:?}",
        target.by_tenant
    );
    ensure!(
        target.by_region == HashMap::from([(Region::default(), vec!["string".to_owned()])]),
        "by_region: {:?}",
        target.by_region
    );
    Ok(())
}

#[rstest]
fn maps_keep_other_entries_and_replace_the_representative_key() -> Result<()> {
    let mut target = Collections {
        by_name: HashMap::from([("other".to_owned(), 5), ("foobar".to_owned(), 9)]),
        ..Collections::default()
    };
    fill(&mut target, [with_string("foobar")])?;
    ensure!(
        target.by_name == HashMap::from([("other".to_owned(), 5), ("foobar".to_owned(), 1)]),
        "by_name: {:?}",
        target.by_name
    );
    fill(&mut target, [with_string("foobar")])?;
    ensure!(target.by_name.len() == 2, "map grew: {:?}", target.by_name);
    Ok(())
}

#[derive(Debug, Default, Populate)]
struct Visibility {
    pub public: i64,
    pub(crate) crate_visible: i64,
    hidden: i64,
    #[populate(skip)]
    pub skipped: i64,
    pub r#type: String,
}

impl Visibility {
    const fn hidden(&self) -> i64 {
        self.hidden
    }
}

#[rstest]
fn skips_private_and_skipped_fields() -> Result<()> {
    let mut target = Visibility {
        hidden: -1,
        skipped: -2,
        ..Visibility::default()
    };
    fill(&mut target, [])?;
    ensure!(target.public == 1, "public: {}", target.public);
    ensure!(target.crate_visible == 1, "crate_visible: {}", target.crate_visible);
    ensure!(target.hidden() == -1, "hidden: {}", target.hidden());
    ensure!(target.skipped == -2, "skipped: {}", target.skipped);
    ensure!(target.r#type == "string", "type: {}", target.r#type);
    Ok(())
}

#[derive(Debug, Default, PartialEq, Populate)]
struct Pair(pub i64, pub String);

#[derive(Debug, Default, PartialEq, Populate)]
struct Unit;

#[derive(Debug, Default, PartialEq, Populate)]
struct Shells {
    pub pair: Pair,
    pub unit: Unit,
}

#[rstest]
fn populates_tuple_and_unit_structs() -> Result<()> {
    let target: Shells = filled([])?;
    ensure!(target.pair == Pair(1, "string".into()), "pair: {:?}", target.pair);
    ensure!(target.unit == Unit, "unit: {:?}", target.unit);
    Ok(())
}

#[derive(Debug, Default, PartialEq, Populate)]
enum Event {
    #[default]
    Idle,
    Moved {
        x: i32,
        y: i32,
    },
    Tagged(String, #[populate(skip)] u8),
}

#[derive(Debug, Default, PartialEq, Populate)]
struct Events {
    pub idle: Event,
    pub moved: Event,
    pub tagged: Event,
    pub queued: Vec<Event>,
}

#[rstest]
fn enums_populate_the_held_variant() -> Result<()> {
    let mut target = Events {
        moved: Event::Moved { x: 0, y: 0 },
        tagged: Event::Tagged(String::new(), 7),
        ..Events::default()
    };
    fill(&mut target, [with_int(3)])?;
    let expected = Events {
        idle: Event::Idle,
        moved: Event::Moved { x: 3, y: 3 },
        tagged: Event::Tagged("string".into(), 7),
        queued: vec![Event::Idle],
    };
    ensure!(target == expected, "got {target:?}");
    Ok(())
}

#[derive(Debug, Default, PartialEq, Populate)]
struct Wrapper<T> {
    pub inner: T,
    pub items: Vec<T>,
}

#[rstest]
fn generic_records_populate_their_parameters() -> Result<()> {
    let target: Wrapper<u8> = filled([])?;
    ensure!(
        target == Wrapper { inner: 2, items: vec![2] },
        "got {target:?}"
    );
    let nested: Wrapper<Inner> = filled([with_string("x")])?;
    ensure!(nested.items == [inner("x")], "got {nested:?}");
    Ok(())
}

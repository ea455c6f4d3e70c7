use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use snaplit::{AliasTable, Snap};

#[derive(Snap)]
pub struct SampleStruct {
    #[allow(dead_code)]
    foo: f64,
    pub bar: String,
    pub baz: i64,
}

impl SampleStruct {
    fn new(bar: &str, baz: i64) -> Self {
        Self {
            foo: 0.0,
            bar: bar.to_string(),
            baz,
        }
    }
}

#[derive(Snap)]
pub struct NestedStruct {
    pub value: f64,
    pub inner: SampleStruct,
}

pub mod otherpkg {
    use snaplit::Snap;

    #[derive(Snap)]
    pub struct Order {
        pub id: i64,
    }

    #[derive(Snap)]
    pub struct User {
        pub name: String,
        pub orders: Vec<Order>,
    }
}

/// The alias table every test renders with: strip this test crate's own
/// qualifier, the way a fixture pasted back into this crate would read.
fn aliases() -> AliasTable {
    AliasTable::new().strip("render")
}

fn snap<T: Snap>(value: &T) -> String {
    snaplit::to_string(value, &aliases())
}

#[test]
fn absent_option() {
    assert_eq!(snap(&Option::<i32>::None), "None");
}

#[test]
fn present_option() {
    assert_eq!(snap(&Some(5i32)), "Some(5)");
}

#[test]
fn booleans() {
    assert_eq!(snap(&true), "true");
    assert_eq!(snap(&false), "false");
}

#[test]
fn integers() {
    assert_eq!(snap(&420i32), "420");
    assert_eq!(snap(&32i8), "32");
    assert_eq!(snap(&1825i64), "1825");
    assert_eq!(snap(&7u8), "7");
    assert_eq!(snap(&u64::MAX), "18446744073709551615");
    assert_eq!(snap(&-40i16), "-40");
}

#[test]
fn floats() {
    assert_eq!(snap(&12.34f64), "12.34");
    // integral floats keep their `.0` so the text stays a float literal
    assert_eq!(snap(&3.0f64), "3.0");
    assert_eq!(snap(&1.5f32), "1.5");
}

#[test]
fn chars() {
    assert_eq!(snap(&'a'), "'a'");
    assert_eq!(snap(&'\n'), r"'\n'");
}

#[test]
fn strings_are_quoted_and_escaped() {
    assert_eq!(snap(&"foo\nbar"), r#""foo\nbar""#);
    assert_eq!(snap(&String::from("say \"hi\"")), r#""say \"hi\"""#);
}

#[test]
fn plain_struct() {
    let input = SampleStruct::new("asdf", 420);
    assert_eq!(
        snap(&input),
        r#"SampleStruct{
	bar: "asdf",
	baz: 420,
}"#
    );
}

#[test]
fn nested_structs_keep_inner_name() {
    let input = NestedStruct {
        value: 56.78,
        inner: SampleStruct::new("aaa", 69),
    };
    assert_eq!(
        snap(&input),
        r#"NestedStruct{
	value: 56.78,
	inner: SampleStruct{
		bar: "aaa",
		baz: 69,
	},
}"#
    );
}

#[test]
fn boxed_struct_renders_with_reference_marker() {
    let input = Box::new(SampleStruct::new("jkl", 456));
    assert_eq!(
        snap(&input),
        r#"&SampleStruct{
	bar: "jkl",
	baz: 456,
}"#
    );
}

#[test]
fn shared_pointers_render_like_references() {
    let expected = r#"&SampleStruct{
	bar: "jkl",
	baz: 456,
}"#;
    assert_eq!(snap(&Rc::new(SampleStruct::new("jkl", 456))), expected);
    assert_eq!(snap(&Arc::new(SampleStruct::new("jkl", 456))), expected);
}

#[test]
fn empty_sequence_has_no_interior_newline() {
    assert_eq!(snap(&Vec::<i32>::new()), "Vec<i32>{}");
}

#[test]
fn sequence_of_scalars() {
    assert_eq!(
        snap(&vec![1i32, 2, 3]),
        r"Vec<i32>{
	1,
	2,
	3,
}"
    );
}

#[test]
fn fixed_size_array() {
    assert_eq!(
        snap(&[1u8, 2]),
        r"[u8; 2]{
	1,
	2,
}"
    );
}

#[test]
fn slice() {
    let values = [10i32, 20];
    assert_eq!(
        snap(&&values[..]),
        r"&[i32]{
	10,
	20,
}"
    );
}

#[test]
fn sequence_of_structs_omits_element_names() {
    let input = vec![SampleStruct::new("aaa", 13)];
    assert_eq!(
        snap(&input),
        r#"Vec<SampleStruct>{
	{
		bar: "aaa",
		baz: 13,
	},
}"#
    );
}

#[test]
fn sequence_of_nested_structs() {
    let input = vec![NestedStruct {
        value: 34.56,
        inner: SampleStruct::new("aa", 16),
    }];
    assert_eq!(
        snap(&input),
        r#"Vec<NestedStruct>{
	{
		value: 34.56,
		inner: SampleStruct{
			bar: "aa",
			baz: 16,
		},
	},
}"#
    );
}

#[test]
fn boxed_element_keeps_struct_name() {
    // The omit flag does not survive the reference hop.
    let input = vec![Box::new(SampleStruct::new("x", 1))];
    assert_eq!(
        snap(&input),
        r#"Vec<Box<SampleStruct>>{
	&SampleStruct{
		bar: "x",
		baz: 1,
	},
}"#
    );
}

#[test]
fn optional_element_keeps_struct_name() {
    // Some(…) resets the omit flag the same way a reference hop does.
    let input = vec![Some(SampleStruct::new("y", 2)), None];
    assert_eq!(
        snap(&input),
        r#"Vec<Option<SampleStruct>>{
	Some(SampleStruct{
		bar: "y",
		baz: 2,
	}),
	None,
}"#
    );
}

#[test]
fn map_with_one_entry() {
    let mut input = HashMap::new();
    input.insert("foo".to_string(), SampleStruct::new("a", 2));
    assert_eq!(
        snap(&input),
        r#"HashMap<String, SampleStruct>{
	"foo": {
		bar: "a",
		baz: 2,
	},
}"#
    );
}

#[test]
fn empty_map_has_no_interior_newline() {
    assert_eq!(
        snap(&BTreeMap::<String, i32>::new()),
        "BTreeMap<String, i32>{}"
    );
}

#[test]
fn btreemap_iterates_sorted() {
    let mut input = BTreeMap::new();
    input.insert("b".to_string(), 2i32);
    input.insert("a".to_string(), 1i32);
    assert_eq!(
        snap(&input),
        r#"BTreeMap<String, i32>{
	"a": 1,
	"b": 2,
}"#
    );
}

#[cfg(feature = "indexmap")]
#[test]
fn indexmap_iterates_in_insertion_order() {
    let mut input = indexmap::IndexMap::new();
    input.insert("b".to_string(), 2i32);
    input.insert("a".to_string(), 1i32);
    assert_eq!(
        snap(&input),
        r#"IndexMap<String, i32>{
	"b": 2,
	"a": 1,
}"#
    );
}

#[test]
fn struct_from_another_module_keeps_its_qualifier() {
    let input = otherpkg::User {
        name: "bob".to_string(),
        orders: vec![otherpkg::Order { id: 420 }],
    };
    assert_eq!(
        snap(&input),
        r#"otherpkg::User{
	name: "bob",
	orders: Vec<otherpkg::Order>{
		{
			id: 420,
		},
	},
}"#
    );
}

#[test]
fn alias_replaces_qualifier_verbatim() {
    let table = AliasTable::new().alias("render::otherpkg", "op");
    let input = otherpkg::Order { id: 1 };
    assert_eq!(
        snaplit::to_string(&input, &table),
        r"op::Order{
	id: 1,
}"
    );
}

#[test]
fn rendering_is_deterministic() {
    let input = NestedStruct {
        value: 1.25,
        inner: SampleStruct::new("again", 2),
    };
    assert_eq!(snap(&input), snap(&input));
}

//! The shape taxonomy the renderer walks, and the [`Snap`] trait that
//! produces it.
//!
//! Every supported type describes itself as a [`Value`] tree: a closed set of
//! shape tags (scalars, text, records, sequences, maps, references, absent
//! optionals). The tree is built transiently for one render call and dropped
//! afterwards. There is no identity tracking, so two references to the same
//! referent describe themselves independently.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// A value's runtime shape, as handed to the renderer.
///
/// Scalar variants keep enough width that their canonical textual form is
/// unchanged by the conversion: all integers widen losslessly, floats keep
/// their native width.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent optional. Renders as the fixed token `None`.
    Nil,
    /// A boolean scalar.
    Bool(bool),
    /// Any signed integer, widened.
    Int(i128),
    /// Any unsigned integer, widened.
    Uint(u128),
    /// A 32-bit float.
    F32(f32),
    /// A 64-bit float.
    F64(f64),
    /// A character. Renders quoted and escaped, `'a'`.
    Char(char),
    /// A string. Renders quoted and escaped, `"a\nb"`.
    Text(String),
    /// A named aggregate with ordered fields.
    Record(Record),
    /// An ordered sequence of elements.
    Sequence(Sequence),
    /// Key/value pairs, in the source collection's iteration order.
    Map(MapValue),
    /// A non-null reference to another value. Renders with a leading `&`.
    Ref(Box<Value>),
    /// A present optional. Renders as `Some(…)`.
    Some(Box<Value>),
}

/// A struct described field by field, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Fully qualified type name, `my_crate::module::TypeName`.
    pub type_name: String,
    /// All declared fields, visible or not.
    pub fields: Vec<FieldValue>,
}

/// One field of a [`Record`].
///
/// Hidden fields (`visible: false`) keep their slot in the descriptor so
/// visibility stays queryable, but carry [`Value::Nil`] in place of a real
/// value. The renderer never looks at it, and the field's type does not need
/// to implement [`Snap`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    /// The field's name as declared.
    pub name: &'static str,
    /// Whether the field is `pub`. Hidden fields are omitted from output.
    pub visible: bool,
    /// The field's described value.
    pub value: Value,
}

/// A sequence (`Vec`, array, slice) described element by element.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    /// Element-qualified type name, `Vec<i32>`.
    pub type_name: String,
    /// Elements in order.
    pub elements: Vec<Value>,
}

/// An associative map described entry by entry.
///
/// Entries appear in whatever order the source collection iterates:
/// `BTreeMap` sorts by key, `IndexMap` keeps insertion order, `HashMap` is
/// unspecified run to run. Pick the map type accordingly when snapshots need
/// to be reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue {
    /// Key/value-qualified type name, `HashMap<String, i32>`.
    pub type_name: String,
    /// Entries in iteration order.
    pub entries: Vec<(Value, Value)>,
}

/// Types that can describe themselves for snapshot rendering.
///
/// Implementations exist for the primitive scalars, strings, `Option`,
/// sequences, the standard maps, and owning reference types. Structs get an
/// implementation from `#[derive(Snap)]`.
pub trait Snap {
    /// The fully qualified name of this type as it should appear in emitted
    /// literals, before alias rewriting.
    fn type_name() -> String;

    /// Describe this value as a [`Value`] tree.
    fn to_value(&self) -> Value;
}

macro_rules! impl_snap_int {
    ($($ty:ty),*) => {
        $(
            impl Snap for $ty {
                fn type_name() -> String {
                    stringify!($ty).to_string()
                }

                fn to_value(&self) -> Value {
                    Value::Int(*self as i128)
                }
            }
        )*
    };
}

macro_rules! impl_snap_uint {
    ($($ty:ty),*) => {
        $(
            impl Snap for $ty {
                fn type_name() -> String {
                    stringify!($ty).to_string()
                }

                fn to_value(&self) -> Value {
                    Value::Uint(*self as u128)
                }
            }
        )*
    };
}

impl_snap_int!(i8, i16, i32, i64, i128, isize);
impl_snap_uint!(u8, u16, u32, u64, u128, usize);

impl Snap for f32 {
    fn type_name() -> String {
        "f32".to_string()
    }

    fn to_value(&self) -> Value {
        Value::F32(*self)
    }
}

impl Snap for f64 {
    fn type_name() -> String {
        "f64".to_string()
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Snap for bool {
    fn type_name() -> String {
        "bool".to_string()
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Snap for char {
    fn type_name() -> String {
        "char".to_string()
    }

    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl Snap for String {
    fn type_name() -> String {
        "String".to_string()
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl Snap for &str {
    fn type_name() -> String {
        "&str".to_string()
    }

    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl<T: Snap> Snap for Option<T> {
    fn type_name() -> String {
        format!("Option<{}>", T::type_name())
    }

    fn to_value(&self) -> Value {
        match self {
            None => Value::Nil,
            Some(inner) => Value::Some(Box::new(inner.to_value())),
        }
    }
}

impl<T: Snap> Snap for Vec<T> {
    fn type_name() -> String {
        format!("Vec<{}>", T::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Sequence(Sequence {
            type_name: Self::type_name(),
            elements: self.iter().map(Snap::to_value).collect(),
        })
    }
}

impl<T: Snap, const N: usize> Snap for [T; N] {
    fn type_name() -> String {
        format!("[{}; {N}]", T::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Sequence(Sequence {
            type_name: Self::type_name(),
            elements: self.iter().map(Snap::to_value).collect(),
        })
    }
}

impl<T: Snap> Snap for &[T] {
    fn type_name() -> String {
        format!("&[{}]", T::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Sequence(Sequence {
            type_name: Self::type_name(),
            elements: self.iter().map(Snap::to_value).collect(),
        })
    }
}

impl<K: Snap, V: Snap, S> Snap for HashMap<K, V, S> {
    fn type_name() -> String {
        format!("HashMap<{}, {}>", K::type_name(), V::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Map(MapValue {
            type_name: Self::type_name(),
            entries: self
                .iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        })
    }
}

impl<K: Snap, V: Snap> Snap for BTreeMap<K, V> {
    fn type_name() -> String {
        format!("BTreeMap<{}, {}>", K::type_name(), V::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Map(MapValue {
            type_name: Self::type_name(),
            entries: self
                .iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        })
    }
}

#[cfg(feature = "indexmap")]
impl<K: Snap, V: Snap, S> Snap for indexmap::IndexMap<K, V, S> {
    fn type_name() -> String {
        format!("IndexMap<{}, {}>", K::type_name(), V::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Map(MapValue {
            type_name: Self::type_name(),
            entries: self
                .iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        })
    }
}

impl<T: Snap> Snap for Box<T> {
    fn type_name() -> String {
        format!("Box<{}>", T::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Ref(Box::new((**self).to_value()))
    }
}

impl<T: Snap> Snap for Rc<T> {
    fn type_name() -> String {
        format!("Rc<{}>", T::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Ref(Box::new((**self).to_value()))
    }
}

impl<T: Snap> Snap for Arc<T> {
    fn type_name() -> String {
        format!("Arc<{}>", T::type_name())
    }

    fn to_value(&self) -> Value {
        Value::Ref(Box::new((**self).to_value()))
    }
}

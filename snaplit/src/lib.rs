#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use std::io;

mod alias;
mod display;
mod printer;
mod value;

pub use alias::AliasTable;
pub use display::{SnapDisplay, SnapExt};
pub use printer::Snapshotter;
pub use value::{FieldValue, MapValue, Record, Sequence, Snap, Value};

pub use snaplit_derive::Snap;

/// Renders a snapshot of `value` to standard output.
///
/// # Panics
///
/// Panics if writing to standard output fails, like `println!` does.
///
/// ```
/// use snaplit::AliasTable;
///
/// snaplit::print(&vec![1, 2, 3], &AliasTable::new());
/// ```
pub fn print<T: Snap>(value: &T, aliases: &AliasTable) {
    to_writer(io::stdout().lock(), value, aliases).expect("failed to write snapshot to stdout");
}

/// Renders a snapshot of `value` to the provided writer.
///
/// The first write failure aborts the render and is propagated.
pub fn to_writer<W: io::Write, T: Snap>(
    writer: W,
    value: &T,
    aliases: &AliasTable,
) -> io::Result<()> {
    Snapshotter::new()
        .with_aliases(aliases.clone())
        .write_to(writer, value)
}

/// Renders a snapshot of `value` and returns it as a string.
///
/// ```
/// use snaplit::AliasTable;
///
/// assert_eq!(snaplit::to_string(&420, &AliasTable::new()), "420");
/// assert_eq!(snaplit::to_string(&"foo\nbar", &AliasTable::new()), r#""foo\nbar""#);
/// ```
pub fn to_string<T: Snap>(value: &T, aliases: &AliasTable) -> String {
    Snapshotter::new()
        .with_aliases(aliases.clone())
        .format(value)
}

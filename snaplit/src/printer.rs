//! Snapshot renderer for [`Snap`] values.

use core::fmt::{self, Write};
use std::io;

use crate::alias::{AliasTable, NameRewriter};
use crate::value::{Snap, Value};

/// A formatter that renders [`Snap`] values as source-code literals.
///
/// Indents with one tab per depth level by default; `with_indent_size`
/// switches to spaces. Output is written incrementally while the value tree
/// is walked; nothing is buffered beyond what the caller's sink does.
pub struct Snapshotter {
    aliases: AliasTable,
    /// None means indenting with tabs instead of spaces
    indent_size: Option<usize>,
    max_depth: Option<usize>,
}

impl Default for Snapshotter {
    fn default() -> Self {
        Self {
            aliases: AliasTable::new(),
            indent_size: None,
            max_depth: None,
        }
    }
}

impl Snapshotter {
    /// Create a new Snapshotter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alias table applied to emitted type names
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Indent with `size` spaces per level instead of a tab
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = Some(size);
        self
    }

    /// Set the maximum depth for recursive printing. Composites past the
    /// limit render as a `/* max depth reached */` comment.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Render a value to a string
    pub fn format<T: Snap>(&self, value: &T) -> String {
        let mut output = String::new();
        self.format_value(&value.to_value(), &mut output, &self.aliases.compile(), 0, false)
            .expect("Formatting failed");
        output
    }

    /// Render a value to a formatter
    pub fn format_to<T: Snap>(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_value(&value.to_value(), f, &self.aliases.compile(), 0, false)
    }

    /// Render a value to an [`io::Write`] sink.
    ///
    /// The first write failure aborts the render and is returned as-is.
    pub fn write_to<W: io::Write, T: Snap>(&self, writer: W, value: &T) -> io::Result<()> {
        let mut sink = IoFmtAdapter {
            inner: writer,
            error: None,
        };
        let result =
            self.format_value(&value.to_value(), &mut sink, &self.aliases.compile(), 0, false);
        match sink.error {
            Some(err) => Err(err),
            None => {
                result.expect("render failed without an io error");
                Ok(())
            }
        }
    }

    fn format_value(
        &self,
        value: &Value,
        f: &mut dyn Write,
        rewriter: &NameRewriter,
        depth: usize,
        omit_type_name: bool,
    ) -> fmt::Result {
        if let Some(max) = self.max_depth {
            let composite = matches!(
                value,
                Value::Record(_) | Value::Sequence(_) | Value::Map(_)
            );
            if composite && depth >= max {
                return write!(f, "/* max depth reached */");
            }
        }

        match value {
            // Checked before anything else; an absent value never recurses.
            Value::Nil => write!(f, "None"),

            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            // Debug keeps the trailing `.0`, so the text stays a float literal
            Value::F32(v) => write!(f, "{v:?}"),
            Value::F64(v) => write!(f, "{v:?}"),
            Value::Char(v) => write!(f, "{v:?}"),
            Value::Text(v) => write!(f, "{v:?}"),

            Value::Record(record) => {
                if !omit_type_name {
                    write!(f, "{}", rewriter.rewrite(&record.type_name))?;
                }
                write!(f, "{{")?;

                for field in &record.fields {
                    if !field.visible {
                        continue;
                    }
                    writeln!(f)?;
                    self.indent(f, depth + 1)?;
                    write!(f, "{}: ", field.name)?;
                    self.format_value(&field.value, f, rewriter, depth + 1, false)?;
                    write!(f, ",")?;
                }

                // The closing newline is unconditional: a record with no
                // visible fields still renders as `Name{\n}`.
                writeln!(f)?;
                self.indent(f, depth)?;
                write!(f, "}}")
            }

            Value::Sequence(sequence) => {
                // Sequences never omit their name, unlike nested records.
                write!(f, "{}{{", rewriter.rewrite(&sequence.type_name))?;

                for element in &sequence.elements {
                    writeln!(f)?;
                    self.indent(f, depth + 1)?;
                    self.format_value(element, f, rewriter, depth + 1, true)?;
                    write!(f, ",")?;
                }

                if !sequence.elements.is_empty() {
                    writeln!(f)?;
                    self.indent(f, depth)?;
                }
                write!(f, "}}")
            }

            Value::Map(map) => {
                write!(f, "{}{{", rewriter.rewrite(&map.type_name))?;

                for (key, entry) in &map.entries {
                    writeln!(f)?;
                    self.indent(f, depth + 1)?;
                    self.format_value(key, f, rewriter, depth + 1, true)?;
                    write!(f, ": ")?;
                    self.format_value(entry, f, rewriter, depth + 1, true)?;
                    write!(f, ",")?;
                }

                if !map.entries.is_empty() {
                    writeln!(f)?;
                    self.indent(f, depth)?;
                }
                write!(f, "}}")
            }

            // The referent renders at the same depth, and the omit flag does
            // not survive the hop: a record behind a reference always shows
            // its name, even as a direct sequence or map element.
            Value::Ref(inner) => {
                write!(f, "&")?;
                self.format_value(inner, f, rewriter, depth, false)
            }

            Value::Some(inner) => {
                write!(f, "Some(")?;
                self.format_value(inner, f, rewriter, depth, false)?;
                write!(f, ")")
            }
        }
    }

    fn indent(&self, f: &mut dyn Write, depth: usize) -> fmt::Result {
        match self.indent_size {
            None => write!(f, "{:\t<width$}", "", width = depth),
            Some(size) => write!(f, "{: <width$}", "", width = depth * size),
        }
    }
}

/// Adapts an [`io::Write`] to [`fmt::Write`], holding on to the first io
/// error so it can be surfaced with its original type.
struct IoFmtAdapter<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> Write for IoFmtAdapter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

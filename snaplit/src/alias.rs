//! Rewriting of type-qualifying prefixes in emitted names.
//!
//! Derived types describe themselves with fully qualified names
//! (`my_crate::fixtures::User`). An [`AliasTable`] rewrites those qualifiers
//! so the pasted literal matches whatever is in scope at the paste site:
//! replace a prefix with a shorter one, or strip it entirely.

use aho_corasick::{AhoCorasick, MatchKind};

/// A caller-supplied table of type-name substitutions.
///
/// Each entry maps an original prefix to a replacement. An empty replacement
/// means "strip this qualifier entirely", in which case the trailing `::`
/// separator is removed along with it; a non-empty replacement substitutes
/// the prefix verbatim, separator untouched.
///
/// All entries are applied in a single simultaneous pass, leftmost-longest
/// match wins, and substituted text is never re-scanned: an `a` to `b` entry
/// together with a `b` to `c` entry cannot cascade.
///
/// ```
/// use snaplit::AliasTable;
///
/// let aliases = AliasTable::new()
///     .strip("my_crate::fixtures")
///     .alias("other_crate", "oc");
///
/// assert_eq!(aliases.rewrite("my_crate::fixtures::User"), "User");
/// assert_eq!(
///     aliases.rewrite("Vec<other_crate::Order>"),
///     "Vec<oc::Order>",
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    /// Creates an empty table. Rewriting with it returns names unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a substitution from `original` to `replacement`.
    pub fn alias(mut self, original: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.entries.push((original.into(), replacement.into()));
        self
    }

    /// Adds an entry that strips `prefix` (and its trailing `::`) entirely.
    /// Shorthand for `alias(prefix, "")`.
    pub fn strip(self, prefix: impl Into<String>) -> Self {
        self.alias(prefix, "")
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies the table to one type name.
    pub fn rewrite(&self, type_name: &str) -> String {
        self.compile().rewrite(type_name)
    }

    /// Compiles the table into a reusable rewriter. The renderer does this
    /// once per render call and reuses it for every name in the tree.
    pub(crate) fn compile(&self) -> NameRewriter {
        if self.entries.is_empty() {
            return NameRewriter {
                searcher: None,
                replacements: Vec::new(),
            };
        }

        let mut patterns = Vec::with_capacity(self.entries.len());
        let mut replacements = Vec::with_capacity(self.entries.len());
        for (original, replacement) in &self.entries {
            if replacement.is_empty() {
                patterns.push(format!("{original}::"));
            } else {
                patterns.push(original.clone());
            }
            replacements.push(replacement.clone());
        }

        let searcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .expect("alias table failed to compile");

        NameRewriter {
            searcher: Some(searcher),
            replacements,
        }
    }
}

impl<O: Into<String>, R: Into<String>> FromIterator<(O, R)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (O, R)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(o, r)| (o.into(), r.into()))
                .collect(),
        }
    }
}

/// A compiled [`AliasTable`].
pub(crate) struct NameRewriter {
    searcher: Option<AhoCorasick>,
    replacements: Vec<String>,
}

impl NameRewriter {
    pub(crate) fn rewrite(&self, type_name: &str) -> String {
        match &self.searcher {
            None => type_name.to_string(),
            Some(searcher) => searcher.replace_all(type_name, &self.replacements),
        }
    }
}

//! List and keyed composition.
//!
//! ```
//! use sqlweave::{KeyedOptions, keyed_with, list, sql};
//!
//! let ids = list([1, 2, 3]);
//! let filters = keyed_with(
//!     [("status", Some("active")), ("team", None)],
//!     KeyedOptions::new().join("AND").prefix("WHERE"),
//! );
//! let built = sql!("SELECT * FROM users {filters} AND id IN ( {ids} )").build()?;
//! assert_eq!(built.params.len(), 5);
//! # Ok::<(), sqlweave::SqlError>(())
//! ```

use crate::bind::{IntoEntry, IntoFragment};
use crate::build::Context;
use crate::error::SqlResult;
use crate::fragment::Fragment;
use crate::options::{KeyedOptions, ListOptions};
use crate::value::Value;

/// A joined sequence of fragments. Built by [`list`] / [`list_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    items: Vec<Fragment>,
    options: ListOptions,
}

impl List {
    pub fn items(&self) -> &[Fragment] {
        &self.items
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub(crate) fn write_sql(&self, ctx: &mut Context<'_>, out: &mut String) -> SqlResult<()> {
        let join = or_default(&self.options.join, ",");
        let mut joined = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                push_padded(&mut joined, join);
            }
            item.write_sql(ctx, &mut joined)?;
        }
        write_framed(out, &self.options.prefix, &joined, &self.options.suffix);
        Ok(())
    }
}

/// A joined sequence of `identifier sep value` entries. Built by [`keyed`] /
/// [`keyed_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed {
    entries: Vec<(Value, Fragment)>,
    options: KeyedOptions,
}

impl Keyed {
    /// Present entries, in order. Absent entries were dropped on construction.
    pub fn entries(&self) -> &[(Value, Fragment)] {
        &self.entries
    }

    pub fn options(&self) -> &KeyedOptions {
        &self.options
    }

    pub(crate) fn write_sql(&self, ctx: &mut Context<'_>, out: &mut String) -> SqlResult<()> {
        let personality = ctx.personality();
        let join = or_default(&self.options.join, ",");
        let sep = or_default(&self.options.sep, "=");
        let mut joined = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                push_padded(&mut joined, join);
            }
            // Key first: its parameter precedes the value's.
            joined.push_str(&personality.ident(key, ctx)?);
            push_padded(&mut joined, sep);
            value.write_sql(ctx, &mut joined)?;
        }
        write_framed(out, &self.options.prefix, &joined, &self.options.suffix);
        Ok(())
    }
}

/// An empty `join` or `sep` means the default one.
fn or_default<'a>(text: &'a str, default: &'a str) -> &'a str {
    if text.is_empty() { default } else { text }
}

fn push_padded(out: &mut String, text: &str) {
    out.push(' ');
    out.push_str(text);
    out.push(' ');
}

/// Write `prefix body suffix`, or nothing at all when `body` is empty.
fn write_framed(out: &mut String, prefix: &str, body: &str, suffix: &str) {
    if body.is_empty() {
        return;
    }
    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push(' ');
    }
    out.push_str(body);
    if !suffix.is_empty() {
        out.push(' ');
        out.push_str(suffix);
    }
}

/// Join `items` with `,`.
pub fn list<I>(items: I) -> Fragment
where
    I: IntoIterator,
    I::Item: IntoFragment,
{
    list_with(items, ListOptions::default())
}

/// Join `items` with `options.join`, framed by `options.prefix`/`suffix`.
///
/// An empty result writes nothing, prefix and suffix included.
pub fn list_with<I>(items: I, options: ListOptions) -> Fragment
where
    I: IntoIterator,
    I::Item: IntoFragment,
{
    Fragment::List(List {
        items: items.into_iter().map(IntoFragment::into_fragment).collect(),
        options,
    })
}

/// Render `entries` as `key = value` pairs joined with `,`.
///
/// Keys are bound as identifiers. Entries whose value is absent (an outer
/// `None`) are skipped.
pub fn keyed<K, V, I>(entries: I) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: IntoEntry,
{
    keyed_with(entries, KeyedOptions::default())
}

/// [`keyed`] with explicit options.
pub fn keyed_with<K, V, I>(entries: I, options: KeyedOptions) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: IntoEntry,
{
    let entries = entries
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .into_entry()
                .map(|fragment| (Value::Text(key.into()), fragment))
        })
        .collect();
    Fragment::Keyed(Keyed { entries, options })
}

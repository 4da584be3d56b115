//! The fragment model.
//!
//! A [`Fragment`] is one context-dependent piece of SQL text. Evaluating it
//! writes text into an output buffer and may push parameters into the
//! [`Context`]; the fragment itself is never modified, so the same fragment can
//! be evaluated any number of times under different contexts.

use crate::build::Context;
use crate::compose::{Keyed, List};
use crate::error::SqlResult;
use crate::statement::Statement;
use crate::value::Value;

/// One piece of a [`Statement`].
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Raw SQL, written verbatim. Never parameterized or escaped.
    Literal(String),
    /// An identifier, formatted by [`Personality::ident`](crate::Personality::ident).
    Ident(Value),
    /// A value, formatted by [`Personality::value`](crate::Personality::value).
    Value(Value),
    /// A nested statement; its fragments are written joined by single spaces.
    Embed(Statement),
    /// A joined, optionally framed sequence of fragments.
    List(List),
    /// A joined, optionally framed sequence of `identifier sep value` entries.
    Keyed(Keyed),
}

impl Fragment {
    /// Evaluate the fragment against `ctx`, appending its text to `out`.
    pub fn write_sql(&self, ctx: &mut Context<'_>, out: &mut String) -> SqlResult<()> {
        match self {
            Fragment::Literal(text) => out.push_str(text),
            Fragment::Ident(ident) => {
                let personality = ctx.personality();
                out.push_str(&personality.ident(ident, ctx)?);
            }
            Fragment::Value(value) => {
                let personality = ctx.personality();
                out.push_str(&personality.value(value, ctx)?);
            }
            Fragment::Embed(statement) => statement.write_sql(ctx, out)?,
            Fragment::List(list) => list.write_sql(ctx, out)?,
            Fragment::Keyed(keyed) => keyed.write_sql(ctx, out)?,
        }
        Ok(())
    }

    /// Evaluate the fragment against `ctx` into a fresh string.
    pub fn render(&self, ctx: &mut Context<'_>) -> SqlResult<String> {
        let mut out = String::new();
        self.write_sql(ctx, &mut out)?;
        Ok(out)
    }
}

/// Raw SQL text, injected as-is.
///
/// The caller is responsible for injection safety: nothing in `text` is
/// escaped or parameterized, even if it looks like a placeholder.
pub fn literal(text: impl Into<String>) -> Fragment {
    Fragment::Literal(text.into())
}

/// Bind `raw` as an identifier rather than a value.
pub fn identifier(raw: impl Into<Value>) -> Fragment {
    Fragment::Ident(raw.into())
}

/// Bind `raw` as a value. Equivalent to interpolating `raw` directly.
pub fn value(raw: impl Into<Value>) -> Fragment {
    Fragment::Value(raw.into())
}

//! Statements: immutable sequences of fragments.

use crate::bind::IntoFragment;
use crate::build::{Built, Context, build_with};
use crate::error::SqlResult;
use crate::fragment::Fragment;
use crate::personality::{Personality, Positional};
use std::sync::Arc;

/// An ordered, immutable sequence of [`Fragment`]s.
///
/// Cloning is cheap (the fragments are shared), so a statement can be embedded
/// in several others and built any number of times, with any personality.
#[must_use]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statement {
    fragments: Arc<[Fragment]>,
}

impl Statement {
    /// Create a statement from fragments, in order.
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self {
            fragments: fragments.into(),
        }
    }

    /// Create an empty statement.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Interleave literal `segments` with bound `exprs`:
    /// `seg0, expr0, seg1, expr1, ..., segN`.
    ///
    /// Counts are not checked. Each segment is followed by the expression at
    /// the same index if there is one; surplus expressions are dropped. The
    /// `sql!` macro checks counts at compile time instead.
    pub fn from_template<S, E>(
        segments: impl IntoIterator<Item = S>,
        exprs: impl IntoIterator<Item = E>,
    ) -> Self
    where
        S: Into<String>,
        E: IntoFragment,
    {
        let mut exprs = exprs.into_iter();
        let mut fragments = Vec::new();
        for segment in segments {
            fragments.push(Fragment::Literal(segment.into()));
            if let Some(expr) = exprs.next() {
                fragments.push(expr.into_fragment());
            }
        }
        Self::new(fragments)
    }

    /// The fragments of this statement.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Evaluate every fragment in order, joining their text with single spaces.
    pub fn write_sql(&self, ctx: &mut Context<'_>, out: &mut String) -> SqlResult<()> {
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            fragment.write_sql(ctx, out)?;
        }
        Ok(())
    }

    /// Resolve with the default [`Positional`] personality.
    pub fn build(&self) -> SqlResult<Built> {
        build_with(self, &Positional)
    }

    /// Resolve with `personality`.
    pub fn build_with(&self, personality: &dyn Personality) -> SqlResult<Built> {
        build_with(self, personality)
    }
}

impl From<Vec<Fragment>> for Statement {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self::new(fragments)
    }
}

impl FromIterator<Fragment> for Statement {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Statement {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// Build a statement from template `segments` and `exprs`.
///
/// See [`Statement::from_template`]; prefer the `sql!` macro in code.
pub fn sql<S, E>(segments: impl IntoIterator<Item = S>, exprs: impl IntoIterator<Item = E>) -> Statement
where
    S: Into<String>,
    E: IntoFragment,
{
    Statement::from_template(segments, exprs)
}

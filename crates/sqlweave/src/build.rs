//! Resolving a statement into SQL text and parameters.

use crate::error::SqlResult;
use crate::personality::{Personality, Positional};
use crate::statement::Statement;
use crate::value::Value;
use serde::Serialize;
use tokio_postgres::types::ToSql;

/// Per-build resolution state: the parameters collected so far and the active
/// personality.
///
/// A context lives for exactly one [`build_with`] call.
pub struct Context<'p> {
    params: Vec<Value>,
    personality: &'p dyn Personality,
}

impl<'p> Context<'p> {
    /// Create an empty context. Only needed when evaluating fragments by hand.
    pub fn new(personality: &'p dyn Personality) -> Self {
        Self {
            params: Vec::new(),
            personality,
        }
    }

    /// Add a parameter and return its 1-based index.
    pub fn push_param(&mut self, value: Value) -> usize {
        self.params.push(value);
        self.params.len()
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    pub fn personality(&self) -> &'p dyn Personality {
        self.personality
    }

    pub fn into_params(self) -> Vec<Value> {
        self.params
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("params", &self.params)
            .field("personality", &self.personality.name())
            .finish()
    }
}

/// The result of resolving a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Built {
    /// Literal segments and placeholders joined by single spaces. Token content
    /// and order are exact; surrounding whitespace is not normalized.
    pub text: String,
    /// Parameters in the order the personality pushed them.
    pub params: Vec<Value>,
}

impl Built {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.text, self.params)
    }
}

/// Resolve `statement` with the default [`Positional`] personality.
pub fn build(statement: &Statement) -> SqlResult<Built> {
    build_with(statement, &Positional)
}

/// Resolve `statement` with `personality`.
///
/// Fragments are evaluated left to right, depth first, so parameter order
/// follows placeholder order. The first personality error aborts the walk and
/// is returned unchanged.
pub fn build_with(statement: &Statement, personality: &dyn Personality) -> SqlResult<Built> {
    let mut ctx = Context::new(personality);
    let mut text = String::new();

    if let Err(err) = statement.write_sql(&mut ctx, &mut text) {
        #[cfg(feature = "tracing")]
        crate::log::build_failed(personality.name(), &err);
        return Err(err);
    }

    let built = Built {
        text,
        params: ctx.into_params(),
    };
    #[cfg(feature = "tracing")]
    crate::log::built(personality.name(), &built);
    Ok(built)
}

#[cfg(all(test, feature = "macros"))]
mod tests;

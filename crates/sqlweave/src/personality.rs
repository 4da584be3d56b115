//! Personalities: how identifiers and values become placeholder text.
//!
//! A personality decides both the text written for a bound identifier or value
//! and whether (and what) to push onto the parameter list. Positional dialects
//! must push exactly one parameter per placeholder they emit so the parameter
//! order matches the placeholder order; quoting dialects write identifiers
//! inline and push nothing for them.
//!
//! | personality    | identifier          | value |
//! |----------------|---------------------|-------|
//! | [`Positional`] | `??` (pushed)       | `?`   |
//! | [`Postgres`]   | `"name"` (inline)   | `$n`  |
//! | [`MySql`]      | `` `name` `` (inline) | `?` |
//! | [`Sqlite`]     | `"name"` (inline)   | `?n`  |

use crate::build::Context;
use crate::error::{SqlError, SqlResult};
use crate::ident::{Ident, quote_whole};
use crate::value::Value;

/// Formats bound identifiers and values.
///
/// Errors returned here abort the build and are handed to the caller as-is.
///
/// # Example
/// ```
/// use sqlweave::{Context, Personality, SqlResult, Value, sql};
///
/// /// Oracle-style `:1, :2, ...` binds.
/// struct Colon;
///
/// impl Personality for Colon {
///     fn ident(&self, ident: &Value, _ctx: &mut Context<'_>) -> SqlResult<String> {
///         sqlweave::ident::quote_whole(ident.as_str().unwrap_or_default(), '"')
///     }
///
///     fn value(&self, value: &Value, ctx: &mut Context<'_>) -> SqlResult<String> {
///         Ok(format!(":{}", ctx.push_param(value.clone())))
///     }
/// }
///
/// let id = 7;
/// let built = sql!("SELECT * FROM t WHERE id = {id}").build_with(&Colon)?;
/// assert!(built.text.contains(":1"));
/// # Ok::<(), sqlweave::SqlError>(())
/// ```
pub trait Personality {
    /// Format an identifier.
    fn ident(&self, ident: &Value, ctx: &mut Context<'_>) -> SqlResult<String>;

    /// Format a value.
    fn value(&self, value: &Value, ctx: &mut Context<'_>) -> SqlResult<String>;

    /// Name used in log events.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// The default personality: `??` for identifiers and `?` for values, both
/// pushed as positional parameters (the `mysql`/`mysql2` client convention).
#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

impl Personality for Positional {
    fn ident(&self, ident: &Value, ctx: &mut Context<'_>) -> SqlResult<String> {
        ctx.push_param(ident.clone());
        Ok("??".to_string())
    }

    fn value(&self, value: &Value, ctx: &mut Context<'_>) -> SqlResult<String> {
        ctx.push_param(value.clone());
        Ok("?".to_string())
    }

    fn name(&self) -> &'static str {
        "positional"
    }
}

/// PostgreSQL: `"quoted"` identifiers, `$1, $2, ...` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres {
    qualified: bool,
}

impl Postgres {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat dots as qualifiers: `public.users` renders `"public"."users"`
    /// instead of `"public.users"`. Each part is validated; input parts may be
    /// quoted with `"` or `` ` ``.
    pub fn qualified(mut self, qualified: bool) -> Self {
        self.qualified = qualified;
        self
    }
}

impl Personality for Postgres {
    fn ident(&self, ident: &Value, _ctx: &mut Context<'_>) -> SqlResult<String> {
        quote_ident(ident, '"', self.qualified)
    }

    fn value(&self, value: &Value, ctx: &mut Context<'_>) -> SqlResult<String> {
        let n = ctx.push_param(value.clone());
        Ok(format!("${n}"))
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

/// MySQL: `` `quoted` `` identifiers, `?` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql {
    qualified: bool,
}

impl MySql {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat dots as qualifiers, see [`Postgres::qualified`].
    pub fn qualified(mut self, qualified: bool) -> Self {
        self.qualified = qualified;
        self
    }
}

impl Personality for MySql {
    fn ident(&self, ident: &Value, _ctx: &mut Context<'_>) -> SqlResult<String> {
        quote_ident(ident, '`', self.qualified)
    }

    fn value(&self, value: &Value, ctx: &mut Context<'_>) -> SqlResult<String> {
        ctx.push_param(value.clone());
        Ok("?".to_string())
    }

    fn name(&self) -> &'static str {
        "mysql"
    }
}

/// SQLite: `"quoted"` identifiers, `?1, ?2, ...` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite {
    qualified: bool,
}

impl Sqlite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat dots as qualifiers, see [`Postgres::qualified`].
    pub fn qualified(mut self, qualified: bool) -> Self {
        self.qualified = qualified;
        self
    }
}

impl Personality for Sqlite {
    fn ident(&self, ident: &Value, _ctx: &mut Context<'_>) -> SqlResult<String> {
        quote_ident(ident, '"', self.qualified)
    }

    fn value(&self, value: &Value, ctx: &mut Context<'_>) -> SqlResult<String> {
        let n = ctx.push_param(value.clone());
        Ok(format!("?{n}"))
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}

fn quote_ident(ident: &Value, quote: char, qualified: bool) -> SqlResult<String> {
    let Some(name) = ident.as_str() else {
        return Err(SqlError::invalid_ident(format!(
            "expected a text identifier, got {}",
            ident.kind()
        )));
    };
    if qualified {
        Ok(Ident::parse(name)?.to_quoted_sql(quote))
    } else {
        quote_whole(name, quote)
    }
}

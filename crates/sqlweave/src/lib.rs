//! # sqlweave
//!
//! Compose parameterized SQL from fragments, then render it for whichever
//! placeholder dialect the driver speaks.
//!
//! ## Features
//!
//! - **Templates**: `sql!("... {} ...", expr)` interleaves literal SQL with bound expressions
//! - **Binding by type**: plain values become parameters, statements embed, fragments pass through
//! - **Explicit modifiers**: [`identifier`], [`value`], [`literal`] override the default binding
//! - **Composition**: [`list`] and [`keyed`] join items or `key = value` entries, with optional framing
//! - **Personalities**: the same statement renders as `?`, `$n`, `?n`, with or without quoted identifiers
//! - **Driver-ready output**: [`Built::params_ref`] feeds `tokio-postgres` directly
//!
//! ## Example
//!
//! ```
//! use sqlweave::{KeyedOptions, Postgres, identifier, keyed_with, sql};
//!
//! let table = identifier("users");
//! let filters = keyed_with(
//!     [("status", Some("active")), ("team", None)],
//!     KeyedOptions::new().join("AND").prefix("WHERE"),
//! );
//! let stmt = sql!("SELECT * FROM {table} {filters} LIMIT {}", 10_i64);
//!
//! let built = stmt.build()?;
//! assert_eq!(built.params.len(), 4);
//!
//! let built = stmt.build_with(&Postgres::new())?;
//! assert_eq!(built.params.len(), 2);
//! assert!(built.text.contains(r#""users""#));
//! # Ok::<(), sqlweave::SqlError>(())
//! ```

extern crate self as sqlweave;

pub mod bind;
pub mod build;
pub mod compose;
pub mod error;
pub mod fragment;
pub mod ident;
pub mod options;
pub mod personality;
pub mod statement;
pub mod value;

#[cfg(feature = "tracing")]
mod log;

pub use bind::{IntoEntry, IntoFragment};
pub use build::{Built, Context, build, build_with};
pub use compose::{Keyed, List, keyed, keyed_with, list, list_with};
pub use error::{SqlError, SqlResult};
pub use fragment::{Fragment, identifier, literal, value};
pub use options::{KeyedOptions, ListOptions};
pub use personality::{MySql, Personality, Positional, Postgres, Sqlite};
pub use statement::{Statement, sql};
pub use value::Value;

#[cfg(feature = "macros")]
pub use sqlweave_macros::sql;

//! Procedural macros for sqlweave
//!
//! Provides the `sql!` template macro.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod sql;
mod template;

/// Build a `Statement` from a template string.
///
/// `{}` takes the next argument, `{name}` captures `name` from the enclosing
/// scope, `{{` and `}}` are literal braces. Every interpolated expression is
/// bound with `IntoFragment`: plain values become parameters, statements are
/// embedded, fragments are used as-is.
///
/// # Example
///
/// ```ignore
/// use sqlweave::{identifier, sql};
///
/// let status = "active";
/// let stmt = sql!("SELECT * FROM {} WHERE status = {status}", identifier("users"));
/// ```
///
/// # Errors
///
/// Placeholder/argument count mismatches and malformed braces are reported at
/// compile time.
#[proc_macro]
pub fn sql(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as sql::SqlInput);
    sql::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

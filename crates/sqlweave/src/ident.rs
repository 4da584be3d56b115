//! Identifier quoting for the quoting personalities.
//!
//! Two modes are supported:
//!
//! - [`quote_whole`] wraps the entire name in quotes, doubling embedded quote
//!   characters. `a.b` becomes `"a.b"`.
//! - [`Ident::parse`] understands dotted names with optionally quoted parts
//!   (`public."UserTable".id` or `` `my db`.t ``), and
//!   [`Ident::to_quoted_sql`] renders every part quoted. Unquoted parts are
//!   validated against `[A-Za-z_][A-Za-z0-9_$]*`; quoted parts may hold
//!   anything except NUL.
//!
//! # Example
//! ```
//! use sqlweave::ident::Ident;
//!
//! let ident = Ident::parse(r#"public."UserTable""#)?;
//! assert_eq!(ident.to_quoted_sql('`'), "`public`.`UserTable`");
//! # Ok::<(), sqlweave::SqlError>(())
//! ```

use crate::error::{SqlError, SqlResult};

/// Quote a whole name with `quote`, doubling any embedded `quote` characters.
pub fn quote_whole(name: &str, quote: char) -> SqlResult<String> {
    if name.is_empty() {
        return Err(SqlError::invalid_ident("Identifier cannot be empty"));
    }
    if name.contains('\0') {
        return Err(SqlError::invalid_ident(
            "Identifier cannot contain NUL character",
        ));
    }
    let mut out = String::with_capacity(name.len() + 2);
    write_quoted(&mut out, name, quote);
    Ok(out)
}

fn write_quoted(out: &mut String, name: &str, quote: char) {
    out.push(quote);
    for ch in name.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
}

/// A part of a dotted identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    /// Unquoted identifier: must match `[A-Za-z_][A-Za-z0-9_$]*`.
    Unquoted(String),
    /// Quoted identifier: allows any characters except NUL.
    Quoted(String),
}

/// A dotted SQL identifier such as `schema.table.column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Parse an identifier string, supporting dotted and quoted forms.
    ///
    /// A part may be quoted with `"` or `` ` `` in the input, regardless of
    /// the quote character used on output. Inside a quoted part the opening
    /// quote is escaped by doubling it.
    pub fn parse(s: &str) -> SqlResult<Self> {
        if s.is_empty() {
            return Err(SqlError::invalid_ident("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(SqlError::invalid_ident(
                "Identifier cannot contain NUL character",
            ));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        while chars.peek().is_some() {
            if !parts.is_empty() {
                match chars.next() {
                    Some('.') => {
                        if chars.peek().is_none() {
                            return Err(SqlError::invalid_ident("Trailing '.' in identifier"));
                        }
                    }
                    Some(c) => {
                        return Err(SqlError::invalid_ident(format!(
                            "Expected '.' between identifier parts, got '{c}'"
                        )));
                    }
                    None => break,
                }
            }

            if let Some(&(quote @ ('"' | '`'))) = chars.peek() {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == quote => {
                            if chars.peek() == Some(&quote) {
                                chars.next();
                                name.push(quote);
                            } else {
                                break;
                            }
                        }
                        Some(c) => name.push(c),
                        None => {
                            return Err(SqlError::invalid_ident("Unclosed quoted identifier"));
                        }
                    }
                }
                if name.is_empty() {
                    return Err(SqlError::invalid_ident("Empty quoted identifier"));
                }
                parts.push(IdentPart::Quoted(name));
                continue;
            }

            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                let ok = if name.is_empty() {
                    c == '_' || c.is_ascii_alphabetic()
                } else {
                    c == '_' || c == '$' || c.is_ascii_alphanumeric()
                };
                if !ok {
                    return Err(SqlError::invalid_ident(format!(
                        "Invalid character in identifier: '{c}'"
                    )));
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(SqlError::invalid_ident("Empty identifier segment"));
            }
            parts.push(IdentPart::Unquoted(name));
        }

        Ok(Self { parts })
    }

    /// Render the identifier with every part quoted: `public.users` becomes
    /// `"public"."users"`.
    pub fn to_quoted_sql(&self, quote: char) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Unquoted(s) | IdentPart::Quoted(s) => write_quoted(&mut out, s, quote),
            }
        }
        out
    }
}

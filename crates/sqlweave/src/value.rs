//! Raw values carried by value/identifier fragments and returned as parameters.
//!
//! [`Value`] is the closed set of scalars a statement can bind. It converts from
//! the usual Rust types and implements [`ToSql`] by delegating to the wrapped
//! scalar, so a [`Built`](crate::Built) parameter list can be handed straight to
//! `tokio-postgres`.

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};
use uuid::Uuid;

/// A bindable SQL value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL `NULL`
    Null,
    Bool(bool),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float4(f32),
    Float8(f64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
}

impl Value {
    /// Borrow the text of a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short variant name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int2(_) => "int2",
            Value::Int4(_) => "int4",
            Value::Int8(_) => "int8",
            Value::Float4(_) => "float4",
            Value::Float8(_) => "float8",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Json(_) => "json",
            Value::Uuid(_) => "uuid",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Timestamp(_) => "timestamp",
            Value::TimestampTz(_) => "timestamptz",
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(_) => "decimal",
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i16 => Int2,
    i32 => Int4,
    i64 => Int8,
    f32 => Float4,
    f64 => Float8,
    String => Text,
    Vec<u8> => Bytes,
    serde_json::Value => Json,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => Timestamp,
    DateTime<Utc> => TimestampTz,
}

#[cfg(feature = "rust_decimal")]
impl_from_scalar! {
    rust_decimal::Decimal => Decimal,
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int8(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Dispatch a `ToSql` method to the wrapped scalar.
macro_rules! delegate_to_sql {
    ($self:ident, $method:ident, $ty:ident, $out:ident) => {
        match $self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.$method($ty, $out),
            Value::Int2(v) => v.$method($ty, $out),
            Value::Int4(v) => v.$method($ty, $out),
            Value::Int8(v) => v.$method($ty, $out),
            Value::Float4(v) => v.$method($ty, $out),
            Value::Float8(v) => v.$method($ty, $out),
            Value::Text(v) => v.$method($ty, $out),
            Value::Bytes(v) => v.$method($ty, $out),
            Value::Json(v) => v.$method($ty, $out),
            Value::Uuid(v) => v.$method($ty, $out),
            Value::Date(v) => v.$method($ty, $out),
            Value::Time(v) => v.$method($ty, $out),
            Value::Timestamp(v) => v.$method($ty, $out),
            Value::TimestampTz(v) => v.$method($ty, $out),
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(v) => v.$method($ty, $out),
        }
    };
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        delegate_to_sql!(self, to_sql, ty, out)
    }

    // Per-variant type checks happen in `to_sql_checked`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn to_sql_checked(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        delegate_to_sql!(self, to_sql_checked, ty, out)
    }
}

//! The binder: how an interpolated expression becomes a [`Fragment`].
//!
//! Classification is by type:
//!
//! - a [`Fragment`] (from [`literal`](crate::literal), [`identifier`](crate::identifier),
//!   [`value`](crate::value), [`list`](crate::list), [`keyed`](crate::keyed)) is used as-is;
//! - a [`Statement`] is embedded;
//! - anything else that converts into a [`Value`] is bound as a value.
//!
//! [`IntoEntry`] is the keyed-composition counterpart. It adds the *absent*
//! state: an outer `None` drops the entry entirely, so `Option<Option<T>>`
//! separates "skip this column" (`None`) from "set it to NULL" (`Some(None)`).

use crate::fragment::Fragment;
use crate::statement::Statement;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// Convert an expression into a [`Fragment`].
pub trait IntoFragment {
    fn into_fragment(self) -> Fragment;
}

/// Convert a keyed-composition value into a fragment, or `None` when absent.
pub trait IntoEntry {
    fn into_entry(self) -> Option<Fragment>;
}

impl IntoFragment for Fragment {
    fn into_fragment(self) -> Fragment {
        self
    }
}

impl IntoFragment for Statement {
    fn into_fragment(self) -> Fragment {
        Fragment::Embed(self)
    }
}

impl IntoFragment for &Statement {
    fn into_fragment(self) -> Fragment {
        Fragment::Embed(self.clone())
    }
}

impl IntoFragment for &Fragment {
    fn into_fragment(self) -> Fragment {
        self.clone()
    }
}

impl<T: Into<Value>> IntoFragment for Option<T> {
    fn into_fragment(self) -> Fragment {
        Fragment::Value(self.into())
    }
}

impl<T: IntoFragment> IntoEntry for Option<T> {
    fn into_entry(self) -> Option<Fragment> {
        self.map(IntoFragment::into_fragment)
    }
}

/// Types that are always present when used as a keyed value.
macro_rules! impl_present_entry {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoEntry for $ty {
                fn into_entry(self) -> Option<Fragment> {
                    Some(self.into_fragment())
                }
            }
        )*
    };
}

/// Raw value types: bound as values, present as keyed values.
macro_rules! impl_bind_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoFragment for $ty {
                fn into_fragment(self) -> Fragment {
                    Fragment::Value(self.into())
                }
            }
        )*
        impl_present_entry!($($ty),*);
    };
}

impl_present_entry!(Fragment, &Fragment, Statement, &Statement);

impl_bind_value!(
    Value,
    bool,
    i16,
    i32,
    i64,
    u32,
    f32,
    f64,
    &str,
    String,
    &String,
    Vec<u8>,
    &[u8],
    serde_json::Value,
    Uuid,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
);

#[cfg(feature = "rust_decimal")]
impl_bind_value!(rust_decimal::Decimal);

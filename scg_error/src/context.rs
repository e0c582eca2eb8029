//! Structured context attached to an [`Error`](crate::Error).
//!
//! A context is a [`ContextMap`] from string keys to [`ContextValue`]s.
//! Cloning a value clones nested maps recursively; every other non-scalar
//! payload (text, lists, opaque values) sits behind an `Arc` and is shared.
//! Shared payloads are immutable, so a clone can never observe a later
//! mutation of the map it was taken from.
//!
//! # Usage
//!
//! ```rust
//! use scg_error::context;
//! use scg_error::context::ContextValue;
//!
//! let ctx = context! {
//!     "customer_id" => "42",
//!     "attempt" => 3,
//!     "limits" => context! { "max" => 10 },
//! };
//! assert_eq!(ctx["attempt"].as_i64(), Some(3));
//! assert!(matches!(ctx["limits"], ContextValue::Map(_)));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Mapping from context key to value. Keys are unique, order is irrelevant.
pub type ContextMap = HashMap<String, ContextValue>;

/// A single context value.
#[derive(Clone)]
pub enum ContextValue {
    /// Explicit absence of a value.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text, shared between clones.
    Text(Arc<str>),
    /// Ordered list, shared between clones.
    List(Arc<[ContextValue]>),
    /// Nested map, cloned recursively.
    Map(ContextMap),
    /// Arbitrary caller value, shared between clones and compared by identity.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl ContextValue {
    /// Wrap an arbitrary value.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view; integers are widened.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[ContextValue]> {
        match self {
            Self::List(items) => Some(items.as_ref()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&ContextMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to a nested map. Only meaningful on a copy obtained
    /// from [`Error::context`](crate::Error::context).
    #[inline]
    pub fn as_map_mut(&mut self) -> Option<&mut ContextMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Typed view into an [`ContextValue::Opaque`] payload.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Returns true if both values point at the same shared payload.
    ///
    /// Scalars and maps never share storage and always return false.
    pub fn shares_payload_with(&self, other: &ContextValue) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => Arc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => Arc::ptr_eq(a, b),
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for ContextValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::List(items) => f.debug_list().entries(items.iter()).finish(),
            Self::Map(map) => f.debug_map().entries(map.iter()).finish(),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

// ─── Conversions ────────────────────────────────────────────────────

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ContextValue {
                #[inline]
                fn from(v: $t) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for ContextValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for ContextValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for ContextValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ContextValue {
    fn from(v: &str) -> Self {
        Self::Text(Arc::from(v))
    }
}

impl From<String> for ContextValue {
    fn from(v: String) -> Self {
        Self::Text(Arc::from(v))
    }
}

impl From<Arc<str>> for ContextValue {
    fn from(v: Arc<str>) -> Self {
        Self::Text(v)
    }
}

/// Clone-on-write conversion used when merging borrowed maps.
impl From<&ContextValue> for ContextValue {
    fn from(v: &ContextValue) -> Self {
        v.clone()
    }
}

impl<T: Into<ContextValue>> From<Option<T>> for ContextValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<ContextValue>> From<Vec<T>> for ContextValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ContextValue>> From<HashMap<String, T>> for ContextValue {
    fn from(v: HashMap<String, T>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for ContextValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;

        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            Value::String(s) => Self::from(s),
            Value::Array(items) => Self::from(items),
            Value::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

/// Build a [`ContextMap`] from `key => value` pairs.
///
/// Keys go through `String::from`, values through `ContextValue::from`.
#[macro_export]
macro_rules! context {
    () => {
        $crate::context::ContextMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::context::ContextMap::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::context::ContextValue::from($value),
            );
        )+
        map
    }};
}

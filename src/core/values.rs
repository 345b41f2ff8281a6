//! Zero-value defaulting, sequence accessors and `dict`.

use crate::domain::ports::{IsZero, Length, Sequence};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

macro_rules! impl_is_zero_for_numbers {
    ($($t:ty),*) => {
        $(impl IsZero for $t {
            fn is_zero(&self) -> bool {
                *self == 0 as $t
            }
        })*
    };
}

impl_is_zero_for_numbers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T> IsZero for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsZero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsZero> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.as_ref().map_or(true, |v| v.is_zero())
    }
}

impl IsZero for Value {
    fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn first_item(&self) -> Option<&T> {
        self.first()
    }

    fn last_item(&self) -> Option<&T> {
        self.last()
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn first_item(&self) -> Option<&T> {
        self.first()
    }

    fn last_item(&self) -> Option<&T> {
        self.last()
    }
}

/// Only arrays are sequences; every other value has no first or last item.
impl Sequence for Value {
    type Item = Value;

    fn first_item(&self) -> Option<&Value> {
        self.as_array().and_then(|items| items.first())
    }

    fn last_item(&self) -> Option<&Value> {
        self.as_array().and_then(|items| items.last())
    }
}

impl Length for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

/// Arrays, objects and strings have a length; scalars report 0.
impl Length for Value {
    fn length(&self) -> usize {
        match self {
            Value::String(s) => s.len(),
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }
}

pub fn first<S: Sequence + ?Sized>(seq: &S) -> Option<&S::Item> {
    seq.first_item()
}

pub fn last<S: Sequence + ?Sized>(seq: &S) -> Option<&S::Item> {
    seq.last_item()
}

pub fn length<L: Length + ?Sized>(value: &L) -> usize {
    value.length()
}

/// `value`, unless it is a zero value, in which case `fallback`.
pub fn default_value<T: IsZero>(fallback: T, value: T) -> T {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

/// First non-zero value, if any.
pub fn coalesce<T: IsZero, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    values.into_iter().find(|v| !v.is_zero())
}

/// Builds a map from alternating key/value arguments.
///
/// An odd argument count yields `None`. Pairs whose key is not a string
/// are skipped; a repeated key keeps its last value.
pub fn dict(args: &[Value]) -> Option<Map<String, Value>> {
    if args.len() % 2 != 0 {
        tracing::debug!("dict called with odd argument count: {}", args.len());
        return None;
    }

    let mut map = Map::new();
    for pair in args.chunks_exact(2) {
        match &pair[0] {
            Value::String(key) => {
                map.insert(key.clone(), pair[1].clone());
            }
            other => tracing::debug!("dict skipping non-string key: {}", other),
        }
    }
    Some(map)
}

use chrono::{DateTime, Utc};

/// Source of "now" for the relative-time helpers.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Type-appropriate "empty" check used by `default` and `coalesce`.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

/// Ordered containers that `first` and `last` can look into.
pub trait Sequence {
    type Item;

    fn first_item(&self) -> Option<&Self::Item>;
    fn last_item(&self) -> Option<&Self::Item>;
}

/// Anything with a meaningful length for the `length` helper.
pub trait Length {
    fn length(&self) -> usize;
}

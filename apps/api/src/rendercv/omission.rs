//! Omission rule — optional fields are left out of the output, never emitted as null.
//!
//! A value is omitted when it is absent (`None`) or an empty list. Empty strings
//! are still written: only absence and empty collections count as "nothing".
//! Used as a `skip_serializing_if` predicate on every optional RenderCV field.

/// Values the omission rule knows how to judge.
pub trait Omittable {
    fn is_omittable(&self) -> bool;
}

impl<T> Omittable for Option<T> {
    fn is_omittable(&self) -> bool {
        self.is_none()
    }
}

impl<T> Omittable for Vec<T> {
    fn is_omittable(&self) -> bool {
        self.is_empty()
    }
}

/// `skip_serializing_if` predicate for optional output fields.
pub fn is_omitted<T: Omittable>(value: &T) -> bool {
    value.is_omittable()
}

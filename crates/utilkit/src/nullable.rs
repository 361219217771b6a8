//! Optional values where zero means absent.
//!
//! Database columns often store "no value" as `NULL` while callers pass a
//! plain integer with `0` standing in for "unset". These helpers map that
//! convention onto `Option`. A genuine zero cannot be represented as present.

/// Converts the type's default (zero) value to `None`, otherwise `Some(value)`.
///
/// # Examples
///
/// ```
/// use utilkit::to_nullable;
///
/// assert_eq!(to_nullable(0_u64), None);
/// assert_eq!(to_nullable(String::new()), None);
/// assert_eq!(to_nullable("id".to_string()), Some("id".to_string()));
/// ```
pub fn to_nullable<T>(value: T) -> Option<T>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        None
    } else {
        Some(value)
    }
}

/// Integer form of [`to_nullable`]: `0` is absent, anything else is present.
///
/// # Examples
///
/// ```
/// use utilkit::to_nullable_int;
///
/// assert_eq!(to_nullable_int(0), None);
/// assert_eq!(to_nullable_int(5), Some(5));
/// ```
pub fn to_nullable_int(value: i32) -> Option<i32> {
    to_nullable(value)
}

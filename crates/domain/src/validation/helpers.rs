//! Shared presence helpers used by the validation checks.

/// True when an optional string is absent or empty.
pub(crate) fn is_null_or_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Fail with `error` when `value` is absent or empty, otherwise return it.
pub(crate) fn require<E>(value: Option<&str>, error: impl FnOnce() -> E) -> Result<&str, E> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(error()),
    }
}

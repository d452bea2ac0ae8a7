//! Attribute key rules
//!
//! Attribute keys prefixed with `codenvy` are reserved for metadata injected
//! by the system; user-supplied configurations may not use them.

/// Reserved, case-sensitive attribute key prefix
pub const RESERVED_ATTRIBUTE_PREFIX: &str = "codenvy";

/// A map key that may be absent
///
/// Lets attribute validation accept both plain string keys and nullable
/// keys coming from loosely typed callers.
pub trait AttributeKey {
    /// The key, or `None` when it is null
    fn attribute_key(&self) -> Option<&str>;
}

impl AttributeKey for str {
    fn attribute_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl AttributeKey for String {
    fn attribute_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl AttributeKey for &str {
    fn attribute_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl<K: AttributeKey> AttributeKey for Option<K> {
    fn attribute_key(&self) -> Option<&str> {
        self.as_ref().and_then(AttributeKey::attribute_key)
    }
}

/// Check whether a key may be used as a user attribute name
pub fn is_valid_attribute_name(key: Option<&str>) -> bool {
    key.is_some_and(|key| !key.is_empty() && !key.starts_with(RESERVED_ATTRIBUTE_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_are_valid() {
        assert!(is_valid_attribute_name(Some("memoryLimitBytes")));
        assert!(is_valid_attribute_name(Some("cmd-attribute-name")));
    }

    #[test]
    fn null_and_empty_keys_are_invalid() {
        assert!(!is_valid_attribute_name(None));
        assert!(!is_valid_attribute_name(Some("")));
    }

    #[test]
    fn whitespace_keys_are_not_empty() {
        assert!(is_valid_attribute_name(Some(" ")));
        assert!(is_valid_attribute_name(Some("\t")));
    }

    #[test]
    fn reserved_prefix_is_case_sensitive() {
        assert!(!is_valid_attribute_name(Some("codenvy_key")));
        assert!(!is_valid_attribute_name(Some("codenvy")));
        assert!(is_valid_attribute_name(Some("Codenvy_key")));
        assert!(is_valid_attribute_name(Some("my_codenvy_key")));
    }

    #[test]
    fn optional_keys_unwrap() {
        let present: Option<String> = Some("key".to_string());
        let absent: Option<String> = None;
        assert_eq!(present.attribute_key(), Some("key"));
        assert_eq!(absent.attribute_key(), None);
    }
}

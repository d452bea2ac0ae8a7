//! Attribute map validation.

use crate::errors::ValidationError;
use crate::value_objects::{AttributeKey, is_valid_attribute_name};

pub(super) fn validate_attributes<'a, K, V, I>(attributes: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: AttributeKey + ?Sized + 'a,
    V: ?Sized + 'a,
{
    attributes.into_iter().try_for_each(|(key, _)| {
        let key = key.attribute_key();
        if is_valid_attribute_name(key) {
            Ok(())
        } else {
            Err(ValidationError::invalid_attribute(key))
        }
    })
}

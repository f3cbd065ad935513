use super::error::Error;
use crate::model::types::Element;

/// Looks up the reference element for `atomic_number`.
pub fn lookup(atomic_number: i32) -> Result<Element, Error> {
    Element::from_atomic_number(atomic_number).ok_or_else(|| Error::not_found(atomic_number))
}

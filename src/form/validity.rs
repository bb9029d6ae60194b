use crate::field::{Field, FieldMap};

/// Pure conjunction over the validity map; eligibility for the pay control.
pub fn can_submit(validation: &FieldMap<bool>) -> bool {
    validation.iter().all(|(_, valid)| *valid)
}

/// The single field whose error is displayed: the first `false` entry in
/// canonical key order. Later invalid fields are suppressed until this one
/// becomes valid.
pub fn first_invalid(validation: &FieldMap<bool>) -> Option<Field> {
    validation
        .iter()
        .find_map(|(field, valid)| (!valid).then_some(field))
}

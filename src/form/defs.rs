use crate::field::Field;
use crate::mask::Mask;

/// Presentation defaults for one input: mask, placeholder, label, and an
/// optional leading marker glyph. The card-code field carries no marker.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub marker: Option<&'static str>,
    pub mask: Mask,
}

impl FieldDef {
    pub fn card_number() -> Self {
        Self {
            field: Field::CardNumber,
            label: Field::CardNumber.label(),
            placeholder: "1234 5678 9012 3456",
            marker: Some("▭"),
            mask: Mask::card_number(),
        }
    }

    pub fn exp_date() -> Self {
        Self {
            field: Field::ExpDate,
            label: Field::ExpDate.label(),
            placeholder: "MM/YY",
            marker: Some("▦"),
            mask: Mask::exp_date(),
        }
    }

    pub fn card_code() -> Self {
        Self {
            field: Field::CardCode,
            label: Field::CardCode.label(),
            placeholder: "CVC",
            marker: None,
            mask: Mask::card_code(),
        }
    }

    pub fn for_field(field: Field) -> Self {
        match field {
            Field::CardNumber => Self::card_number(),
            Field::ExpDate => Self::exp_date(),
            Field::CardCode => Self::card_code(),
        }
    }

    /// All three definitions in canonical field order.
    pub fn all() -> [FieldDef; 3] {
        [Self::card_number(), Self::exp_date(), Self::card_code()]
    }

    /// Block title: marker glyph plus label.
    pub fn title(&self) -> String {
        match self.marker {
            Some(marker) => format!("{marker} {}", self.label),
            None => self.label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::MaskSlot;

    #[test]
    fn defs_cover_all_fields_in_order() {
        let defs = FieldDef::all();
        let order: Vec<Field> = defs.iter().map(|def| def.field).collect();
        assert_eq!(order, Field::ALL.to_vec());
    }

    #[test]
    fn mask_shapes_match_the_field_set() {
        assert_eq!(FieldDef::card_number().mask.len(), 19);
        assert_eq!(FieldDef::exp_date().mask.len(), 5);
        let code = FieldDef::card_code();
        assert_eq!(code.mask.len(), 4);
        assert_eq!(code.mask.required_len(), 3);
        assert!(code.marker.is_none());
    }

    #[test]
    fn separators_sit_at_literal_positions() {
        let card = FieldDef::card_number();
        assert_eq!(card.mask.apply("41111111"), "4111 1111");
        assert_eq!(
            Mask::new(vec![MaskSlot::Digit, MaskSlot::Literal('-'), MaskSlot::Digit]).apply("12"),
            "1-2"
        );
    }
}

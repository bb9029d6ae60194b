use serde::{Deserialize, Serialize};

/// The closed set of form fields. Every map in the form is keyed by exactly
/// these three identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CardNumber,
    ExpDate,
    CardCode,
}

impl Field {
    /// Canonical order: card number, expiration date, card code.
    pub const ALL: [Field; 3] = [Field::CardNumber, Field::ExpDate, Field::CardCode];

    pub fn label(self) -> &'static str {
        match self {
            Field::CardNumber => "Card number",
            Field::ExpDate => "Expiration date",
            Field::CardCode => "Card code",
        }
    }

    pub fn next(self) -> Field {
        match self {
            Field::CardNumber => Field::ExpDate,
            Field::ExpDate => Field::CardCode,
            Field::CardCode => Field::CardNumber,
        }
    }

    pub fn prev(self) -> Field {
        match self {
            Field::CardNumber => Field::CardCode,
            Field::ExpDate => Field::CardNumber,
            Field::CardCode => Field::ExpDate,
        }
    }
}

/// An exhaustive map from [`Field`] to `T`. Holding one slot per variant keeps
/// the "exactly three keys" invariant in the type rather than in runtime
/// checks, and serializes with the conventional camelCase identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMap<T> {
    pub card_number: T,
    pub exp_date: T,
    pub card_code: T,
}

impl<T> FieldMap<T> {
    pub fn get(&self, field: Field) -> &T {
        match field {
            Field::CardNumber => &self.card_number,
            Field::ExpDate => &self.exp_date,
            Field::CardCode => &self.card_code,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::CardNumber => &mut self.card_number,
            Field::ExpDate => &mut self.exp_date,
            Field::CardCode => &mut self.card_code,
        }
    }

    pub fn set(&mut self, field: Field, value: T) {
        *self.get_mut(field) = value;
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &T)> {
        Field::ALL.iter().map(move |&field| (field, self.get(field)))
    }
}

impl<T: Clone> FieldMap<T> {
    pub fn splat(value: T) -> Self {
        Self {
            card_number: value.clone(),
            exp_date: value.clone(),
            card_code: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_follows_canonical_order() {
        let map = FieldMap {
            card_number: 1,
            exp_date: 2,
            card_code: 3,
        };
        let order: Vec<(Field, i32)> = map.iter().map(|(field, v)| (field, *v)).collect();
        assert_eq!(
            order,
            vec![
                (Field::CardNumber, 1),
                (Field::ExpDate, 2),
                (Field::CardCode, 3)
            ]
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let map = FieldMap::splat(String::from("x"));
        let value = serde_json::to_value(&map).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["cardNumber", "expDate", "cardCode"]);
    }

    #[test]
    fn next_and_prev_wrap() {
        for field in Field::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(Field::CardCode.next(), Field::CardNumber);
    }
}

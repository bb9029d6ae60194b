/// One position in a positional input mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSlot {
    /// A fixed character the user never types, such as a group separator.
    Literal(char),
    Digit,
    /// A digit slot that may stay empty without the value being short.
    OptionalDigit,
}

/// An ordered sequence of slots constraining keystrokes to a card-data shape.
///
/// [`Mask::apply`] is a pure transform run on every edit before the value
/// reaches the controller; it operates in "no guide" mode, so unfilled slots
/// simply produce no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    slots: Vec<MaskSlot>,
}

impl Mask {
    pub fn new(slots: Vec<MaskSlot>) -> Self {
        Self { slots }
    }

    /// 16 digits in four groups separated by spaces, 19 slots total.
    pub fn card_number() -> Self {
        let mut slots = Vec::with_capacity(19);
        for group in 0..4 {
            if group > 0 {
                slots.push(MaskSlot::Literal(' '));
            }
            slots.extend([MaskSlot::Digit; 4]);
        }
        Self { slots }
    }

    /// `MM/YY`, 5 slots with one literal slash.
    pub fn exp_date() -> Self {
        Self {
            slots: vec![
                MaskSlot::Digit,
                MaskSlot::Digit,
                MaskSlot::Literal('/'),
                MaskSlot::Digit,
                MaskSlot::Digit,
            ],
        }
    }

    /// Three required digits plus an optional fourth.
    pub fn card_code() -> Self {
        Self {
            slots: vec![
                MaskSlot::Digit,
                MaskSlot::Digit,
                MaskSlot::Digit,
                MaskSlot::OptionalDigit,
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot count excluding trailing optional digits.
    pub fn required_len(&self) -> usize {
        let trailing_optional = self
            .slots
            .iter()
            .rev()
            .take_while(|slot| matches!(slot, MaskSlot::OptionalDigit))
            .count();
        self.slots.len() - trailing_optional
    }

    /// Conform `raw` to this mask.
    ///
    /// Literal slots emit their character and swallow a matching input
    /// character so the transform is idempotent over its own output. A literal
    /// is only emitted while the remaining input still starts with an
    /// acceptable character; a rejected character discards the rest of the
    /// input without backtracking.
    pub fn apply(&self, raw: &str) -> String {
        let mut out = String::with_capacity(self.slots.len());
        let mut input = raw.chars().peekable();
        for slot in &self.slots {
            match slot {
                MaskSlot::Literal(lit) => match input.peek() {
                    Some(next) if next == lit => {
                        input.next();
                        out.push(*lit);
                    }
                    Some(next) if next.is_ascii_digit() => out.push(*lit),
                    _ => break,
                },
                MaskSlot::Digit | MaskSlot::OptionalDigit => {
                    let Some(ch) = input.next() else { break };
                    if ch.is_ascii_digit() {
                        out.push(ch);
                    } else {
                        break;
                    }
                }
            }
        }
        out
    }

    /// Whether `text` fills every required slot.
    pub fn is_complete(&self, text: &str) -> bool {
        self.apply(text).chars().count() >= self.required_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_number_groups_digits() {
        assert_eq!(
            Mask::card_number().apply("4111111111111111"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn exp_date_inserts_slash() {
        assert_eq!(Mask::exp_date().apply("1225"), "12/25");
    }

    #[test]
    fn card_code_optional_fourth_digit() {
        let mask = Mask::card_code();
        assert_eq!(mask.apply("1234"), "1234");
        assert_eq!(mask.apply("123"), "123");
        assert!(mask.is_complete("123"));
        assert!(mask.is_complete("1234"));
        assert!(!mask.is_complete("12"));
    }

    #[test]
    fn output_never_exceeds_slot_count() {
        let mask = Mask::card_number();
        let out = mask.apply("99999999999999999999999999");
        assert_eq!(out.chars().count(), mask.len());
        assert_eq!(out, "9999 9999 9999 9999");
    }

    #[test]
    fn rejected_character_discards_remainder() {
        assert_eq!(Mask::card_number().apply("4111x999"), "4111");
        assert_eq!(Mask::exp_date().apply("1a25"), "1");
    }

    #[test]
    fn literal_positions_hold_the_literal() {
        let mask = Mask::card_number();
        let out = mask.apply("411111111");
        for (idx, slot) in [(4, ' '), (9, ' ')] {
            assert_eq!(out.chars().nth(idx), Some(slot));
        }
    }

    #[test]
    fn apply_is_idempotent_over_its_output() {
        for (mask, raw) in [
            (Mask::card_number(), "4111111111111111"),
            (Mask::card_number(), "41115"),
            (Mask::exp_date(), "12/25"),
            (Mask::exp_date(), "12"),
            (Mask::card_code(), "123"),
        ] {
            let once = mask.apply(raw);
            assert_eq!(mask.apply(&once), once);
        }
    }

    #[test]
    fn required_len_excludes_trailing_optionals() {
        assert_eq!(Mask::card_number().required_len(), 19);
        assert_eq!(Mask::exp_date().required_len(), 5);
        assert_eq!(Mask::card_code().required_len(), 3);
    }
}

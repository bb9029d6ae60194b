use crate::field::Field;

/// Fixed, closed message map for invalid fields.
pub fn error_message(field: Field) -> &'static str {
    match field {
        Field::CardNumber => "Card number is not valid",
        Field::ExpDate => "Expiration date is not valid",
        Field::CardCode => "Card code is not valid",
    }
}

/// Entrance/exit transition for the single displayed error, keyed by field
/// identity. A key change (including none↔some) restarts the transition from
/// zero; clearing invalidity fades the last message out before removal.
#[derive(Debug, Clone, Default)]
pub struct ErrorBanner {
    key: Option<Field>,
    shown: Option<Field>,
    opacity: f32,
    target: f32,
}

impl ErrorBanner {
    /// Align the banner with the aggregator's current single invalid field.
    pub fn sync(&mut self, invalid: Option<Field>) {
        if invalid == self.key {
            return;
        }
        self.key = invalid;
        match invalid {
            Some(field) => {
                self.shown = Some(field);
                self.opacity = 0.0;
                self.target = 1.0;
            }
            None => self.target = 0.0,
        }
    }

    /// Advance the opacity one step toward its target.
    pub fn tick(&mut self) {
        self.opacity += (self.target - self.opacity) * 0.35;
        if (self.target - self.opacity).abs() < 0.02 {
            self.opacity = self.target;
        }
        if self.opacity == 0.0 && self.target == 0.0 {
            self.shown = None;
        }
    }

    /// The field whose message is currently on screen, if any. During an exit
    /// transition this is still the old field while its message fades.
    pub fn visible(&self) -> Option<Field> {
        self.shown
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(banner: &mut ErrorBanner) {
        for _ in 0..64 {
            banner.tick();
        }
    }

    #[test]
    fn messages_are_fixed_per_field() {
        assert_eq!(error_message(Field::CardNumber), "Card number is not valid");
        assert_eq!(
            error_message(Field::ExpDate),
            "Expiration date is not valid"
        );
        assert_eq!(error_message(Field::CardCode), "Card code is not valid");
    }

    #[test]
    fn entrance_rises_to_full_opacity() {
        let mut banner = ErrorBanner::default();
        banner.sync(Some(Field::CardNumber));
        assert_eq!(banner.opacity(), 0.0);
        assert_eq!(banner.visible(), Some(Field::CardNumber));
        settled(&mut banner);
        assert_eq!(banner.opacity(), 1.0);
    }

    #[test]
    fn changing_the_invalid_field_restarts_the_transition() {
        let mut banner = ErrorBanner::default();
        banner.sync(Some(Field::CardNumber));
        settled(&mut banner);
        banner.sync(Some(Field::ExpDate));
        assert_eq!(banner.opacity(), 0.0);
        assert_eq!(banner.visible(), Some(Field::ExpDate));
    }

    #[test]
    fn clearing_invalidity_fades_out_then_removes() {
        let mut banner = ErrorBanner::default();
        banner.sync(Some(Field::CardCode));
        settled(&mut banner);
        banner.sync(None);
        // Still showing the old message while the exit transition runs.
        assert_eq!(banner.visible(), Some(Field::CardCode));
        settled(&mut banner);
        assert_eq!(banner.visible(), None);
        assert_eq!(banner.opacity(), 0.0);
    }

    #[test]
    fn none_to_some_round_trip_restarts() {
        let mut banner = ErrorBanner::default();
        banner.sync(Some(Field::CardNumber));
        settled(&mut banner);
        banner.sync(None);
        banner.tick();
        banner.sync(Some(Field::CardNumber));
        assert_eq!(banner.opacity(), 0.0);
        assert_eq!(banner.visible(), Some(Field::CardNumber));
    }

    #[test]
    fn repeated_sync_with_same_field_does_not_restart() {
        let mut banner = ErrorBanner::default();
        banner.sync(Some(Field::CardNumber));
        banner.tick();
        let opacity = banner.opacity();
        banner.sync(Some(Field::CardNumber));
        assert_eq!(banner.opacity(), opacity);
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::Style;

use crate::controller::FormController;
use crate::field::Field;
use crate::theme::Theme;

use super::defs::FieldDef;
use super::error::ErrorBanner;
use super::validity::{can_submit, first_invalid};

/// Caller-supplied style patches, applied verbatim on top of the theme and
/// never interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionStyles {
    pub form: Option<Style>,
    pub button: Option<Style>,
    pub input: Option<Style>,
}

/// Recognized variant options for one form instance. The three historical
/// checkout layouts collapse into this: a palette swap plus three switches.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub title: Option<String>,
    pub show_cancel: bool,
    pub show_disclaimer: bool,
    pub allow_visibility_toggle: bool,
    pub theme: Theme,
    pub styles: RegionStyles,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: None,
            show_cancel: true,
            show_disclaimer: true,
            allow_visibility_toggle: true,
            theme: Theme::default(),
            styles: RegionStyles::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    FocusNext,
    FocusPrev,
    Blur,
    Insert(char),
    DeleteBack,
    ClearField,
    ToggleReveal,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Submitted,
    Cancelled,
}

/// The composer: classifies key events, binds field identifiers before
/// invoking controller handlers, gates the submit action on aggregate
/// validity, and owns the only core-local state (the reveal flag and the
/// error banner's transition progress).
#[derive(Debug)]
pub struct FormSession {
    config: FormConfig,
    defs: [FieldDef; 3],
    banner: ErrorBanner,
    reveal: bool,
}

impl FormSession {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            defs: FieldDef::all(),
            banner: ErrorBanner::default(),
            reveal: true,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn defs(&self) -> &[FieldDef; 3] {
        &self.defs
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    /// Whether card-number digits render in clear text.
    pub fn reveal(&self) -> bool {
        self.reveal
    }

    pub fn classify(&self, key: &KeyEvent) -> Option<FormAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => Some(FormAction::Submit),
                KeyCode::Char('q')
                | KeyCode::Char('Q')
                | KeyCode::Char('c')
                | KeyCode::Char('C') => Some(FormAction::Cancel),
                KeyCode::Char('r') | KeyCode::Char('R')
                    if self.config.allow_visibility_toggle =>
                {
                    Some(FormAction::ToggleReveal)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => Some(FormAction::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(FormAction::FocusPrev),
            KeyCode::Esc => Some(FormAction::Blur),
            KeyCode::Enter => Some(FormAction::Submit),
            KeyCode::Char(ch) => Some(FormAction::Insert(ch)),
            KeyCode::Backspace => Some(FormAction::DeleteBack),
            KeyCode::Delete => Some(FormAction::ClearField),
            _ => None,
        }
    }

    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        controller: &mut dyn FormController,
    ) -> Option<Outcome> {
        let action = self.classify(key)?;
        self.apply(action, controller)
    }

    pub fn apply(
        &mut self,
        action: FormAction,
        controller: &mut dyn FormController,
    ) -> Option<Outcome> {
        match action {
            FormAction::FocusNext => {
                let next = controller
                    .focused()
                    .map(Field::next)
                    .unwrap_or(Field::CardNumber);
                controller.handle_focus(next);
                None
            }
            FormAction::FocusPrev => {
                let prev = controller
                    .focused()
                    .map(Field::prev)
                    .unwrap_or(Field::CardCode);
                controller.handle_focus(prev);
                None
            }
            FormAction::Blur => {
                controller.handle_blur();
                None
            }
            FormAction::Insert(ch) => {
                if let Some(field) = controller.focused() {
                    self.edit(field, controller, |value| {
                        let mut candidate = value.to_string();
                        candidate.push(ch);
                        candidate
                    });
                }
                None
            }
            FormAction::DeleteBack => {
                if let Some(field) = controller.focused() {
                    self.edit(field, controller, |value| {
                        let mut shortened = value.to_string();
                        shortened.pop();
                        shortened
                    });
                }
                None
            }
            FormAction::ClearField => {
                if let Some(field) = controller.focused() {
                    if !controller.values().get(field).is_empty() {
                        controller.handle_change(field, String::new());
                    }
                }
                None
            }
            FormAction::ToggleReveal => {
                self.reveal = !self.reveal;
                None
            }
            FormAction::Submit => {
                // Eligibility gates the binding itself: while any field is
                // invalid there is no invocable submit handler to call.
                let handler = can_submit(controller.validation())
                    .then(|| |target: &mut dyn FormController| target.handle_submit());
                handler.map(|invoke| {
                    invoke(controller);
                    Outcome::Submitted
                })
            }
            FormAction::Cancel => {
                controller.handle_cancel();
                Some(Outcome::Cancelled)
            }
        }
    }

    /// Re-derive the banner's key from the controller's current validity.
    pub fn sync(&mut self, controller: &dyn FormController) {
        self.banner.sync(first_invalid(controller.validation()));
    }

    /// One animation step; driven by the runtime's tick cadence.
    pub fn tick(&mut self) {
        self.banner.tick();
    }

    fn def(&self, field: Field) -> &FieldDef {
        // defs are built in canonical order, one per variant.
        &self.defs[field as usize]
    }

    fn edit(
        &self,
        field: Field,
        controller: &mut dyn FormController,
        rewrite: impl FnOnce(&str) -> String,
    ) {
        let current = controller.values().get(field).clone();
        let next = self.def(field).mask.apply(&rewrite(&current));
        if next != current {
            controller.handle_change(field, next);
        }
    }
}

use crate::field::{Field, FieldMap};

/// Boundary contract with the embedding application.
///
/// The controller owns field values, per-field validity, and focus; the form
/// reads them as an immutable snapshot on every render and never mutates them
/// directly. All mutation flows back through the handlers, with the field
/// identifier already bound where one applies. `handle_change` always receives
/// the masked display string, never the raw keystroke.
pub trait FormController {
    fn values(&self) -> &FieldMap<String>;

    /// `true` means valid. Whether untouched fields start valid or invalid is
    /// controller policy.
    fn validation(&self) -> &FieldMap<bool>;

    fn focused(&self) -> Option<Field>;

    /// Rendered verbatim after a literal `$` on the pay control.
    fn amount(&self) -> f64;

    fn disclaimer(&self) -> Option<&str> {
        None
    }

    fn handle_change(&mut self, field: Field, value: String);

    fn handle_focus(&mut self, field: Field);

    /// No identifier: the controller infers the field from the prior focus.
    fn handle_blur(&mut self);

    /// Only ever invoked while every field reports valid.
    fn handle_submit(&mut self);

    /// Invoked unconditionally on the cancel action, regardless of validity.
    fn handle_cancel(&mut self);
}

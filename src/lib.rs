#![deny(rust_2018_idioms)]

mod controller;
mod field;
mod form;
mod mask;
mod runtime;
mod theme;
mod ui;
pub mod validate;

pub use controller::FormController;
pub use field::{Field, FieldMap};
pub use form::{
    ErrorBanner, FieldDef, FormAction, FormConfig, FormSession, Outcome, RegionStyles,
    can_submit, error_message, first_invalid,
};
pub use mask::{Mask, MaskSlot};
pub use runtime::{CheckoutForm, UiOptions};
pub use theme::{Rgb, Theme};

pub mod prelude {
    pub use super::{
        CheckoutForm, Field, FieldMap, FormConfig, FormController, Outcome, Theme, UiOptions,
    };
}

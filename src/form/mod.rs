mod defs;
mod error;
mod session;
mod validity;

pub use defs::FieldDef;
pub use error::{ErrorBanner, error_message};
pub use session::{FormAction, FormConfig, FormSession, Outcome, RegionStyles};
pub use validity::{can_submit, first_invalid};

//! Entity forms.

pub mod club;
pub mod validation;

pub use club::{ClubField, ClubFields, ClubForm, FormExit, FormMode, FormPhase};
pub use validation::{Rule, Validation, Violation};

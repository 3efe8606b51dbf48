//! Create and edit user forms, independent of how they are rendered.
//!
//! Each dialog owns its draft, its per-field errors and a single form-level
//! error, and drives one request against [`user_api::UserApi`] per submit.

pub mod avatar;
pub mod create;
pub mod dialog;
pub mod draft;
pub mod edit;
pub mod field;
pub mod messages;
pub mod page;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use create::CreateUserDialog;
pub use dialog::{DialogState, SubmitOutcome};
pub use draft::{CreateDraft, Draft, DraftError, EditDraft};
pub use edit::EditUserDialog;
pub use field::{Field, ValidationErrors};
pub use page::{RefreshSignal, UsersPage};

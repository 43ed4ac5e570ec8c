//! Domain models with validation at construction
//!
//! Inbound payloads become a [`NewUser`] only after every field passes
//! validation. Invalid input returns [`ValidationError`], never a panic.

pub mod user;
pub mod validation;

pub use user::{NewUser, User, MAX_FIELD_LEN};
pub use validation::ValidationError;

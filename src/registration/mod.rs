//! Event registration form state.

pub mod form;

pub use form::{EmergencyContact, FormUpdate, RegistrationForm, CONFIRMATION_MESSAGE};

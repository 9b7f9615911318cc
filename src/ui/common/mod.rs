//! Common reusable UI components

pub mod form;

pub use form::{FormInput, SubmitButton};

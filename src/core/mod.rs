//! Core domain models and business logic for lead capture

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
mod lead;
#[cfg(feature = "ssr")]
pub mod leads;
mod notification;
pub mod reveal;
mod submission;

pub use lead::*;
pub use notification::*;
pub use submission::*;

//! Lead capture backend
//!
//! - `RemoteTable`: insert-only client for the hosted HR users table
//! - `POST /api/leads`: validates a lead from the signup form and stores it

pub mod api;
pub mod remote;

pub use api::{LeadsApiState, leads_router};
pub use remote::{RemoteTable, RemoteTableError};

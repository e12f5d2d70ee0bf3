//! # Petchat Core
//!
//! Contract plumbing shared by the auth and chat service payloads.
//! This crate knows nothing about individual DTOs; it only provides the
//! JSON codec they all go through and the date-time wire format they share.

pub mod codec;
pub mod error;
pub mod local_datetime;

pub use codec::{Contract, JsonStyle};
pub use error::ContractError;

#![forbid(unsafe_code)]

//! Conflict and state-delta records reported by command handlers.
//!
//! [`mismatch`] and its typed companions ([`boolean`], [`string`], [`message`])
//! build `ValueMismatch` values for optimistic-concurrency conflicts.
//! [`changes`] builds the concrete `*Change` records for plain transitions.

use packer::UnpackError;
use thiserror::Error;

pub mod boolean;
pub mod changes;
pub mod message;
pub mod mismatch;
pub mod string;

pub use changes::{ChangeRecord, Changeable};
pub use mismatch::Zero;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ChangeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("required value is missing: {0}")]
    NullReference(&'static str),
    #[error(transparent)]
    Unpack(#[from] UnpackError),
}

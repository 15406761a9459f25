//! Conversion of local failures into the wire `Error` record carried by
//! rejections.

use crate::SignalError;
use packer::UnpackError;
use signal_protocol::signal::v1::Error;

/// Numeric code reported next to an error's message.
pub trait ErrorCode {
    fn code(&self) -> i32;
}

impl ErrorCode for SignalError {
    fn code(&self) -> i32 {
        match self {
            SignalError::NullReference(_) => 1,
            SignalError::InvalidState(_) => 2,
            SignalError::Unpack(inner) => inner.code(),
        }
    }
}

impl ErrorCode for UnpackError {
    fn code(&self) -> i32 {
        match self {
            UnpackError::TypeMismatch { .. } => 3,
            UnpackError::Malformed { .. } => 4,
        }
    }
}

/// Describe `err` with code `0`.
pub fn from_error<E: std::error::Error>(err: &E) -> Error {
    Error {
        r#type: short_type_name::<E>().to_string(),
        message: err.to_string(),
        code: 0,
    }
}

pub fn from_coded<E: std::error::Error + ErrorCode>(err: &E) -> Error {
    Error {
        code: err.code(),
        ..from_error(err)
    }
}

fn short_type_name<E>() -> &'static str {
    let full = std::any::type_name::<E>();
    full.rsplit("::").next().unwrap_or(full)
}

//! Mismatches of boolean flags.

use crate::{mismatch, ChangeError};
use signal_protocol::signal::v1::ValueMismatch;

/// A command meant to clear a flag that was already cleared.
pub fn expected_true(version: i32) -> ValueMismatch {
    mismatch::of(true, false, false, version)
}

/// A command meant to raise a flag that was already raised.
pub fn expected_false(version: i32) -> ValueMismatch {
    mismatch::of(false, true, true, version)
}

pub fn of(expected: bool, actual: bool, new_value: bool, version: i32) -> ValueMismatch {
    mismatch::of(expected, actual, new_value, version)
}

pub fn unpack_expected(mismatch: &ValueMismatch) -> Result<bool, ChangeError> {
    mismatch::unpack_expected(mismatch)
}

pub fn unpack_actual(mismatch: &ValueMismatch) -> Result<bool, ChangeError> {
    mismatch::unpack_actual(mismatch)
}

pub fn unpack_new_value(mismatch: &ValueMismatch) -> Result<bool, ChangeError> {
    mismatch::unpack_new_value(mismatch)
}

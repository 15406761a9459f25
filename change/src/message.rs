//! Mismatches of arbitrary messages. The default instance plays the role zero
//! plays for numbers.

use crate::mismatch::required;
use crate::ChangeError;
use packer::{pack_message, unpack_message};
use prost::{Message, Name};
use signal_protocol::signal::v1::ValueMismatch;

pub fn of<M: Message + Name>(expected: &M, actual: &M, new_value: &M, version: i32) -> ValueMismatch {
    ValueMismatch {
        expected: Some(pack_message(expected)),
        actual: Some(pack_message(actual)),
        new_value: Some(pack_message(new_value)),
        version,
    }
}

pub fn unexpected_value<M: Message + Name + PartialEq>(
    expected: &M,
    actual: &M,
    new_value: &M,
    version: i32,
) -> Result<ValueMismatch, ChangeError> {
    if expected == actual {
        return Err(ChangeError::InvalidArgument(format!(
            "expected and actual `{}` values must differ",
            M::full_name()
        )));
    }
    Ok(of(expected, actual, new_value, version))
}

/// The command expected the default instance but found `actual`.
pub fn expected_default<M: Message + Name + Default>(
    actual: &M,
    new_value: &M,
    version: i32,
) -> ValueMismatch {
    of(&M::default(), actual, new_value, version)
}

/// The command wanted to clear `expected`, but the field already held the default.
pub fn expected_not_default<M: Message + Name + Default>(expected: &M, version: i32) -> ValueMismatch {
    let default = M::default();
    of(expected, &default, &default, version)
}

/// The command wanted to replace `expected` with `new_value`, but the field
/// held the default.
pub fn expected_not_default_with<M: Message + Name + Default>(
    expected: &M,
    new_value: &M,
    version: i32,
) -> ValueMismatch {
    of(expected, &M::default(), new_value, version)
}

pub fn unpack_expected<M: Message + Name + Default>(
    mismatch: &ValueMismatch,
) -> Result<M, ChangeError> {
    let any = required(mismatch.expected.as_ref(), "expected")?;
    Ok(unpack_message(any)?)
}

pub fn unpack_actual<M: Message + Name + Default>(
    mismatch: &ValueMismatch,
) -> Result<M, ChangeError> {
    let any = required(mismatch.actual.as_ref(), "actual")?;
    Ok(unpack_message(any)?)
}

pub fn unpack_new_value<M: Message + Name + Default>(
    mismatch: &ValueMismatch,
) -> Result<M, ChangeError> {
    let any = required(mismatch.new_value.as_ref(), "new_value")?;
    Ok(unpack_message(any)?)
}

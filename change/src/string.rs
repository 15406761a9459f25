//! Mismatches of string values, with the empty string as the "unset" sentinel.

use crate::{mismatch, ChangeError};
use signal_protocol::signal::v1::ValueMismatch;

/// The command expected an empty string but found `actual`.
pub fn expected_empty(actual: &str, new_value: &str, version: i32) -> ValueMismatch {
    of("", actual, new_value, version)
}

/// The command wanted to clear `expected` but the field was already empty.
pub fn expected_not_empty(expected: &str, version: i32) -> ValueMismatch {
    of(expected, "", "", version)
}

pub fn unexpected_value(
    expected: &str,
    actual: &str,
    new_value: &str,
    version: i32,
) -> Result<ValueMismatch, ChangeError> {
    mismatch::unexpected_value(
        expected.to_string(),
        actual.to_string(),
        new_value.to_string(),
        version,
    )
}

pub fn of(expected: &str, actual: &str, new_value: &str, version: i32) -> ValueMismatch {
    mismatch::of(
        expected.to_string(),
        actual.to_string(),
        new_value.to_string(),
        version,
    )
}

pub fn unpack_expected(mismatch: &ValueMismatch) -> Result<String, ChangeError> {
    mismatch::unpack_expected(mismatch)
}

pub fn unpack_actual(mismatch: &ValueMismatch) -> Result<String, ChangeError> {
    mismatch::unpack_actual(mismatch)
}

pub fn unpack_new_value(mismatch: &ValueMismatch) -> Result<String, ChangeError> {
    mismatch::unpack_new_value(mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::expected_true;

    const EXPECTED: &str = "expected string";
    const ACTUAL: &str = "actual string";
    const NEW_VALUE: &str = "new value to set";
    const VERSION: i32 = 1;

    #[test]
    fn for_expected_empty_string() {
        let mismatch = expected_empty(ACTUAL, NEW_VALUE, VERSION);

        assert_eq!(unpack_expected(&mismatch).unwrap(), "");
        assert_eq!(unpack_actual(&mismatch).unwrap(), ACTUAL);
        assert_eq!(unpack_new_value(&mismatch).unwrap(), NEW_VALUE);
        assert_eq!(mismatch.version, VERSION);
    }

    #[test]
    fn for_unexpected_empty_string() {
        let mismatch = expected_not_empty(EXPECTED, VERSION);

        assert_eq!(unpack_expected(&mismatch).unwrap(), EXPECTED);
        assert_eq!(unpack_actual(&mismatch).unwrap(), "");
        // Clearing was requested, so the new value is empty too.
        assert_eq!(unpack_new_value(&mismatch).unwrap(), "");
    }

    #[test]
    fn for_unexpected_value() {
        let mismatch = unexpected_value(EXPECTED, ACTUAL, NEW_VALUE, VERSION).unwrap();

        assert_eq!(unpack_expected(&mismatch).unwrap(), EXPECTED);
        assert_eq!(unpack_actual(&mismatch).unwrap(), ACTUAL);
        assert_eq!(unpack_new_value(&mismatch).unwrap(), NEW_VALUE);
    }

    #[test]
    fn rejects_same_expected_and_actual() {
        let err = unexpected_value("same-same", "same-same", NEW_VALUE, VERSION).unwrap_err();
        assert!(matches!(err, ChangeError::InvalidArgument(_)));
    }

    #[test]
    fn fails_to_unpack_non_string_mismatch() {
        let mismatch = expected_true(VERSION);
        assert!(unpack_expected(&mismatch).is_err());
        assert!(unpack_actual(&mismatch).is_err());
        assert!(unpack_new_value(&mismatch).is_err());
    }
}

use crate::ChangeError;
use packer::{
    pack, type_name, unpack, Fixed32, Fixed64, Kind, Packable, SFixed32, SFixed64, SInt32, SInt64,
};
use signal_protocol::google::protobuf::Any;
use signal_protocol::signal::v1::ValueMismatch;

/// Numeric kinds with a zero value usable as a "nothing there" sentinel.
pub trait Zero: Packable {
    fn zero() -> Self;
}

macro_rules! impl_zero {
    ($($ty:ty => $zero:expr),+ $(,)?) => {
        $(
            impl Zero for $ty {
                fn zero() -> Self {
                    $zero
                }
            }
        )+
    };
}

impl_zero!(
    i32 => 0,
    i64 => 0,
    u32 => 0,
    u64 => 0,
    f32 => 0.0,
    f64 => 0.0,
    SInt32 => SInt32(0),
    SInt64 => SInt64(0),
    Fixed32 => Fixed32(0),
    Fixed64 => Fixed64(0),
    SFixed32 => SFixed32(0),
    SFixed64 => SFixed64(0),
);

/// Build a mismatch from already-known values. Does not compare `expected`
/// with `actual`; see [`unexpected_value`] for the checked form.
pub fn of<T: Packable>(expected: T, actual: T, new_value: T, version: i32) -> ValueMismatch {
    ValueMismatch {
        expected: Some(pack(&expected)),
        actual: Some(pack(&actual)),
        new_value: Some(pack(&new_value)),
        version,
    }
}

/// Mismatch where the command expected `expected` but found `actual`.
pub fn unexpected_value<T: Packable>(
    expected: T,
    actual: T,
    new_value: T,
    version: i32,
) -> Result<ValueMismatch, ChangeError> {
    if expected.same_value(&actual) {
        return Err(ChangeError::InvalidArgument(format!(
            "expected and actual {} values must differ",
            T::SCALAR.as_str()
        )));
    }
    Ok(of(expected, actual, new_value, version))
}

/// The command expected zero but found `actual`.
pub fn expected_zero<T: Zero>(actual: T, new_value: T, version: i32) -> ValueMismatch {
    of(T::zero(), actual, new_value, version)
}

/// The command expected `expected` but found zero.
pub fn expected_non_zero<T: Zero>(expected: T, new_value: T, version: i32) -> ValueMismatch {
    of(expected, T::zero(), new_value, version)
}

pub fn unpack_expected<T: Packable>(mismatch: &ValueMismatch) -> Result<T, ChangeError> {
    let any = required(mismatch.expected.as_ref(), "expected")?;
    Ok(unpack(any)?)
}

pub fn unpack_actual<T: Packable>(mismatch: &ValueMismatch) -> Result<T, ChangeError> {
    let any = required(mismatch.actual.as_ref(), "actual")?;
    Ok(unpack(any)?)
}

pub fn unpack_new_value<T: Packable>(mismatch: &ValueMismatch) -> Result<T, ChangeError> {
    let any = required(mismatch.new_value.as_ref(), "new_value")?;
    Ok(unpack(any)?)
}

/// Kind shared by all three containers of `mismatch`.
pub fn kind_of(mismatch: &ValueMismatch) -> Result<Kind, ChangeError> {
    let expected = required(mismatch.expected.as_ref(), "expected")?;
    let actual = required(mismatch.actual.as_ref(), "actual")?;
    let new_value = required(mismatch.new_value.as_ref(), "new_value")?;

    let name = type_name(expected);
    if type_name(actual) != name || type_name(new_value) != name {
        return Err(ChangeError::InvalidArgument(format!(
            "mismatch mixes kinds: expected `{}`, actual `{}`, new value `{}`",
            name,
            type_name(actual),
            type_name(new_value)
        )));
    }

    Ok(Kind::of(expected))
}

pub(crate) fn required<'a>(
    value: Option<&'a Any>,
    field: &'static str,
) -> Result<&'a Any, ChangeError> {
    value.ok_or(ChangeError::NullReference(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use packer::UnpackError;

    const EXPECTED: i32 = 1986;
    const ACTUAL: i32 = 1567;
    const NEW_VALUE: i32 = 1452;
    const VERSION: i32 = 5;

    #[test]
    fn creates_from_int32_values() {
        let mismatch = of(EXPECTED, ACTUAL, NEW_VALUE, VERSION);

        assert_eq!(unpack_expected::<i32>(&mismatch).unwrap(), EXPECTED);
        assert_eq!(unpack_actual::<i32>(&mismatch).unwrap(), ACTUAL);
        assert_eq!(unpack_new_value::<i32>(&mismatch).unwrap(), NEW_VALUE);
        assert_eq!(mismatch.version, VERSION);
    }

    #[test]
    fn expected_zero_fills_expected() {
        let mismatch = expected_zero(ACTUAL, NEW_VALUE, VERSION);

        assert_eq!(unpack_expected::<i32>(&mismatch).unwrap(), 0);
        assert_eq!(unpack_actual::<i32>(&mismatch).unwrap(), ACTUAL);
        assert_eq!(unpack_new_value::<i32>(&mismatch).unwrap(), NEW_VALUE);
    }

    #[test]
    fn expected_non_zero_fills_actual() {
        let mismatch = expected_non_zero(16_290_414u64, 17u64, VERSION);

        assert_eq!(unpack_expected::<u64>(&mismatch).unwrap(), 16_290_414);
        assert_eq!(unpack_actual::<u64>(&mismatch).unwrap(), 0);
        assert_eq!(unpack_new_value::<u64>(&mismatch).unwrap(), 17);
    }

    #[test]
    fn rejects_equal_expected_and_actual() {
        let err = unexpected_value(5, 5, 10, 1).unwrap_err();
        assert!(matches!(err, ChangeError::InvalidArgument(_)));

        let err = unexpected_value(f32::NAN, f32::NAN, 1.0, 1).unwrap_err();
        assert!(matches!(err, ChangeError::InvalidArgument(_)));
    }

    #[test]
    fn unexpected_value_keeps_all_sides() {
        let mismatch = unexpected_value(EXPECTED as i64, ACTUAL as i64, 0, VERSION).unwrap();
        assert_eq!(unpack_expected::<i64>(&mismatch).unwrap(), EXPECTED as i64);
        assert_eq!(unpack_actual::<i64>(&mismatch).unwrap(), ACTUAL as i64);
        assert_eq!(unpack_new_value::<i64>(&mismatch).unwrap(), 0);
    }

    #[test]
    fn version_is_stored_verbatim() {
        let mismatch = of(1u32, 2, 3, i32::MIN);
        assert_eq!(mismatch.version, i32::MIN);
    }

    #[test]
    fn unpacking_other_kind_fails() {
        let mismatch = of(true, false, false, VERSION);
        for result in [
            unpack_expected::<i32>(&mismatch),
            unpack_actual::<i32>(&mismatch),
            unpack_new_value::<i32>(&mismatch),
        ] {
            assert!(matches!(
                result,
                Err(ChangeError::Unpack(UnpackError::TypeMismatch { .. }))
            ));
        }
    }

    #[test]
    fn missing_container_is_null_reference() {
        let mut mismatch = of(1i32, 2, 3, VERSION);
        mismatch.actual = None;

        assert_eq!(
            unpack_actual::<i32>(&mismatch).unwrap_err(),
            ChangeError::NullReference("actual")
        );
        assert_eq!(
            kind_of(&mismatch).unwrap_err(),
            ChangeError::NullReference("actual")
        );
        assert_eq!(
            unpack_expected::<i32>(&ValueMismatch::default()).unwrap_err(),
            ChangeError::NullReference("expected")
        );
    }

    #[test]
    fn flavors_box_like_their_base_type() {
        let mismatch = expected_zero(SInt32(-4), SInt32(8), VERSION);
        assert_eq!(unpack_actual::<i32>(&mismatch).unwrap(), -4);
        assert_eq!(unpack_expected::<SInt32>(&mismatch).unwrap(), SInt32(0));
        assert_eq!(kind_of(&mismatch).unwrap(), Kind::Int32);
    }

    #[test]
    fn kind_of_detects_mixed_containers() {
        let mut mismatch = of(1i64, 2, 3, VERSION);
        assert_eq!(kind_of(&mismatch).unwrap(), Kind::Int64);

        mismatch.new_value = Some(pack(&3i32));
        assert!(matches!(
            kind_of(&mismatch),
            Err(ChangeError::InvalidArgument(_))
        ));
    }
}

use change::{boolean, changes, message, mismatch, string, ChangeError};
use packer::{Kind, TypedValue, UnpackError};
use prost::Message;
use signal_protocol::google::protobuf::Timestamp;
use signal_protocol::signal::v1::ValueMismatch;

const DELTA: f64 = 0.01;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < DELTA,
        "{actual} is not within {DELTA} of {expected}"
    );
}

fn assert_type_mismatch<T: std::fmt::Debug>(result: Result<T, ChangeError>) {
    match result {
        Err(ChangeError::Unpack(UnpackError::TypeMismatch { .. })) => {}
        other => panic!("expected a type mismatch, got {other:?}"),
    }
}

#[test]
fn double_mismatch_round_trips() {
    let mismatch = mismatch::of(18.39f64, 19.01, 14.52, 100);

    assert_close(mismatch::unpack_expected(&mismatch).unwrap(), 18.39);
    assert_close(mismatch::unpack_actual(&mismatch).unwrap(), 19.01);
    assert_close(mismatch::unpack_new_value(&mismatch).unwrap(), 14.52);
    assert_eq!(mismatch.version, 100);
}

#[test]
fn double_expected_zero() {
    let mismatch = mismatch::expected_zero(19.01f64, 14.52, 100);

    assert_close(mismatch::unpack_expected(&mismatch).unwrap(), 0.0);
    assert_close(mismatch::unpack_actual(&mismatch).unwrap(), 19.01);
    assert_close(mismatch::unpack_new_value(&mismatch).unwrap(), 14.52);
}

#[test]
fn string_expected_empty() {
    let mismatch = string::expected_empty("actual", "new", 1);

    assert_eq!(string::unpack_expected(&mismatch).unwrap(), "");
    assert_eq!(string::unpack_actual(&mismatch).unwrap(), "actual");
    assert_eq!(string::unpack_new_value(&mismatch).unwrap(), "new");
}

#[test]
fn int32_no_op_mismatch_is_rejected() {
    assert!(matches!(
        mismatch::unexpected_value(5i32, 5, 10, 1),
        Err(ChangeError::InvalidArgument(_))
    ));
}

#[test]
fn string_no_op_change_is_rejected() {
    assert!(matches!(
        changes::of("a", "a"),
        Err(ChangeError::InvalidArgument(_))
    ));
}

#[test]
fn float_mismatch_refuses_other_kinds() {
    let mismatch = mismatch::of(1473.0219f32, 1543.0524, 1.0, 2);
    assert_type_mismatch(mismatch::unpack_expected::<f64>(&mismatch));
    assert_type_mismatch(mismatch::unpack_actual::<i32>(&mismatch));
    assert_type_mismatch(mismatch::unpack_new_value::<String>(&mismatch));

    let flag = boolean::expected_true(2);
    assert_type_mismatch(mismatch::unpack_expected::<f32>(&flag));
    assert_type_mismatch(mismatch::unpack_actual::<f32>(&flag));
    assert_type_mismatch(mismatch::unpack_new_value::<f32>(&flag));
}

#[test]
fn every_scalar_kind_round_trips() {
    fn check<T: packer::Packable + std::fmt::Debug>(expected: T, actual: T, new_value: T) {
        let built = mismatch::unexpected_value(
            expected.clone(),
            actual.clone(),
            new_value.clone(),
            9,
        )
        .unwrap();
        assert_eq!(mismatch::unpack_expected::<T>(&built).unwrap(), expected);
        assert_eq!(mismatch::unpack_actual::<T>(&built).unwrap(), actual);
        assert_eq!(mismatch::unpack_new_value::<T>(&built).unwrap(), new_value);
        assert_eq!(built.version, 9);

        assert!(matches!(
            mismatch::unexpected_value(expected.clone(), expected, new_value, 9),
            Err(ChangeError::InvalidArgument(_))
        ));
    }

    check(true, false, true);
    check(1986i32, 1567, 1452);
    check(-16_420_225i64, 17_270_320, 0);
    check(7u32, 8, 9);
    check(u64::MAX, 1, 2);
    check(packer::SInt32(-1), packer::SInt32(1), packer::SInt32(0));
    check(packer::SInt64(-5), packer::SInt64(i64::MAX), packer::SInt64(3));
    check(packer::Fixed32(1), packer::Fixed32(u32::MAX), packer::Fixed32(2));
    check(packer::Fixed64(10), packer::Fixed64(11), packer::Fixed64(12));
    check(packer::SFixed32(-9), packer::SFixed32(9), packer::SFixed32(0));
    check(packer::SFixed64(i64::MIN), packer::SFixed64(0), packer::SFixed64(1));
    check(1.5f32, 2.5, 3.5);
    check(18.39f64, 19.01, 14.52);
    check("a".to_string(), "b".to_string(), "c".to_string());
    check(vec![1u8, 2], vec![3u8], Vec::new());

    let earlier = Timestamp::new(1_700_000_000, 0);
    let later = Timestamp::new(1_700_000_060, 0);
    let built = message::unexpected_value(&earlier, &later, &later, 9).unwrap();
    assert_eq!(message::unpack_expected::<Timestamp>(&built).unwrap(), earlier);
    assert_eq!(message::unpack_actual::<Timestamp>(&built).unwrap(), later);
    assert_eq!(message::unpack_new_value::<Timestamp>(&built).unwrap(), later);
    assert!(matches!(
        message::unexpected_value(&earlier, &earlier, &later, 9),
        Err(ChangeError::InvalidArgument(_))
    ));
}

#[test]
fn message_mismatch_survives_the_wire() {
    let actual = Timestamp::new(1_700_000_000, 0);
    let requested = Timestamp::new(1_700_000_600, 0);
    let built = message::expected_default(&actual, &requested, 12);

    let decoded = ValueMismatch::decode(built.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded, built);
    assert_eq!(
        message::unpack_expected::<Timestamp>(&decoded).unwrap(),
        Timestamp::default()
    );
    assert_eq!(message::unpack_actual::<Timestamp>(&decoded).unwrap(), actual);
    assert_eq!(mismatch::kind_of(&decoded).unwrap(), Kind::Message);
}

#[test]
fn mismatch_sides_can_be_inspected_without_a_kind() {
    let built = string::unexpected_value("left", "right", "center", 3).unwrap();
    let expected = TypedValue::decode(built.expected.as_ref().unwrap()).unwrap();

    assert_eq!(expected, TypedValue::String("left".to_string()));
    assert_eq!(mismatch::kind_of(&built).unwrap(), Kind::String);
}

#[test]
fn decoded_change_is_revalidated() {
    let record = changes::of(1.0f32, 2.0).unwrap();
    let decoded = signal_protocol::signal::v1::FloatChange::decode(
        record.encode_to_vec().as_slice(),
    )
    .unwrap();
    assert!(changes::validate(&decoded).is_ok());

    let tampered = signal_protocol::signal::v1::FloatChange {
        previous_value: 2.0,
        new_value: 2.0,
    };
    assert!(changes::validate(&tampered).is_err());
}

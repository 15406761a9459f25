//! Concrete `previous -> new` records, one per value kind.

use crate::ChangeError;
use packer::{Fixed32, Fixed64, Packable, SFixed32, SFixed64, SInt32, SInt64};
use signal_protocol::google::protobuf::Timestamp;
use signal_protocol::signal::v1::{
    BooleanChange, BytesChange, DoubleChange, Fixed32Change, Fixed64Change, FloatChange,
    Int32Change, Int64Change, SFixed32Change, SFixed64Change, SInt32Change, SInt64Change,
    StringChange, TimestampChange, UInt32Change, UInt64Change,
};

/// Read access to both sides of a change record.
///
/// Message-typed sides may be absent on the wire and report `None`.
pub trait ChangeRecord {
    type Value: Changeable;

    fn previous_value(&self) -> Option<&Self::Value>;

    fn new_value(&self) -> Option<&Self::Value>;
}

/// A value kind with its own change record.
pub trait Changeable: Sized + PartialEq {
    type Record: ChangeRecord;

    fn record(previous: Self, new: Self) -> Self::Record;

    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

/// Record a transition from `previous` to `new`. Equal values are not a change.
pub fn of<T: Changeable>(previous: T, new: T) -> Result<T::Record, ChangeError> {
    if previous.same_value(&new) {
        return Err(ChangeError::InvalidArgument(
            "previous and new values must differ".to_string(),
        ));
    }
    Ok(T::record(previous, new))
}

/// Check a record that did not come from [`of`], e.g. one decoded off the wire.
pub fn validate<C: ChangeRecord>(record: &C) -> Result<(), ChangeError> {
    let previous = record
        .previous_value()
        .ok_or(ChangeError::NullReference("previous_value"))?;
    let new = record
        .new_value()
        .ok_or(ChangeError::NullReference("new_value"))?;

    if previous.same_value(new) {
        return Err(ChangeError::InvalidArgument(
            "previous and new values must differ".to_string(),
        ));
    }
    Ok(())
}

macro_rules! scalar_change {
    ($ty:ty, $record:ident, $value:ty, $into:expr) => {
        impl ChangeRecord for $record {
            type Value = $value;

            fn previous_value(&self) -> Option<&$value> {
                Some(&self.previous_value)
            }

            fn new_value(&self) -> Option<&$value> {
                Some(&self.new_value)
            }
        }

        impl Changeable for $ty {
            type Record = $record;

            fn record(previous: Self, new: Self) -> $record {
                $record {
                    previous_value: ($into)(previous),
                    new_value: ($into)(new),
                }
            }

            fn same_value(&self, other: &Self) -> bool {
                Packable::same_value(self, other)
            }
        }
    };
}

scalar_change!(String, StringChange, String, |v: String| v);
scalar_change!(Vec<u8>, BytesChange, Vec<u8>, |v: Vec<u8>| v);
scalar_change!(bool, BooleanChange, bool, |v: bool| v);
scalar_change!(f64, DoubleChange, f64, |v: f64| v);
scalar_change!(f32, FloatChange, f32, |v: f32| v);
scalar_change!(i32, Int32Change, i32, |v: i32| v);
scalar_change!(i64, Int64Change, i64, |v: i64| v);
scalar_change!(u32, UInt32Change, u32, |v: u32| v);
scalar_change!(u64, UInt64Change, u64, |v: u64| v);
scalar_change!(SInt32, SInt32Change, i32, |v: SInt32| v.0);
scalar_change!(SInt64, SInt64Change, i64, |v: SInt64| v.0);
scalar_change!(Fixed32, Fixed32Change, u32, |v: Fixed32| v.0);
scalar_change!(Fixed64, Fixed64Change, u64, |v: Fixed64| v.0);
scalar_change!(SFixed32, SFixed32Change, i32, |v: SFixed32| v.0);
scalar_change!(SFixed64, SFixed64Change, i64, |v: SFixed64| v.0);

impl Changeable for &str {
    type Record = StringChange;

    fn record(previous: Self, new: Self) -> StringChange {
        StringChange {
            previous_value: previous.to_string(),
            new_value: new.to_string(),
        }
    }
}

impl ChangeRecord for TimestampChange {
    type Value = Timestamp;

    fn previous_value(&self) -> Option<&Timestamp> {
        self.previous_value.as_ref()
    }

    fn new_value(&self) -> Option<&Timestamp> {
        self.new_value.as_ref()
    }
}

impl Changeable for Timestamp {
    type Record = TimestampChange;

    fn record(previous: Self, new: Self) -> TimestampChange {
        TimestampChange {
            previous_value: Some(previous),
            new_value: Some(new),
        }
    }
}

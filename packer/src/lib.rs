#![forbid(unsafe_code)]

//! Boxing of scalar and message values into the type-erased `Any` container.
//!
//! Every scalar travels inside a single-field wrapper message; the wrapper's
//! type URL is the only kind tag on the wire. Unpacking always checks that tag
//! before decoding, so a container never silently decodes as the wrong type.

use common::encode_deterministic;
use log::debug;
use prost::{Message, Name};
use signal_protocol::google::protobuf::{
    Any, BoolValue, BytesValue, DoubleValue, FloatValue, Int32Value, Int64Value, StringValue,
    UInt32Value, UInt64Value,
};
use thiserror::Error;

/// Prefix written in front of every packed type name.
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum UnpackError {
    #[error("type mismatch: expected `{expected}`, found `{actual}`")]
    TypeMismatch { expected: String, actual: String },
    #[error("malformed `{type_name}` payload: {reason}")]
    Malformed { type_name: String, reason: String },
}

/// Wire wrapper a packed value travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float,
    Double,
    String,
    Bytes,
    Message,
}

impl Kind {
    const WRAPPERS: [Kind; 9] = [
        Kind::Bool,
        Kind::Int32,
        Kind::Int64,
        Kind::UInt32,
        Kind::UInt64,
        Kind::Float,
        Kind::Double,
        Kind::String,
        Kind::Bytes,
    ];

    /// Fully-qualified name of the wrapper message, `None` for arbitrary messages.
    pub const fn wrapper_name(&self) -> Option<&'static str> {
        let name = match self {
            Kind::Bool => "google.protobuf.BoolValue",
            Kind::Int32 => "google.protobuf.Int32Value",
            Kind::Int64 => "google.protobuf.Int64Value",
            Kind::UInt32 => "google.protobuf.UInt32Value",
            Kind::UInt64 => "google.protobuf.UInt64Value",
            Kind::Float => "google.protobuf.FloatValue",
            Kind::Double => "google.protobuf.DoubleValue",
            Kind::String => "google.protobuf.StringValue",
            Kind::Bytes => "google.protobuf.BytesValue",
            Kind::Message => return None,
        };
        Some(name)
    }

    /// Kind of a packed container, judged by its type URL alone.
    pub fn of(any: &Any) -> Kind {
        let name = type_name(any);
        Self::WRAPPERS
            .into_iter()
            .find(|kind| kind.wrapper_name() == Some(name))
            .unwrap_or(Kind::Message)
    }
}

/// Declared scalar type of a value.
///
/// The integer wire flavors collapse onto four wrappers by signedness and
/// width; the flavor only matters for the concrete change records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    Float,
    Double,
    String,
    Bytes,
    Message,
}

impl ScalarType {
    pub const fn wrapper(self) -> Kind {
        match self {
            ScalarType::Bool => Kind::Bool,
            ScalarType::Int32 | ScalarType::SInt32 | ScalarType::SFixed32 => Kind::Int32,
            ScalarType::Int64 | ScalarType::SInt64 | ScalarType::SFixed64 => Kind::Int64,
            ScalarType::UInt32 | ScalarType::Fixed32 => Kind::UInt32,
            ScalarType::UInt64 | ScalarType::Fixed64 => Kind::UInt64,
            ScalarType::Float => Kind::Float,
            ScalarType::Double => Kind::Double,
            ScalarType::String => Kind::String,
            ScalarType::Bytes => Kind::Bytes,
            ScalarType::Message => Kind::Message,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::UInt32 => "uint32",
            ScalarType::UInt64 => "uint64",
            ScalarType::SInt32 => "sint32",
            ScalarType::SInt64 => "sint64",
            ScalarType::Fixed32 => "fixed32",
            ScalarType::Fixed64 => "fixed64",
            ScalarType::SFixed32 => "sfixed32",
            ScalarType::SFixed64 => "sfixed64",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
            ScalarType::Message => "message",
        }
    }
}

/// `sint32` value: zig-zag encoded when stored in a change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SInt32(pub i32);

/// `sint64` value: zig-zag encoded when stored in a change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SInt64(pub i64);

/// `fixed32` value: four-byte encoded when stored in a change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fixed32(pub u32);

/// `fixed64` value: eight-byte encoded when stored in a change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fixed64(pub u64);

/// `sfixed32` value: four-byte encoded when stored in a change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SFixed32(pub i32);

/// `sfixed64` value: eight-byte encoded when stored in a change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SFixed64(pub i64);

/// A scalar that can be boxed into `Any` through its wrapper message.
pub trait Packable: Sized + Clone + PartialEq {
    const SCALAR: ScalarType;

    type Wrapper: Message + Name + Default;

    fn to_wrapper(&self) -> Self::Wrapper;

    fn from_wrapper(wrapper: Self::Wrapper) -> Self;

    /// Equality as seen on the wire.
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! impl_packable {
    ($ty:ty, $scalar:ident, $wrapper:ident, $into:expr, $from:expr) => {
        impl Packable for $ty {
            const SCALAR: ScalarType = ScalarType::$scalar;

            type Wrapper = $wrapper;

            fn to_wrapper(&self) -> $wrapper {
                $wrapper {
                    value: ($into)(self),
                }
            }

            fn from_wrapper(wrapper: $wrapper) -> Self {
                ($from)(wrapper.value)
            }
        }
    };
}

impl_packable!(bool, Bool, BoolValue, |v: &bool| *v, |v| v);
impl_packable!(i32, Int32, Int32Value, |v: &i32| *v, |v| v);
impl_packable!(i64, Int64, Int64Value, |v: &i64| *v, |v| v);
impl_packable!(u32, UInt32, UInt32Value, |v: &u32| *v, |v| v);
impl_packable!(u64, UInt64, UInt64Value, |v: &u64| *v, |v| v);
impl_packable!(String, String, StringValue, |v: &String| v.clone(), |v| v);
impl_packable!(Vec<u8>, Bytes, BytesValue, |v: &Vec<u8>| v.clone(), |v| v);
impl_packable!(SInt32, SInt32, Int32Value, |v: &SInt32| v.0, SInt32);
impl_packable!(SInt64, SInt64, Int64Value, |v: &SInt64| v.0, SInt64);
impl_packable!(Fixed32, Fixed32, UInt32Value, |v: &Fixed32| v.0, Fixed32);
impl_packable!(Fixed64, Fixed64, UInt64Value, |v: &Fixed64| v.0, Fixed64);
impl_packable!(SFixed32, SFixed32, Int32Value, |v: &SFixed32| v.0, SFixed32);
impl_packable!(SFixed64, SFixed64, Int64Value, |v: &SFixed64| v.0, SFixed64);

// Floats compare by bit pattern: NaN equals itself and the two zeros differ.
impl Packable for f32 {
    const SCALAR: ScalarType = ScalarType::Float;

    type Wrapper = FloatValue;

    fn to_wrapper(&self) -> FloatValue {
        FloatValue { value: *self }
    }

    fn from_wrapper(wrapper: FloatValue) -> Self {
        wrapper.value
    }

    fn same_value(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Packable for f64 {
    const SCALAR: ScalarType = ScalarType::Double;

    type Wrapper = DoubleValue;

    fn to_wrapper(&self) -> DoubleValue {
        DoubleValue { value: *self }
    }

    fn from_wrapper(wrapper: DoubleValue) -> Self {
        wrapper.value
    }

    fn same_value(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

/// Type URL under which `M` is packed.
pub fn type_url_of<M: Name>() -> String {
    format!("{TYPE_URL_PREFIX}/{}", M::full_name())
}

/// Fully-qualified type name of a packed container, i.e. its URL without prefix.
pub fn type_name(any: &Any) -> &str {
    match any.type_url.rfind('/') {
        Some(idx) => &any.type_url[idx + 1..],
        None => &any.type_url,
    }
}

/// Whether `any` holds an `M`.
pub fn is<M: Name>(any: &Any) -> bool {
    type_name(any) == M::full_name()
}

pub fn pack_message<M: Message + Name>(msg: &M) -> Any {
    Any {
        type_url: type_url_of::<M>(),
        value: encode_deterministic(msg),
    }
}

pub fn unpack_message<M: Message + Name + Default>(any: &Any) -> Result<M, UnpackError> {
    let expected = M::full_name();
    let actual = type_name(any);
    if actual != expected {
        debug!("refusing to unpack `{}` as `{}`", actual, expected);
        return Err(UnpackError::TypeMismatch {
            expected,
            actual: actual.to_string(),
        });
    }

    M::decode(any.value.as_slice()).map_err(|err| UnpackError::Malformed {
        type_name: expected,
        reason: err.to_string(),
    })
}

pub fn pack<T: Packable>(value: &T) -> Any {
    pack_message(&value.to_wrapper())
}

pub fn unpack<T: Packable>(any: &Any) -> Result<T, UnpackError> {
    unpack_message::<T::Wrapper>(any).map(T::from_wrapper)
}

/// A packed value decoded without knowing its kind in advance.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    /// Arbitrary message, left packed.
    Message(Any),
}

impl TypedValue {
    pub fn decode(any: &Any) -> Result<Self, UnpackError> {
        let value = match Kind::of(any) {
            Kind::Bool => TypedValue::Bool(unpack(any)?),
            Kind::Int32 => TypedValue::Int32(unpack(any)?),
            Kind::Int64 => TypedValue::Int64(unpack(any)?),
            Kind::UInt32 => TypedValue::UInt32(unpack(any)?),
            Kind::UInt64 => TypedValue::UInt64(unpack(any)?),
            Kind::Float => TypedValue::Float(unpack(any)?),
            Kind::Double => TypedValue::Double(unpack(any)?),
            Kind::String => TypedValue::String(unpack(any)?),
            Kind::Bytes => TypedValue::Bytes(unpack(any)?),
            Kind::Message => TypedValue::Message(any.clone()),
        };
        Ok(value)
    }

    pub fn encode(&self) -> Any {
        match self {
            TypedValue::Bool(v) => pack(v),
            TypedValue::Int32(v) => pack(v),
            TypedValue::Int64(v) => pack(v),
            TypedValue::UInt32(v) => pack(v),
            TypedValue::UInt64(v) => pack(v),
            TypedValue::Float(v) => pack(v),
            TypedValue::Double(v) => pack(v),
            TypedValue::String(v) => pack(v),
            TypedValue::Bytes(v) => pack(v),
            TypedValue::Message(any) => any.clone(),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            TypedValue::Bool(_) => Kind::Bool,
            TypedValue::Int32(_) => Kind::Int32,
            TypedValue::Int64(_) => Kind::Int64,
            TypedValue::UInt32(_) => Kind::UInt32,
            TypedValue::UInt64(_) => Kind::UInt64,
            TypedValue::Float(_) => Kind::Float,
            TypedValue::Double(_) => Kind::Double,
            TypedValue::String(_) => Kind::String,
            TypedValue::Bytes(_) => Kind::Bytes,
            TypedValue::Message(_) => Kind::Message,
        }
    }
}

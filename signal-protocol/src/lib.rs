#![forbid(unsafe_code)]

/// Registers the protobuf package and short name of a hand-written message so
/// it can be boxed into `Any`.
macro_rules! impl_name {
    ($package:expr => $($ty:ident),+ $(,)?) => {
        $(
            impl ::prost::Name for $ty {
                const NAME: &'static str = stringify!($ty);
                const PACKAGE: &'static str = $package;
            }
        )+
    };
}

/// Well-known protobuf types, reproduced so their type URLs match other producers.
pub mod google {
    pub mod protobuf {
        use prost::Message;
        #[cfg(feature = "serde")]
        use serde::{Deserialize, Serialize};

        /// Type-erased container: a type URL plus the encoded message bytes.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Hash, Message)]
        pub struct Any {
            #[prost(string, tag = "1")]
            pub type_url: String,
            #[prost(bytes = "vec", tag = "2")]
            pub value: Vec<u8>,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Message)]
        pub struct Timestamp {
            #[prost(int64, tag = "1")]
            pub seconds: i64,
            #[prost(int32, tag = "2")]
            pub nanos: i32,
        }

        impl Timestamp {
            pub fn new(seconds: i64, nanos: i32) -> Self {
                Self { seconds, nanos }
            }
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Message)]
        pub struct Duration {
            #[prost(int64, tag = "1")]
            pub seconds: i64,
            #[prost(int32, tag = "2")]
            pub nanos: i32,
        }

        impl Duration {
            pub fn from_secs(seconds: i64) -> Self {
                Self { seconds, nanos: 0 }
            }
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct BoolValue {
            #[prost(bool, tag = "1")]
            pub value: bool,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Int32Value {
            #[prost(int32, tag = "1")]
            pub value: i32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Int64Value {
            #[prost(int64, tag = "1")]
            pub value: i64,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct UInt32Value {
            #[prost(uint32, tag = "1")]
            pub value: u32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct UInt64Value {
            #[prost(uint64, tag = "1")]
            pub value: u64,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Message)]
        pub struct FloatValue {
            #[prost(float, tag = "1")]
            pub value: f32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Message)]
        pub struct DoubleValue {
            #[prost(double, tag = "1")]
            pub value: f64,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct StringValue {
            #[prost(string, tag = "1")]
            pub value: String,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct BytesValue {
            #[prost(bytes = "vec", tag = "1")]
            pub value: Vec<u8>,
        }

        impl_name!("google.protobuf" =>
            Any,
            Timestamp,
            Duration,
            BoolValue,
            Int32Value,
            Int64Value,
            UInt32Value,
            UInt64Value,
            FloatValue,
            DoubleValue,
            StringValue,
            BytesValue,
        );
    }
}

/// Signal envelopes and mismatch/change records.
pub mod signal {
    pub mod v1 {
        use crate::google::protobuf::{Any, Duration, Timestamp};
        use prost::Message;
        #[cfg(feature = "serde")]
        use serde::{Deserialize, Serialize};

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Hash, Message)]
        pub struct TenantId {
            #[prost(string, tag = "1")]
            pub value: String,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Hash, Message)]
        pub struct UserId {
            #[prost(string, tag = "1")]
            pub value: String,
        }

        /// Offset of the actor's local time from UTC.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct ZoneOffset {
            #[prost(int32, tag = "1")]
            pub amount_seconds: i32,
        }

        /// Who issued a signal, when, and on behalf of which tenant.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct ActorContext {
            #[prost(message, optional, tag = "1")]
            pub actor: Option<UserId>,
            #[prost(message, optional, tag = "2")]
            pub timestamp: Option<Timestamp>,
            #[prost(message, optional, tag = "3")]
            pub tenant_id: Option<TenantId>,
            #[prost(message, optional, tag = "4")]
            pub zone_offset: Option<ZoneOffset>,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Hash, Message)]
        pub struct CommandId {
            #[prost(string, tag = "1")]
            pub uuid: String,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Hash, Message)]
        pub struct EventId {
            #[prost(string, tag = "1")]
            pub value: String,
        }

        /// Kind-agnostic reference to a signal: its packed id plus the type URL
        /// of the message it carries.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Hash, Message)]
        pub struct MessageId {
            #[prost(message, optional, tag = "1")]
            pub id: Option<Any>,
            #[prost(string, tag = "2")]
            pub type_url: String,
        }

        /// Causal parent of a signal.
        ///
        /// `root` points at the first signal of the chain and is filled in when
        /// the origin is created, so readers never walk `grand_origin`.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Origin {
            #[prost(message, optional, tag = "1")]
            pub message: Option<MessageId>,
            #[prost(message, optional, boxed, tag = "2")]
            pub grand_origin: Option<Box<Origin>>,
            #[prost(message, optional, tag = "3")]
            pub actor_context: Option<ActorContext>,
            #[prost(message, optional, tag = "4")]
            pub root: Option<MessageId>,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Schedule {
            #[prost(message, optional, tag = "1")]
            pub delay: Option<Duration>,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct CommandContext {
            #[prost(message, optional, tag = "1")]
            pub actor_context: Option<ActorContext>,
            #[prost(message, optional, tag = "2")]
            pub origin: Option<Origin>,
            #[prost(message, optional, tag = "3")]
            pub schedule: Option<Schedule>,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Command {
            #[prost(message, optional, tag = "1")]
            pub id: Option<CommandId>,
            #[prost(message, optional, tag = "2")]
            pub message: Option<Any>,
            #[prost(message, optional, tag = "3")]
            pub context: Option<CommandContext>,
        }

        /// Details attached to an event that reports a rejected command.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct RejectionEventContext {
            #[prost(message, optional, tag = "1")]
            pub command: Option<Command>,
            #[prost(string, tag = "2")]
            pub stacktrace: String,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct EventContext {
            #[prost(message, optional, tag = "1")]
            pub timestamp: Option<Timestamp>,
            #[prost(message, optional, tag = "2")]
            pub past_message: Option<Origin>,
            #[prost(message, optional, tag = "3")]
            pub producer_id: Option<Any>,
            #[prost(message, optional, tag = "4")]
            pub root_command_id: Option<CommandId>,
            #[prost(message, optional, tag = "5")]
            pub rejection: Option<RejectionEventContext>,
            #[prost(message, optional, tag = "6")]
            pub import_context: Option<ActorContext>,
            #[prost(bool, tag = "7")]
            pub external: bool,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Event {
            #[prost(message, optional, tag = "1")]
            pub id: Option<EventId>,
            #[prost(message, optional, tag = "2")]
            pub message: Option<Any>,
            #[prost(message, optional, tag = "3")]
            pub context: Option<EventContext>,
        }

        /// Wire-friendly report of a failure.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Error {
            #[prost(string, tag = "1")]
            pub r#type: String,
            #[prost(string, tag = "2")]
            pub message: String,
            #[prost(int32, tag = "3")]
            pub code: i32,
        }

        /// Optimistic-concurrency conflict. All three containers box the same kind.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct ValueMismatch {
            #[prost(message, optional, tag = "1")]
            pub expected: Option<Any>,
            #[prost(message, optional, tag = "2")]
            pub actual: Option<Any>,
            #[prost(message, optional, tag = "3")]
            pub new_value: Option<Any>,
            #[prost(int32, tag = "4")]
            pub version: i32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct StringChange {
            #[prost(string, tag = "1")]
            pub previous_value: String,
            #[prost(string, tag = "2")]
            pub new_value: String,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct BytesChange {
            #[prost(bytes = "vec", tag = "1")]
            pub previous_value: Vec<u8>,
            #[prost(bytes = "vec", tag = "2")]
            pub new_value: Vec<u8>,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct TimestampChange {
            #[prost(message, optional, tag = "1")]
            pub previous_value: Option<Timestamp>,
            #[prost(message, optional, tag = "2")]
            pub new_value: Option<Timestamp>,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct BooleanChange {
            #[prost(bool, tag = "1")]
            pub previous_value: bool,
            #[prost(bool, tag = "2")]
            pub new_value: bool,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Message)]
        pub struct DoubleChange {
            #[prost(double, tag = "1")]
            pub previous_value: f64,
            #[prost(double, tag = "2")]
            pub new_value: f64,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Message)]
        pub struct FloatChange {
            #[prost(float, tag = "1")]
            pub previous_value: f32,
            #[prost(float, tag = "2")]
            pub new_value: f32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Int32Change {
            #[prost(int32, tag = "1")]
            pub previous_value: i32,
            #[prost(int32, tag = "2")]
            pub new_value: i32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Int64Change {
            #[prost(int64, tag = "1")]
            pub previous_value: i64,
            #[prost(int64, tag = "2")]
            pub new_value: i64,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct UInt32Change {
            #[prost(uint32, tag = "1")]
            pub previous_value: u32,
            #[prost(uint32, tag = "2")]
            pub new_value: u32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct UInt64Change {
            #[prost(uint64, tag = "1")]
            pub previous_value: u64,
            #[prost(uint64, tag = "2")]
            pub new_value: u64,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct SInt32Change {
            #[prost(sint32, tag = "1")]
            pub previous_value: i32,
            #[prost(sint32, tag = "2")]
            pub new_value: i32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct SInt64Change {
            #[prost(sint64, tag = "1")]
            pub previous_value: i64,
            #[prost(sint64, tag = "2")]
            pub new_value: i64,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Fixed32Change {
            #[prost(fixed32, tag = "1")]
            pub previous_value: u32,
            #[prost(fixed32, tag = "2")]
            pub new_value: u32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct Fixed64Change {
            #[prost(fixed64, tag = "1")]
            pub previous_value: u64,
            #[prost(fixed64, tag = "2")]
            pub new_value: u64,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct SFixed32Change {
            #[prost(sfixed32, tag = "1")]
            pub previous_value: i32,
            #[prost(sfixed32, tag = "2")]
            pub new_value: i32,
        }

        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, PartialEq, Eq, Message)]
        pub struct SFixed64Change {
            #[prost(sfixed64, tag = "1")]
            pub previous_value: i64,
            #[prost(sfixed64, tag = "2")]
            pub new_value: i64,
        }

        impl_name!("signal.v1" =>
            TenantId,
            UserId,
            ZoneOffset,
            ActorContext,
            CommandId,
            EventId,
            MessageId,
            Origin,
            Schedule,
            CommandContext,
            Command,
            RejectionEventContext,
            EventContext,
            Event,
            Error,
            ValueMismatch,
            StringChange,
            BytesChange,
            TimestampChange,
            BooleanChange,
            DoubleChange,
            FloatChange,
            Int32Change,
            Int64Change,
            UInt32Change,
            UInt64Change,
            SInt32Change,
            SInt64Change,
            Fixed32Change,
            Fixed64Change,
            SFixed32Change,
            SFixed64Change,
        );
    }
}

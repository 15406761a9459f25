#![forbid(unsafe_code)]

use prost::Message;

/// Wire bytes of a message packed into `Any`. prost writes fields in tag
/// order, and none of the signal messages carry map fields.
pub fn encode_deterministic<M: Message>(msg: &M) -> Vec<u8> {
    msg.encode_to_vec()
}

/// Presence predicate for wire messages: a message equal to its default
/// instance carries no information and is treated as absent.
pub trait IsDefault {
    fn is_default(&self) -> bool;

    fn is_not_default(&self) -> bool {
        !self.is_default()
    }
}

impl<M: Message + Default + PartialEq> IsDefault for M {
    fn is_default(&self) -> bool {
        *self == M::default()
    }
}

/// Keep `value` only when it is present and not structurally default.
pub fn non_default<M: IsDefault>(value: Option<&M>) -> Option<&M> {
    value.filter(|inner| inner.is_not_default())
}

#![forbid(unsafe_code)]

//! Read-side view over commands and events.
//!
//! Both signal kinds expose their raw fields through [`Signal`]; tenant, root
//! and origin resolution are derived from those fields once, in the trait's
//! provided methods. Command- and event-only accessors live in
//! [`CommandSignal`] and [`EventSignal`].

use common::non_default;
use log::warn;
use packer::{pack_message, unpack_message, UnpackError};
use prost::{Message, Name};
use signal_protocol::google::protobuf::{Any, Duration, Timestamp};
use signal_protocol::signal::v1::{
    ActorContext, Command, CommandContext, CommandId, Event, EventContext, EventId, MessageId,
    Origin, RejectionEventContext, TenantId,
};
use thiserror::Error;

pub mod errors;
pub mod origin;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SignalError {
    #[error("required value is missing: {0}")]
    NullReference(&'static str),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error(transparent)]
    Unpack(#[from] UnpackError),
}

/// An identified message plus the context it was issued in.
pub trait Signal {
    type Id: Message + Name + Default + Clone + PartialEq;

    fn signal_id(&self) -> Result<&Self::Id, SignalError>;

    /// The packed command or event message.
    fn payload(&self) -> Result<&Any, SignalError>;

    fn actor_context(&self) -> Result<&ActorContext, SignalError>;

    fn time(&self) -> Result<&Timestamp, SignalError>;

    /// Origin exactly as stored, empty or not.
    fn raw_origin(&self) -> Option<&Origin>;

    /// Tenant the signal belongs to. Single-tenant signals report the default id.
    fn tenant(&self) -> Result<TenantId, SignalError> {
        Ok(self.actor_context()?.tenant_id.clone().unwrap_or_default())
    }

    /// The causal parent, unless the stored origin is absent or empty.
    fn origin(&self) -> Option<&Origin> {
        non_default(self.raw_origin())
    }

    fn message_id(&self) -> Result<MessageId, SignalError> {
        Ok(MessageId {
            id: Some(pack_message(self.signal_id()?)),
            type_url: self.payload()?.type_url.clone(),
        })
    }

    /// First signal of the causal chain. Reads the precomputed `root` of the
    /// origin and falls back to this signal's own id.
    fn root_message(&self) -> Result<MessageId, SignalError> {
        match self.origin().and_then(|origin| non_default(origin.root.as_ref())) {
            Some(root) => Ok(root.clone()),
            None => self.message_id(),
        }
    }

    fn enclosed_message<M: Message + Name + Default>(&self) -> Result<M, SignalError> {
        Ok(unpack_message(self.payload()?)?)
    }
}

pub trait CommandSignal: Signal {
    fn context(&self) -> Result<&CommandContext, SignalError>;

    /// Delivery delay, if one was requested.
    fn schedule_delay(&self) -> Option<&Duration>;

    /// Whether delivery is postponed. A requested delay of zero or fewer whole
    /// seconds breaks the scheduling contract and is reported as an error.
    fn is_scheduled(&self) -> Result<bool, SignalError>;
}

pub trait EventSignal: Signal {
    fn context(&self) -> Result<&EventContext, SignalError>;

    fn is_rejection(&self) -> bool;

    fn rejection(&self) -> Option<&RejectionEventContext>;

    /// Command that started the chain, when the producer recorded it.
    fn root_command_id(&self) -> Option<&CommandId>;

    fn is_external(&self) -> bool;
}

impl Signal for Command {
    type Id = CommandId;

    fn signal_id(&self) -> Result<&CommandId, SignalError> {
        self.id.as_ref().ok_or(SignalError::NullReference("id"))
    }

    fn payload(&self) -> Result<&Any, SignalError> {
        self.message
            .as_ref()
            .ok_or(SignalError::NullReference("message"))
    }

    fn actor_context(&self) -> Result<&ActorContext, SignalError> {
        CommandSignal::context(self)?
            .actor_context
            .as_ref()
            .ok_or(SignalError::NullReference("actor_context"))
    }

    fn time(&self) -> Result<&Timestamp, SignalError> {
        self.actor_context()?
            .timestamp
            .as_ref()
            .ok_or(SignalError::NullReference("timestamp"))
    }

    fn raw_origin(&self) -> Option<&Origin> {
        self.context.as_ref()?.origin.as_ref()
    }
}

impl CommandSignal for Command {
    fn context(&self) -> Result<&CommandContext, SignalError> {
        self.context
            .as_ref()
            .ok_or(SignalError::NullReference("context"))
    }

    fn schedule_delay(&self) -> Option<&Duration> {
        let schedule = self.context.as_ref()?.schedule.as_ref()?;
        non_default(schedule.delay.as_ref())
    }

    fn is_scheduled(&self) -> Result<bool, SignalError> {
        let Some(delay) = self.schedule_delay() else {
            return Ok(false);
        };

        if delay.seconds <= 0 {
            warn!(
                "command {:?} carries a non-positive delay of {}s",
                self.id.as_ref().map(|id| id.uuid.as_str()),
                delay.seconds
            );
            return Err(SignalError::InvalidState(format!(
                "command delay seconds must be positive, got {}",
                delay.seconds
            )));
        }
        Ok(true)
    }
}

impl Signal for Event {
    type Id = EventId;

    fn signal_id(&self) -> Result<&EventId, SignalError> {
        self.id.as_ref().ok_or(SignalError::NullReference("id"))
    }

    fn payload(&self) -> Result<&Any, SignalError> {
        self.message
            .as_ref()
            .ok_or(SignalError::NullReference("message"))
    }

    /// Taken from the origin for produced events and from the import context
    /// for imported ones.
    fn actor_context(&self) -> Result<&ActorContext, SignalError> {
        let context = EventSignal::context(self)?;
        context
            .past_message
            .as_ref()
            .and_then(|origin| origin.actor_context.as_ref())
            .or(context.import_context.as_ref())
            .ok_or(SignalError::NullReference("actor_context"))
    }

    fn time(&self) -> Result<&Timestamp, SignalError> {
        EventSignal::context(self)?
            .timestamp
            .as_ref()
            .ok_or(SignalError::NullReference("timestamp"))
    }

    fn raw_origin(&self) -> Option<&Origin> {
        self.context.as_ref()?.past_message.as_ref()
    }
}

impl EventSignal for Event {
    fn context(&self) -> Result<&EventContext, SignalError> {
        self.context
            .as_ref()
            .ok_or(SignalError::NullReference("context"))
    }

    fn is_rejection(&self) -> bool {
        self.rejection().is_some()
    }

    fn rejection(&self) -> Option<&RejectionEventContext> {
        self.context.as_ref()?.rejection.as_ref()
    }

    fn root_command_id(&self) -> Option<&CommandId> {
        non_default(self.context.as_ref()?.root_command_id.as_ref())
    }

    fn is_external(&self) -> bool {
        self.context.as_ref().is_some_and(|context| context.external)
    }
}

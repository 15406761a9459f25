//! Causal chain bookkeeping.

use crate::{Signal, SignalError};
use common::non_default;
use signal_protocol::signal::v1::{MessageId, Origin};

/// Most origins kept in one chain, the immediate parent included. Older
/// ancestry is dropped; the root id is carried separately and survives.
pub const MAX_RECORDED_ANCESTRY: usize = 8;

/// Origin for a signal produced in response to `cause`.
///
/// The root id is copied forward so that [`Signal::root_message`] never walks
/// the chain.
pub fn derive_from<S: Signal>(cause: &S) -> Result<Origin, SignalError> {
    Ok(Origin {
        message: Some(cause.message_id()?),
        grand_origin: cause
            .origin()
            .and_then(|origin| truncated(origin, MAX_RECORDED_ANCESTRY - 1)),
        actor_context: Some(cause.actor_context()?.clone()),
        root: Some(cause.root_message()?),
    })
}

fn truncated(origin: &Origin, links: usize) -> Option<Box<Origin>> {
    if links == 0 {
        return None;
    }
    Some(Box::new(Origin {
        message: origin.message.clone(),
        grand_origin: non_default(origin.grand_origin.as_deref())
            .and_then(|grand| truncated(grand, links - 1)),
        actor_context: origin.actor_context.clone(),
        root: origin.root.clone(),
    }))
}

/// Number of non-empty origins reachable from `origin`, itself included.
pub fn depth(origin: &Origin) -> usize {
    let mut depth = 0;
    let mut current = non_default(Some(origin));
    while let Some(link) = current {
        depth += 1;
        current = non_default(link.grand_origin.as_deref());
    }
    depth
}

/// Id of the signal this origin points at.
pub fn parent(origin: &Origin) -> Option<&MessageId> {
    non_default(origin.message.as_ref())
}

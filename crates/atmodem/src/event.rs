//! Events raised toward higher-level consumers.
//!
//! The parsers do not own a callback registry or a queue; they hand each
//! event to whatever [`Dispatch`] implementation the caller passes in, on
//! the caller's thread, while the caller still holds the core lock. Whether
//! an event is raised at all is controlled per parser call by a `report`
//! flag, so a polled invocation can suppress the duplicate a subsequent
//! unsolicited line would produce.

use crate::{
    memory::MemorySelector,
    types::{CallEntry, SimState},
};

/// A state change observed while parsing a response.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// SIM readiness changed.
    SimStateChanged(SimState),
    /// The current call record was updated. The reference points into the
    /// shared [`DeviceState`](crate::DeviceState), so it reflects only the
    /// latest call.
    CallChanged(&'a CallEntry),
    /// An outgoing SMS was accepted, with its storage position.
    SmsSent {
        /// Storage index of the sent message.
        pos: i32,
    },
    /// A new SMS arrived.
    SmsReceived {
        /// Storage area holding the message.
        mem: MemorySelector,
        /// Position within that storage area.
        pos: i32,
    },
}

/// Receiver for parser events and collaborator requests.
///
/// Implemented by the command-lifecycle layer; a trivial implementation for
/// callers that poll state instead is [`NullDispatch`].
pub trait Dispatch {
    /// Delivers one event. Called synchronously from the parser, with the
    /// core lock still held; implementations should enqueue and return.
    fn dispatch(&mut self, event: Event<'_>);

    /// Asks the command layer to refresh basic SIM information. Invoked
    /// once whenever the SIM transitions to ready.
    fn request_sim_info(&mut self) {}
}

/// A [`Dispatch`] that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDispatch;

impl Dispatch for NullDispatch {
    fn dispatch(&mut self, _event: Event<'_>) {}
}

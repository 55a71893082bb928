//! Cross-module tests: receive-path flows through the public API and
//! property tests over generated input.

mod properties;

use std::vec::Vec;

use crate::{CallEntry, Dispatch, Event, MemorySelector, SimState};

/// Owned copy of one dispatched event, so tests can assert on sequences
/// after the borrow into `DeviceState` has ended.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Seen {
    Sim(SimState),
    Call(CallEntry),
    SmsSent(i32),
    SmsReceived(MemorySelector, i32),
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub seen: Vec<Seen>,
    pub sim_info_requests: usize,
}

impl Dispatch for Recorder {
    fn dispatch(&mut self, event: Event<'_>) {
        self.seen.push(match event {
            Event::SimStateChanged(s) => Seen::Sim(s),
            Event::CallChanged(c) => Seen::Call(c.clone()),
            Event::SmsSent { pos } => Seen::SmsSent(pos),
            Event::SmsReceived { mem, pos } => Seen::SmsReceived(mem, pos),
        });
    }

    fn request_sim_info(&mut self) {
        self.sim_info_requests += 1;
    }
}

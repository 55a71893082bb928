//! A streaming, incremental AT response parser for cellular modems.
//!
//! This crate is the response side of a GSM modem driver: it turns the text
//! lines and byte streams a modem emits on its AT command port into typed
//! values, keeps a shared [`DeviceState`] mirror up to date, and raises
//! [`Event`]s toward the command-lifecycle layer. The transport that frames
//! lines, the mailbox that tracks in-flight commands, and the lock guarding
//! shared state all live outside; this crate is pure computation over
//! caller-owned buffers. It never allocates, never blocks and never
//! panics on malformed input: a modem is an untrusted, occasionally noisy
//! peer, and the worst it can achieve here is a zero value or a truncated
//! name.
//!
//! # Examples
//!
//! ```rust
//! use atmodem::{DeviceState, NullDispatch, SimState, response};
//!
//! let mut state = DeviceState::new();
//! response::parse_cpin("+CPIN: SIM PIN", &mut state, &mut NullDispatch, false);
//! assert_eq!(state.sim_state, SimState::PinRequired);
//! ```
//!
//! Responses whose size is unknown in advance are parsed incrementally,
//! one byte at a time, against caller-owned output:
//!
//! ```rust
//! use atmodem::{OperatorEntry, OperatorScanner};
//!
//! let mut scanner = OperatorScanner::new();
//! let mut found: [OperatorEntry; 8] = Default::default();
//! let mut count = 0;
//!
//! scanner.reset();
//! for byte in b"(2,\"Long Op\",\"LO\",20801),(1,\"Other\",\"OT\",20802)" {
//!     scanner.feed(*byte, &mut found, &mut count);
//! }
//! assert_eq!(count, 2);
//! assert_eq!(found[0].long_name.as_str(), "Long Op");
//! ```

#![no_std]
#![allow(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod cursor;
mod error;
mod event;
pub mod memory;
pub mod response;
mod scanner;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, MacAddr};
pub use error::Error;
pub use event::{Dispatch, Event, NullDispatch};
pub use memory::{MemoryMap, MemoryMask, MemorySelector};
pub use response::ResponseKind;
pub use scanner::OperatorScanner;
pub use state::{
    DeviceState, SMS_STORAGE_READ, SMS_STORAGE_RECEIVE, SMS_STORAGE_WRITE,
};
pub use types::{
    CallDir, CallEntry, CallState, CallType, OperatorEntry, OperatorStatus, SimState, SmsEntry,
    SmsStatus,
};

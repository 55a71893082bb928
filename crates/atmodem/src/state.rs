//! The shared device-state model.
//!
//! One [`DeviceState`] mirrors the modem-side state the parsers keep up to
//! date: SIM readiness, the current call, and the storage bitmasks from the
//! last `+CPMS:`/`+CPBS:` reports. The receive path owns the only `&mut`
//! while parsing; any other thread that reads or writes these fields must
//! hold the same external lock the receive path holds around its parser
//! calls. The crate itself never locks: `&mut DeviceState` in a parser
//! signature *is* the "lock held" precondition.

use crate::{
    memory::MemoryMask,
    types::{CallEntry, SimState},
};

/// Index into [`DeviceState::sms_storage`]: storage used to read and delete.
pub const SMS_STORAGE_READ: usize = 0;
/// Index into [`DeviceState::sms_storage`]: storage used to write and send.
pub const SMS_STORAGE_WRITE: usize = 1;
/// Index into [`DeviceState::sms_storage`]: storage receiving new messages.
pub const SMS_STORAGE_RECEIVE: usize = 2;

/// Parser-maintained mirror of modem state.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceState {
    /// SIM readiness, written by the `+CPIN` parser.
    pub sim_state: SimState,
    /// The current call, overwritten per `+CLCC` line.
    pub call: CallEntry,
    /// Available SMS storages for the read, write and receive slots of the
    /// preferred-storage report.
    pub sms_storage: [MemoryMask; 3],
    /// Available phonebook storages.
    pub phonebook_storage: MemoryMask,
}

impl DeviceState {
    /// Creates a state model with nothing known yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

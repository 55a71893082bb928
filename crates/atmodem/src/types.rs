//! Typed values produced by the response parsers.
//!
//! Everything here is fixed-size: string fields are `heapless` buffers with
//! capacities chosen for the worst case the relevant 3GPP responses can
//! carry, so a record never allocates and a hostile peer can at most
//! truncate a name. Numeric codes the modem reports outside their defined
//! range decode to an `Unknown`/`Other` catch-all instead of failing.

use heapless::String;

use crate::memory::MemorySelector;

/// Capacity of a call or SMS peer number, digits plus `+` prefix.
pub const NUMBER_CAPACITY: usize = 26;
/// Capacity of a phonebook-resolved caller name.
pub const NAME_CAPACITY: usize = 20;
/// Capacity of an operator's long alphanumeric name.
pub const OPERATOR_LONG_NAME_CAPACITY: usize = 20;
/// Capacity of an operator's short alphanumeric name.
pub const OPERATOR_SHORT_NAME_CAPACITY: usize = 10;

/// SIM card readiness as reported by `+CPIN`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimState {
    /// SIM is ready for use.
    Ready,
    /// SIM is present but not yet usable; also the fallback for
    /// unrecognized status text.
    #[default]
    NotReady,
    /// No SIM in the socket.
    NotInserted,
    /// SIM is waiting for its PIN.
    PinRequired,
    /// SIM is blocked and waiting for the PUK.
    PukRequired,
}

/// Storage state of an SMS record.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmsStatus {
    /// Received, not yet read.
    Unread,
    /// Received and read.
    Read,
    /// Composed, not yet sent.
    Unsent,
    /// Sent.
    Sent,
    /// Wildcard used when listing; also the sentinel a failed status parse
    /// resolves to, which is why it never comes back as a success value.
    #[default]
    All,
}

/// One SMS record, owned by the caller of a read or list operation.
///
/// The parser fills `status` and `number`; `mem` and `pos` are set by the
/// command layer that issued the read. Date and time of the record are not
/// parsed yet.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SmsEntry {
    /// Storage area the record lives in.
    pub mem: MemorySelector,
    /// Position within the storage area.
    pub pos: usize,
    /// Record state.
    pub status: SmsStatus,
    /// Sender or recipient number.
    pub number: String<NUMBER_CAPACITY>,
}

/// Direction of a call.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallDir {
    /// Outgoing, originated by this device.
    #[default]
    MobileOriginated,
    /// Incoming.
    MobileTerminated,
    /// Direction code outside the defined range.
    Unknown(u8),
}

impl From<i32> for CallDir {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(v: i32) -> Self {
        match v {
            0 => Self::MobileOriginated,
            1 => Self::MobileTerminated,
            _ => Self::Unknown(v as u8),
        }
    }
}

/// Progress state of a call.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallState {
    /// Connected and active.
    Active,
    /// On hold.
    Held,
    /// Outgoing, dialing.
    Dialing,
    /// Outgoing, remote end ringing.
    Alerting,
    /// Incoming, local end ringing.
    Incoming,
    /// Incoming, waiting behind an active call.
    Waiting,
    /// No call in progress.
    #[default]
    Disconnected,
    /// State code outside the defined range.
    Unknown(u8),
}

impl From<i32> for CallState {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(v: i32) -> Self {
        match v {
            0 => Self::Active,
            1 => Self::Held,
            2 => Self::Dialing,
            3 => Self::Alerting,
            4 => Self::Incoming,
            5 => Self::Waiting,
            6 => Self::Disconnected,
            _ => Self::Unknown(v as u8),
        }
    }
}

/// Bearer type of a call.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallType {
    /// Voice call.
    #[default]
    Voice,
    /// Data call.
    Data,
    /// Fax call.
    Fax,
    /// Type code outside the defined range.
    Unknown(u8),
}

impl From<i32> for CallType {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(v: i32) -> Self {
        match v {
            0 => Self::Voice,
            1 => Self::Data,
            2 => Self::Fax,
            _ => Self::Unknown(v as u8),
        }
    }
}

/// The current call, as last reported by `+CLCC`.
///
/// Lives in [`DeviceState`](crate::DeviceState) and is overwritten in place
/// on every call-status line, so it is valid only until the next update or
/// call termination.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallEntry {
    /// Call identifier assigned by the modem.
    pub id: i32,
    /// Call direction.
    pub dir: CallDir,
    /// Call progress state.
    pub state: CallState,
    /// Bearer type.
    pub kind: CallType,
    /// Whether the call is part of a multiparty conference.
    pub is_multiparty: bool,
    /// Remote party number.
    pub number: String<NUMBER_CAPACITY>,
    /// Number address type (129 national, 145 international).
    pub addr_type: i32,
    /// Remote party name from the phonebook, when resolved.
    pub name: String<NAME_CAPACITY>,
}

/// Network registration status of a scanned operator.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    /// Status not known.
    Unknown,
    /// Operator available for registration.
    Available,
    /// Operator currently registered.
    Current,
    /// Registration forbidden.
    Forbidden,
    /// Status code outside the defined range.
    Other(u32),
}

impl From<u32> for OperatorStatus {
    fn from(v: u32) -> Self {
        match v {
            0 => Self::Unknown,
            1 => Self::Available,
            2 => Self::Current,
            3 => Self::Forbidden,
            _ => Self::Other(v),
        }
    }
}

/// One operator record from a `+COPS=?` network scan.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperatorEntry {
    /// Raw status code, accumulated digit by digit during the scan.
    pub stat: u32,
    /// Long alphanumeric operator name.
    pub long_name: String<OPERATOR_LONG_NAME_CAPACITY>,
    /// Short alphanumeric operator name.
    pub short_name: String<OPERATOR_SHORT_NAME_CAPACITY>,
    /// Numeric operator id (MCC/MNC).
    pub num: u32,
}

impl OperatorEntry {
    /// Decodes the raw status code.
    #[must_use]
    pub fn status(&self) -> OperatorStatus {
        OperatorStatus::from(self.stat)
    }
}

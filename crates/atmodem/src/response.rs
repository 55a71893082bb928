//! Line-oriented semantic parsers, one per `+NAME:` response.
//!
//! The transport hands each parser a complete response line. A leading `+`
//! triggers the fixed [`PREFIX_LEN`]-byte skip past the `+NAME: ` header;
//! the skip is unconditional on seeing `+`, so a caller routing lines here
//! must have matched the prefix first (see [`ResponseKind::of_line`]).
//! Everything after that is driven through the tokenizers in
//! [`cursor`](crate::cursor) and [`memory`](crate::memory), with results
//! written into the shared [`DeviceState`] or a caller-supplied record and
//! events raised through the caller's [`Dispatch`].

use heapless::String;

use crate::{
    cursor::Cursor,
    error::Error,
    event::{Dispatch, Event},
    memory::{MemoryMap, parse_memory, parse_memory_list},
    state::DeviceState,
    types::{CallDir, CallState, CallType, SimState, SmsEntry, SmsStatus},
};

/// Width of a `+NAME: ` response header, e.g. `"+CPIN: "`.
pub const PREFIX_LEN: usize = 7;

/// Longest defined SMS status literal, `REC UNREAD`.
const SMS_STATUS_TOKEN_CAPACITY: usize = 10;

/// The response lines this crate knows how to parse.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// `+CPIN:` SIM readiness.
    SimStatus,
    /// `+CLCC:` current call status.
    CallStatus,
    /// `+CMGS:` sent-SMS acknowledgment.
    SmsSent,
    /// `+CMGR:` SMS record read-back.
    SmsRead,
    /// `+CMTI:` new-SMS notification.
    SmsReceived,
    /// `+CPMS:` preferred SMS storage report.
    PreferredStorage,
    /// `+CPBS:` phonebook storage report.
    PhonebookStorage,
    /// `+COPS:` operator scan, fed byte-wise to the
    /// [`OperatorScanner`](crate::OperatorScanner) instead of a line parser.
    OperatorScan,
}

impl ResponseKind {
    const PREFIXES: &'static [(&'static [u8], ResponseKind)] = &[
        (b"+CPIN:", ResponseKind::SimStatus),
        (b"+CLCC:", ResponseKind::CallStatus),
        (b"+CMGS:", ResponseKind::SmsSent),
        (b"+CMGR:", ResponseKind::SmsRead),
        (b"+CMTI:", ResponseKind::SmsReceived),
        (b"+CPMS:", ResponseKind::PreferredStorage),
        (b"+CPBS:", ResponseKind::PhonebookStorage),
        (b"+COPS:", ResponseKind::OperatorScan),
    ];

    /// Recognizes the `+NAME:` prefix of a complete response line.
    ///
    /// Unrecognized lines yield `None`, never an error: a modem is free to
    /// emit notifications this driver does not consume.
    #[must_use]
    pub fn of_line(line: &str) -> Option<Self> {
        let bytes = line.as_bytes();
        Self::PREFIXES
            .iter()
            .find(|&&(prefix, _)| bytes.starts_with(prefix))
            .map(|&(_, kind)| kind)
    }
}

/// Skips the `+NAME: ` header when present.
fn body(line: &[u8]) -> &[u8] {
    if line.first() == Some(&b'+') {
        line.get(PREFIX_LEN..).unwrap_or(&[])
    } else {
        line
    }
}

/// Parses a `+CPIN:` SIM readiness line into `state.sim_state`.
///
/// Status phrases are matched by prefix in priority order; anything
/// unrecognized degrades to [`SimState::NotReady`]. A transition to ready
/// asks the command layer for SIM info exactly once; `report` gates the
/// [`Event::SimStateChanged`] notification.
pub fn parse_cpin<D: Dispatch>(line: &str, state: &mut DeviceState, dispatch: &mut D, report: bool) {
    let text = body(line.as_bytes());
    state.sim_state = if text.starts_with(b"READY") {
        SimState::Ready
    } else if text.starts_with(b"NOT READY") {
        SimState::NotReady
    } else if text.starts_with(b"NOT INSERTED") {
        SimState::NotInserted
    } else if text.starts_with(b"SIM PIN") {
        SimState::PinRequired
    } else if text.starts_with(b"PIN PUK") {
        SimState::PukRequired
    } else {
        SimState::NotReady
    };

    if state.sim_state == SimState::Ready {
        dispatch.request_sim_info();
    }
    if report {
        dispatch.dispatch(Event::SimStateChanged(state.sim_state));
    }
}

/// Parses a `+CLCC:` call status line into `state.call`.
///
/// The entry is overwritten in place; the optional [`Event::CallChanged`]
/// borrows it, so subscribers always observe the latest call.
pub fn parse_clcc<D: Dispatch>(line: &str, state: &mut DeviceState, dispatch: &mut D, report: bool) {
    let mut cur = Cursor::new(body(line.as_bytes()));

    state.call.id = cur.parse_number();
    state.call.dir = CallDir::from(cur.parse_number());
    state.call.state = CallState::from(cur.parse_number());
    state.call.kind = CallType::from(cur.parse_number());
    state.call.is_multiparty = cur.parse_number() != 0;
    cur.parse_string(&mut state.call.number, true);
    state.call.addr_type = cur.parse_number();
    cur.parse_string(&mut state.call.name, true);

    if report {
        dispatch.dispatch(Event::CallChanged(&state.call));
    }
}

/// Parses a `+CMGS:` acknowledgment carrying the storage index of the SMS
/// that was just sent.
pub fn parse_cmgs<D: Dispatch>(line: &str, dispatch: &mut D, report: bool) {
    let mut cur = Cursor::new(body(line.as_bytes()));
    let pos = cur.parse_number();
    if report {
        dispatch.dispatch(Event::SmsSent { pos });
    }
}

/// Parses a `+CMGR:` record header into the entry supplied by the read or
/// list operation in flight.
///
/// A failed status match leaves `entry.status` untouched. The third field
/// is consumed but discarded; it is reserved for the record's date and
/// time, which are not parsed yet.
pub fn parse_cmgr(line: &str, entry: &mut SmsEntry) {
    let mut cur = Cursor::new(body(line.as_bytes()));
    if let Ok(status) = parse_sms_status(&mut cur) {
        entry.status = status;
    }
    cur.parse_string(&mut entry.number, true);
    cur.skip_string();
}

/// Parses one quoted SMS status token.
///
/// The cursor advances past the token whether or not it matches, so a
/// failed parse still leaves the caller positioned on the next field.
///
/// # Errors
///
/// [`Error::InvalidSmsStatus`] when the token matches none of the defined
/// literals; the [`SmsStatus::All`] sentinel is never returned as a
/// success.
pub fn parse_sms_status(cur: &mut Cursor<'_>) -> Result<SmsStatus, Error> {
    let mut token: String<SMS_STATUS_TOKEN_CAPACITY> = String::new();
    cur.parse_string(&mut token, true);
    match token.as_str() {
        "REC UNREAD" => Ok(SmsStatus::Unread),
        "REC READ" => Ok(SmsStatus::Read),
        "STO UNSENT" => Ok(SmsStatus::Unsent),
        "REC SENT" => Ok(SmsStatus::Sent),
        _ => Err(Error::InvalidSmsStatus),
    }
}

/// Parses a `+CMTI:` new-SMS notification, raising
/// [`Event::SmsReceived`] with the storage area and position when `report`
/// is set.
pub fn parse_cmti<D: Dispatch>(line: &str, map: MemoryMap<'_>, dispatch: &mut D, report: bool) {
    let mut cur = Cursor::new(body(line.as_bytes()));
    let mem = parse_memory(&mut cur, map);
    let pos = cur.parse_number();
    if report {
        dispatch.dispatch(Event::SmsReceived { mem, pos });
    }
}

/// Parses a `+CPMS:` preferred-storage report: three storage lists into the
/// read, write and receive slots of `state.sms_storage`.
///
/// # Errors
///
/// Stops at the first list that fails to parse and propagates
/// [`Error::MissingStorageList`] without touching the remaining slots.
pub fn parse_cpms(line: &str, map: MemoryMap<'_>, state: &mut DeviceState) -> Result<(), Error> {
    let mut cur = Cursor::new(body(line.as_bytes()));
    for slot in &mut state.sms_storage {
        *slot = parse_memory_list(&mut cur, map)?;
    }
    Ok(())
}

/// Parses a `+CPBS:` phonebook-storage report: one storage list.
///
/// # Errors
///
/// [`Error::MissingStorageList`] when the line carries no list.
pub fn parse_cpbs(line: &str, map: MemoryMap<'_>, state: &mut DeviceState) -> Result<(), Error> {
    let mut cur = Cursor::new(body(line.as_bytes()));
    state.phonebook_storage = parse_memory_list(&mut cur, map)?;
    Ok(())
}

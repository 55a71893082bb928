//! Storage selectors and the memory-name tokenizer.
//!
//! Modems report their SMS and phonebook storage areas as short quoted names
//! such as `"SM"` or `"ME"`. Which names a given modem emits, and what they
//! mean, is device-specific, so the name-to-selector mapping is supplied by
//! the device layer as an ordered table rather than hardcoded here. The
//! first table entry whose name is a prefix of the input wins; devices with
//! overlapping names order their table accordingly.
//!
//! Parenthesized lists of names, as produced by the `+CPMS:`/`+CPBS:`
//! storage reports, fold into a [`MemoryMask`] with one bit per selector
//! ordinal.

use crate::{cursor::Cursor, error::Error};

/// One of the fixed storage areas a modem can address.
///
/// The ordinal values are the bit positions used by [`MemoryMask`] and are
/// part of the crate's contract with the device tables.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MemorySelector {
    /// Name did not match any table entry.
    #[default]
    Unknown = 0,
    /// SIM card storage (`"SM"`).
    Sim = 1,
    /// Modem-internal storage (`"ME"`).
    Phone = 2,
    /// Combined SIM and modem storage (`"MT"`).
    SimPhone = 3,
    /// Broadcast message storage (`"BM"`).
    Broadcast = 4,
    /// Status report storage (`"SR"`).
    StatusReport = 5,
    /// Whichever storage is currently selected on the device.
    Current = 6,
}

impl MemorySelector {
    /// The selector's bit within a [`MemoryMask`].
    #[must_use]
    pub const fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Availability bitmask over [`MemorySelector`] ordinals.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryMask(u32);

impl MemoryMask {
    /// Mask with no selectors set.
    pub const EMPTY: Self = Self(0);

    /// Marks `selector` as available.
    pub fn insert(&mut self, selector: MemorySelector) {
        self.0 |= selector.bit();
    }

    /// Whether `selector` is marked available.
    #[must_use]
    pub const fn contains(self, selector: MemorySelector) -> bool {
        self.0 & selector.bit() != 0
    }

    /// The raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl From<MemoryMask> for u32 {
    fn from(mask: MemoryMask) -> Self {
        mask.bits()
    }
}

/// Device-supplied table mapping storage names to selectors, in match order.
pub type MemoryMap<'a> = &'a [(&'a str, MemorySelector)];

/// Parses one storage name such as `"SM"` against the device table.
///
/// Leading comma and quote are skipped. On a match the cursor advances past
/// the matched name; otherwise one quoted token is discarded so the cursor
/// still lands on the next field, and [`MemorySelector::Unknown`] is
/// returned. A trailing quote and one trailing comma are consumed if
/// present, leaving the cursor on the next field.
pub fn parse_memory(cur: &mut Cursor<'_>, map: MemoryMap<'_>) -> MemorySelector {
    cur.eat(b',');
    cur.eat(b'"');

    let mut mem = MemorySelector::Unknown;
    for (name, selector) in map {
        if cur.rest().starts_with(name.as_bytes()) {
            cur.skip(name.len());
            mem = *selector;
            break;
        }
    }

    if mem == MemorySelector::Unknown {
        cur.skip_string();
    }
    cur.eat(b'"');
    cur.eat(b',');
    mem
}

/// Parses a parenthesized storage-name list such as `("SM","ME")` into a
/// bitmask.
///
/// Selectors are OR-ed in one by one until a closing parenthesis or the end
/// of input; unmatched names contribute the [`MemorySelector::Unknown`] bit.
///
/// # Errors
///
/// [`Error::MissingStorageList`] when the input is already exhausted where a
/// list was expected. Later garbage does not fail: like every other
/// tokenizer here, the parse degrades to best-effort values.
pub fn parse_memory_list(cur: &mut Cursor<'_>, map: MemoryMap<'_>) -> Result<MemoryMask, Error> {
    cur.eat(b',');
    cur.eat(b'(');
    if cur.is_empty() {
        return Err(Error::MissingStorageList);
    }

    let mut mask = MemoryMask::EMPTY;
    loop {
        mask.insert(parse_memory(cur, map));
        match cur.peek() {
            None | Some(b')') => break,
            Some(_) => {}
        }
    }
    cur.eat(b')');
    Ok(mask)
}

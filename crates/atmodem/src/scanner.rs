//! Streaming scanner for the `+COPS=?` operator-scan response.
//!
//! An operator scan enumerates every network the modem can hear as a
//! comma-separated list of bracketed records, and the whole response can be
//! larger than any line buffer the transport owns. The scanner therefore
//! runs as an explicit, restartable state machine consuming one byte per
//! call, safe to suspend and resume across IO boundaries: the caller that
//! owns the in-flight command also owns the [`OperatorScanner`] and the
//! output array, resets the scanner before the first byte of a response,
//! and simply stops feeding it to abandon a scan.
//!
//! Two conditions freeze the machine until the next reset: a pair of
//! consecutive commas outside a record, which some devices emit as a
//! trailing empty-list terminator, and a full output array. Frozen means
//! bytes are still consumed, just ignored.

use crate::types::OperatorEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    /// Between records, waiting for an opening bracket.
    #[default]
    Idle,
    /// Inside a bracketed record, filling fields 0 through 3.
    Record,
}

/// Restartable byte-at-a-time parser for operator-scan responses.
///
/// # Examples
///
/// ```rust
/// use atmodem::{OperatorEntry, OperatorScanner, OperatorStatus};
///
/// let mut scanner = OperatorScanner::new();
/// let mut entries: [OperatorEntry; 2] = Default::default();
/// let mut filled = 0;
///
/// scanner.reset();
/// for byte in b"(2,\"Long Op\",\"LO\",20801)" {
///     scanner.feed(*byte, &mut entries, &mut filled);
/// }
/// assert_eq!(filled, 1);
/// assert_eq!(entries[0].status(), OperatorStatus::Current);
/// assert_eq!(entries[0].num, 20801);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperatorScanner {
    state: ScanState,
    /// Latched on two consecutive commas outside a record; cleared only by
    /// [`reset`](Self::reset).
    stopped: bool,
    /// Current field index, 0 through 3.
    field: u8,
    /// Previous byte, for the double-comma latch.
    prev: u8,
}

impl OperatorScanner {
    /// Creates a scanner in its reset state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ScanState::Idle,
            stopped: false,
            field: 0,
            prev: 0,
        }
    }

    /// Returns the scanner to its initial state. Must be called before the
    /// first byte of a new response; calling it again is harmless.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Consumes one byte of the response.
    ///
    /// Completed records land in `entries` in arrival order and bump
    /// `*filled`; once the array is full, or the stop latch has tripped,
    /// further bytes are consumed without effect. Records beyond capacity
    /// are dropped silently; the count is the result, not an error.
    pub fn feed(&mut self, byte: u8, entries: &mut [OperatorEntry], filled: &mut usize) {
        if self.stopped || *filled >= entries.len() {
            return;
        }

        match self.state {
            ScanState::Idle => {
                if byte == b'(' {
                    self.state = ScanState::Record;
                    self.field = 0;
                    entries[*filled] = OperatorEntry::default();
                } else if byte == b',' && self.prev == b',' {
                    self.stopped = true;
                }
            }
            ScanState::Record => {
                if byte == b')' {
                    self.state = ScanState::Idle;
                    self.field = 0;
                    *filled += 1;
                } else if byte == b',' {
                    // Capped: surplus commas in a record are absorbed.
                    if self.field < 3 {
                        self.field += 1;
                    }
                } else if byte != b'"' {
                    let entry = &mut entries[*filled];
                    match self.field {
                        0 => {
                            if byte.is_ascii_digit() {
                                entry.stat = entry
                                    .stat
                                    .wrapping_mul(10)
                                    .wrapping_add(u32::from(byte - b'0'));
                            }
                        }
                        1 => {
                            let _ = entry.long_name.push(char::from(byte));
                        }
                        2 => {
                            let _ = entry.short_name.push(char::from(byte));
                        }
                        _ => {
                            if byte.is_ascii_digit() {
                                entry.num = entry
                                    .num
                                    .wrapping_mul(10)
                                    .wrapping_add(u32::from(byte - b'0'));
                            }
                        }
                    }
                }
            }
        }
        self.prev = byte;

        #[cfg(any(test, feature = "fuzzing"))]
        assert!(self.field <= 3, "internal error: field index out of range");
    }
}

#[cfg(test)]
mod tests {
    use super::OperatorScanner;
    use crate::types::{OperatorEntry, OperatorStatus};

    fn feed_all(
        scanner: &mut OperatorScanner,
        bytes: &[u8],
        entries: &mut [OperatorEntry],
        filled: &mut usize,
    ) {
        for b in bytes {
            scanner.feed(*b, entries, filled);
        }
    }

    #[test]
    fn two_records_end_to_end() {
        let mut scanner = OperatorScanner::new();
        let mut entries = [OperatorEntry::default(), OperatorEntry::default()];
        let mut filled = 0;

        scanner.reset();
        feed_all(
            &mut scanner,
            b"(2,\"Long Op\",\"LO\",20801),(1,\"Other\",\"OT\",20802)",
            &mut entries,
            &mut filled,
        );

        assert_eq!(filled, 2);
        assert_eq!(entries[0].status(), OperatorStatus::Current);
        assert_eq!(entries[0].long_name.as_str(), "Long Op");
        assert_eq!(entries[0].short_name.as_str(), "LO");
        assert_eq!(entries[0].num, 20801);
        assert_eq!(entries[1].status(), OperatorStatus::Available);
        assert_eq!(entries[1].long_name.as_str(), "Other");
        assert_eq!(entries[1].short_name.as_str(), "OT");
        assert_eq!(entries[1].num, 20802);
    }

    #[test]
    fn full_array_keeps_count_and_prior_entries() {
        let mut scanner = OperatorScanner::new();
        let mut entries = [OperatorEntry::default(), OperatorEntry::default()];
        let mut filled = 0;

        scanner.reset();
        feed_all(
            &mut scanner,
            b"(2,\"A\",\"A\",1),(1,\"B\",\"B\",2),(3,\"C\",\"C\",3)",
            &mut entries,
            &mut filled,
        );

        assert_eq!(filled, 2);
        assert_eq!(entries[0].long_name.as_str(), "A");
        assert_eq!(entries[1].long_name.as_str(), "B");
        assert_eq!(entries[1].num, 2);
    }

    #[test]
    fn double_comma_latches_until_reset() {
        let mut scanner = OperatorScanner::new();
        let mut entries: [OperatorEntry; 4] = Default::default();
        let mut filled = 0;

        scanner.reset();
        feed_all(&mut scanner, b"(1,\"A\",\"A\",1),,", &mut entries, &mut filled);
        assert_eq!(filled, 1);

        // Everything after the latch is ignored, brackets included.
        feed_all(&mut scanner, b"(2,\"B\",\"B\",2)", &mut entries, &mut filled);
        assert_eq!(filled, 1);
        assert_eq!(entries[1], OperatorEntry::default());

        scanner.reset();
        feed_all(&mut scanner, b"(2,\"B\",\"B\",2)", &mut entries, &mut filled);
        assert_eq!(filled, 2);
        assert_eq!(entries[1].long_name.as_str(), "B");
    }

    #[test]
    fn surplus_commas_stay_on_last_field() {
        let mut scanner = OperatorScanner::new();
        let mut entries: [OperatorEntry; 1] = Default::default();
        let mut filled = 0;

        scanner.reset();
        feed_all(&mut scanner, b"(1,\"A\",\"A\",20,8,01)", &mut entries, &mut filled);
        assert_eq!(filled, 1);
        // Fields past the fourth fold into the numeric id.
        assert_eq!(entries[0].num, 20801);
    }

    #[test]
    fn long_names_truncate_without_corruption() {
        let mut scanner = OperatorScanner::new();
        let mut entries: [OperatorEntry; 1] = Default::default();
        let mut filled = 0;

        scanner.reset();
        feed_all(
            &mut scanner,
            b"(1,\"An Operator Name Far Too Long To Fit\",\"LONGSHORTNAME\",262)",
            &mut entries,
            &mut filled,
        );
        assert_eq!(filled, 1);
        assert_eq!(entries[0].long_name.as_str(), "An Operator Name Far");
        assert_eq!(entries[0].short_name.as_str(), "LONGSHORTN");
        assert_eq!(entries[0].num, 262);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut scanner = OperatorScanner::new();
        let mut entries: [OperatorEntry; 1] = Default::default();
        let mut filled = 0;

        scanner.reset();
        feed_all(&mut scanner, b"(1,", &mut entries, &mut filled);
        scanner.reset();
        scanner.reset();
        feed_all(&mut scanner, b"(3,\"X\",\"X\",9)", &mut entries, &mut filled);
        assert_eq!(filled, 1);
        assert_eq!(entries[0].stat, 3);
    }
}

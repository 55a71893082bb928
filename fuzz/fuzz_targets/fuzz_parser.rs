#![no_main]
use arbitrary::Arbitrary;
use atmodem::{
    DeviceState, MemorySelector, NullDispatch, OperatorEntry, OperatorScanner, ResponseKind,
    SmsEntry, response,
};
use libfuzzer_sys::fuzz_target;

const MAP: &[(&str, MemorySelector)] = &[
    ("SM", MemorySelector::Sim),
    ("ME", MemorySelector::Phone),
    ("MT", MemorySelector::SimPhone),
    ("BM", MemorySelector::Broadcast),
    ("SR", MemorySelector::StatusReport),
];

/// One fuzzed receive session: a byte stream for the operator scanner,
/// chunked at arbitrary points with occasional mid-stream resets, plus a
/// pile of lines thrown at every semantic parser. Success is the absence of
/// panics; the parsers promise bounded, deterministic degradation on any
/// input.
#[derive(Debug, Arbitrary)]
struct Session<'a> {
    scan_stream: &'a [u8],
    reset_points: Vec<usize>,
    lines: Vec<&'a str>,
}

fuzz_target!(|session: Session<'_>| {
    let mut scanner = OperatorScanner::new();
    let mut entries: [OperatorEntry; 4] = Default::default();
    let mut filled = 0;

    scanner.reset();
    for (i, byte) in session.scan_stream.iter().enumerate() {
        if session.reset_points.contains(&i) {
            scanner.reset();
        }
        scanner.feed(*byte, &mut entries, &mut filled);
        assert!(filled <= entries.len());
    }

    let mut state = DeviceState::new();
    let mut dispatch = NullDispatch;
    let mut entry = SmsEntry::default();
    for line in &session.lines {
        let _ = ResponseKind::of_line(line);
        response::parse_cpin(line, &mut state, &mut dispatch, true);
        response::parse_clcc(line, &mut state, &mut dispatch, true);
        response::parse_cmgs(line, &mut dispatch, true);
        response::parse_cmgr(line, &mut entry);
        response::parse_cmti(line, MAP, &mut dispatch, true);
        let _ = response::parse_cpms(line, MAP, &mut state);
        let _ = response::parse_cpbs(line, MAP, &mut state);
    }
});

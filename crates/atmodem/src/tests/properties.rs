use std::{format, string::String as StdString, vec::Vec};

use quickcheck_macros::quickcheck;

use crate::{Cursor, OperatorEntry, OperatorScanner};

#[quickcheck]
fn decimal_numbers_roundtrip(n: i32) -> bool {
    let text = format!("{n},rest");
    let mut cur = Cursor::new(text.as_bytes());
    cur.parse_number() == n && cur.rest() == b"rest"
}

#[quickcheck]
fn hex_numbers_roundtrip(n: u32) -> bool {
    let text = format!("{n:x},rest");
    let mut cur = Cursor::new(text.as_bytes());
    cur.parse_hex_number() == n && cur.rest() == b"rest"
}

#[quickcheck]
fn trimmed_strings_always_land_after_the_field(content: StdString) -> bool {
    // Quotes and line breaks are field delimiters, everything else is fair
    // game for field content, including commas.
    let cleaned: StdString = content
        .chars()
        .filter(|c| !matches!(c, '"' | '\r' | '\n'))
        .collect();
    let text = format!("\"{cleaned}\",rest");

    let mut cur = Cursor::new(text.as_bytes());
    let mut dst: heapless::String<4> = heapless::String::new();
    cur.parse_string(&mut dst, true);
    cur.rest() == b"rest"
}

#[quickcheck]
fn scanner_survives_arbitrary_bytes(data: Vec<u8>) -> bool {
    let mut scanner = OperatorScanner::new();
    let mut entries: [OperatorEntry; 4] = Default::default();
    let mut filled = 0;

    scanner.reset();
    for b in &data {
        scanner.feed(*b, &mut entries, &mut filled);
    }
    filled <= entries.len()
}

#[quickcheck]
fn scanner_count_is_monotonic_and_bounded(data: Vec<u8>) -> bool {
    let mut scanner = OperatorScanner::new();
    let mut entries: [OperatorEntry; 2] = Default::default();
    let mut filled = 0;

    scanner.reset();
    let mut prev = 0;
    for b in &data {
        scanner.feed(*b, &mut entries, &mut filled);
        if filled < prev || filled > entries.len() {
            return false;
        }
        prev = filled;
    }
    true
}

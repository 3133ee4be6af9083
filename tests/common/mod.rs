#![allow(dead_code)]

use strix::RangeSnapshot;

/// Straightforward model of a range using wide arithmetic, so it can never wrap.
pub fn reference_range(start: u32, end: u32, step: i32) -> Vec<u32> {
    let (start, end, step) = (i64::from(start), i64::from(end), i64::from(step));
    let mut values = Vec::new();
    if step == 0 {
        if start == end {
            values.push(start as u32);
        }
        return values;
    }

    let mut cursor = start;
    while (step > 0 && cursor <= end) || (step < 0 && cursor >= end) {
        values.push(cursor as u32);
        cursor += step;
    }
    values
}

/// Collect everything a snapshot produces.
pub fn collect(start: u32, end: u32, step: i32) -> Vec<u32> {
    RangeSnapshot::new(start, end, step).iter().collect()
}

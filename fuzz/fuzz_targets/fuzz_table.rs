#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|pattern: &[u8]| {
    // Table construction must be total and keep its invariants for
    // arbitrary patterns
    let table = fxm::matcher::ShiftTable::build(pattern);
    assert_eq!(table.len(), pattern.len());

    let shifts = table.shifts();
    if let Some(&first) = shifts.first() {
        assert_eq!(first, 1);
    }

    // A zero shift would stall the scan, and no entry shifts past its
    // own position plus one
    for (k, &shift) in shifts.iter().enumerate() {
        assert!(shift >= 1 && shift <= k + 1);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = serde_json::from_slice::<serde_json::Value>(data) {
        let first = formdef::validate(&doc);
        let second = formdef::validate(&doc);
        assert_eq!(first, second);
        assert_eq!(first.is_valid(), first.errors.is_empty());
    }
});

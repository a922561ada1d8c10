#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Any text either parses or yields a ParseError; a parsed index must
    // serialize and parse again.
    if let Ok(index) = invidx::index::parse_index(data) {
        let text = invidx::index::serialize(&index, 5);
        let _ = invidx::index::parse_index(&text);
    }
});

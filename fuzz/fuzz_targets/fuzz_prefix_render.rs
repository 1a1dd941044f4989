#![no_main]

use libfuzzer_sys::fuzz_target;
use wordlist::prefix::Prefix;
use wordlist::render::LineRenderer;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (index_bytes, rest) = data.split_at(8);
    let index = u64::from_le_bytes(index_bytes.try_into().unwrap_or([0; 8]));

    // Validation must never panic, whatever the input
    let Ok(raw) = std::str::from_utf8(rest) else {
        return;
    };
    let Ok(prefix) = Prefix::parse(raw) else {
        return;
    };

    // A validated prefix never carries a newline, so a line holds exactly one
    let renderer = LineRenderer::new(&prefix, 10_000_000);
    match renderer.render_line(index) {
        Ok(line) => {
            assert_eq!(line.len(), renderer.line_len());
            assert_eq!(line.iter().filter(|&&b| b == b'\n').count(), 1);
        }
        Err(_) => assert!(index >= 10_000_000),
    }
});

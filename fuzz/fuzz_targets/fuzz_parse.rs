#![no_main]
use libfuzzer_sys::fuzz_target;

// Any panic is a finding: the parser must return a code, never crash, and
// the debug assertions inside it check the scratch-empty invariant on every
// exit path. The quoted form routes the same bytes through the string
// decoder's escape handling.
fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = jsonatom::parse(&text);
    let quoted = format!("\"{text}\"");
    let _ = jsonatom::parse(&quoted);
});

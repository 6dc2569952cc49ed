#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let _ = markup::tokenize(input);
    let dom = markup::parse(input);
    let _ = dom::outline(&dom, dom.root(), 256);
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use qetag::{Etag, EtagConfig, EtagEngine, EtagKind, block_count};

fuzz_target!(|data: Vec<u8>| {
    let single = EtagEngine::new(EtagConfig::new(1).unwrap());
    let pooled = EtagEngine::new(EtagConfig::new(4).unwrap());

    let etag = single.compute(&data).unwrap();

    // Verify: routing follows the block count
    let tiny = block_count(data.len() as u64) == 1;
    assert_eq!(etag.kind() == EtagKind::Tiny, tiny);

    // Verify: worker count never changes the result
    assert_eq!(pooled.compute(&data).unwrap(), etag);

    // Verify: fixed-size text that parses back to the same etag
    let text = single.etag_of_bytes(&data).unwrap();
    assert_eq!(text.len(), 28);
    assert_eq!(Etag::from_base64(&text), Some(etag));

    // Verify: string entry point agrees for UTF-8 input
    if let Ok(s) = std::str::from_utf8(&data) {
        assert_eq!(single.etag_of_str(s).unwrap(), text);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use padnum_core::pattern::pad_name;

fuzz_target!(|data: &[u8]| {
    let Some((&width, rest)) = data.split_first() else {
        return;
    };
    let name = String::from_utf8_lossy(rest);
    let width = usize::from(width % 16);

    if let Some(padded) = pad_name(&name, width) {
        assert!(padded.padded.len() >= name.len());
        assert!(padded.padded.ends_with(&padded.remainder));
        assert_eq!(pad_name(&padded.padded, width).unwrap().padded, padded.padded);
    } else {
        assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
    }
});

#![no_main]

use chunkdelta::Delta;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (fingerprint, chunks) = input;
    let delta = Delta::classify(&fingerprint, &chunks);

    assert_eq!(delta.fingerprint, fingerprint);
    assert_eq!(delta.chunks, chunks);

    if chunks.len() <= fingerprint.len() {
        assert!(delta.new.is_empty());
        assert_eq!(delta.deleted, fingerprint[chunks.len()..]);
        assert!(delta.changed.len() <= chunks.len());
    } else {
        assert!(delta.changed.is_empty());
        assert!(delta.deleted.is_empty());
        assert!(!delta.new.is_empty());
        assert!(delta.new.iter().all(|d| chunks.contains(d)));
    }
});

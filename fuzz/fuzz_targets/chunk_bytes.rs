#![no_main]

use bytes::Bytes;
use chunkdelta::{ChunkError, Chunker, MIN_BOUNDARIES, RollingConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let configs = vec![
        RollingConfig::default(),
        RollingConfig::new(8, 5).unwrap(),
        RollingConfig::new(2, 1).unwrap(),
        RollingConfig::default().with_min_window_size(2),
    ];

    for config in configs {
        let chunker = Chunker::new(config);
        let chunking = match chunker.chunk_bytes(&data) {
            Ok(chunking) => chunking,
            Err(ChunkError::ChunkingUnderflow { len, window_size }) => {
                assert_eq!(len, data.len());
                assert_eq!(window_size, config.min_window_size());
                continue;
            }
            Err(e) => panic!("unexpected error: {e}"),
        };

        // Verify: at least two boundaries, parallel and increasing
        assert!(chunking.len() >= MIN_BOUNDARIES);
        assert_eq!(chunking.boundaries.len(), chunking.digests.len());
        assert!(chunking.boundaries.windows(2).all(|w| w[0] < w[1]));
        assert!(chunking.boundaries.iter().all(|&b| b < data.len()));

        // Verify: digests are residues of the prime
        assert!(chunking.digests.iter().all(|&d| u32::from(d) < config.prime()));

        // Verify: spans cover the input
        let spans = chunking.spans(Bytes::from(data.clone()), config.hash_config());
        let total: usize = spans.iter().map(|c| c.len()).sum();
        assert_eq!(total, data.len());

        // Verify: determinism
        assert_eq!(chunker.chunk_bytes(&data).unwrap(), chunking);

        // Verify: identity delta
        let delta = chunker.delta(&chunking.digests, &data).unwrap();
        assert!(delta.is_unchanged());
    }
});

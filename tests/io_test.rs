// Integration tests for the reader/writer boundary
// Tests cover: fingerprint files, delta from files, failing sources

use std::fs::{self, File};
use std::io::{ErrorKind, Read};

use chunkdelta::{ChunkError, Fingerprint, RollingConfig, io};

const ORIGINAL: &[u8] = b"the quick brown fox jumps over the lazy dog";

#[test]
fn test_signature_file_holds_raw_digests() {
    let dir = tempfile::tempdir().unwrap();
    let fingerprint_path = dir.path().join("fingerprint.bin");

    let fingerprint = io::signature(
        ORIGINAL,
        File::create(&fingerprint_path).unwrap(),
        RollingConfig::default(),
    )
    .unwrap();

    let stored = fs::read(&fingerprint_path).unwrap();
    assert_eq!(stored, vec![0, 72, 9, 26, 20, 95, 33, 81, 95, 42]);
    assert_eq!(fingerprint.len(), stored.len());
}

#[test]
fn test_delta_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let fingerprint_path = dir.path().join("fingerprint.bin");
    let modified_path = dir.path().join("modified.txt");
    fs::write(&modified_path, b"the quick brown fox jumps over the lazy dog and sleeps").unwrap();

    io::signature(
        ORIGINAL,
        File::create(&fingerprint_path).unwrap(),
        RollingConfig::default(),
    )
    .unwrap();

    let delta = io::delta(
        File::open(&fingerprint_path).unwrap(),
        File::open(&modified_path).unwrap(),
        RollingConfig::default(),
    )
    .unwrap();

    assert_eq!(delta.new, vec![79, 14, 13]);
    assert!(delta.changed.is_empty());
    assert!(delta.deleted.is_empty());
}

#[test]
fn test_stored_fingerprint_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fingerprint.bin");

    let fingerprint = Fingerprint::from_bytes(&[47, 34, 62, 47, 12, 34, 78, 34, 26]);
    fingerprint.write_to(File::create(&path).unwrap()).unwrap();

    let loaded = Fingerprint::read_from(File::open(&path).unwrap()).unwrap();
    assert_eq!(loaded, fingerprint);
}

/// Yields a prefix of real data, then fails the way a vanished file does.
struct TruncatedReader {
    data: &'static [u8],
}

impl Read for TruncatedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.data.is_empty() {
            return Err(std::io::Error::new(ErrorKind::NotFound, "source removed"));
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn test_delta_surfaces_source_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let fingerprint_path = dir.path().join("fingerprint.bin");
    io::signature(
        ORIGINAL,
        File::create(&fingerprint_path).unwrap(),
        RollingConfig::default(),
    )
    .unwrap();

    let err = io::delta(
        File::open(&fingerprint_path).unwrap(),
        TruncatedReader { data: ORIGINAL },
        RollingConfig::default(),
    )
    .unwrap_err();

    match err {
        ChunkError::Io(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_config_is_applied() {
    let config = RollingConfig::default().with_min_window_size(4);
    let mut stored = Vec::new();
    let err = io::signature(&b"abcdefgh"[..], &mut stored, config).unwrap_err();

    assert!(matches!(
        err,
        ChunkError::ChunkingUnderflow { window_size: 4, .. }
    ));
    assert!(stored.is_empty());
}

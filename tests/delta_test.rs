// Integration tests for delta classification
// Tests cover: edits to a known text, fixture vectors, classification properties

use chunkdelta::{Chunker, Delta, build_fingerprint, compute_delta};
use proptest::prelude::*;

const ORIGINAL: &str = "the quick brown fox jumps over the lazy dog";
const ORIGINAL_DIGESTS: [u8; 10] = [0, 72, 9, 26, 20, 95, 33, 81, 95, 42];

fn delta_against_original(modified: &str) -> Delta {
    let fingerprint = build_fingerprint(ORIGINAL.as_bytes()).unwrap();
    assert_eq!(fingerprint.as_bytes(), &ORIGINAL_DIGESTS);
    compute_delta(fingerprint.as_bytes(), modified.as_bytes()).unwrap()
}

// ============================================================================
// Edits to a Known Text
// ============================================================================

#[test]
fn test_unchanged_source() {
    let delta = delta_against_original(ORIGINAL);
    assert!(delta.is_unchanged());
    assert_eq!(delta.fingerprint, ORIGINAL_DIGESTS);
    assert_eq!(delta.chunks, ORIGINAL_DIGESTS);
}

#[test]
fn test_append_at_end() {
    let delta = delta_against_original(&format!("{ORIGINAL} and sleeps"));
    assert_eq!(delta.chunks.len(), 13);
    assert_eq!(delta.new, vec![79, 14, 13]);
    assert!(delta.changed.is_empty());
    assert!(delta.deleted.is_empty());
}

#[test]
fn test_prepend_at_beginning() {
    let delta = delta_against_original(&format!("oh, {ORIGINAL}"));
    assert_eq!(
        delta.chunks,
        vec![95, 81, 0, 72, 9, 26, 20, 95, 33, 81, 95, 42]
    );
    assert_eq!(delta.new, vec![95, 81]);
}

#[test]
fn test_insert_in_middle() {
    let delta = delta_against_original(&ORIGINAL.replace("jumps", "leaps high"));
    assert_eq!(delta.new, vec![36, 45, 19, 38, 46, 99]);
    assert!(delta.changed.is_empty());
}

#[test]
fn test_change_in_place() {
    let delta = delta_against_original(&ORIGINAL.replace("brown", "crown"));
    assert_eq!(delta.chunks, vec![70, 72, 9, 26, 20, 95, 33, 81, 95, 42]);
    assert_eq!(delta.changed, vec![70]);
    assert!(delta.new.is_empty());
    assert!(delta.deleted.is_empty());
}

#[test]
fn test_change_that_adds_a_boundary() {
    // 'h' closes a window where 'l' did not, so the edit lands in the
    // longer branch rather than as an in-place change.
    let delta = delta_against_original(&ORIGINAL.replace("lazy", "hazy"));
    assert_eq!(delta.chunks, vec![0, 72, 9, 26, 20, 95, 33, 81, 33, 92, 42]);
    assert_eq!(delta.new, vec![92]);
    assert!(delta.changed.is_empty());
}

#[test]
fn test_truncate_tail() {
    let delta = delta_against_original(&ORIGINAL[..20]);
    assert_eq!(delta.chunks, vec![0, 72, 9]);
    assert_eq!(delta.deleted, vec![26, 20, 95, 33, 81, 95, 42]);
    assert!(delta.changed.is_empty());
    assert!(delta.new.is_empty());
}

#[test]
fn test_underflow_on_tiny_source() {
    let fingerprint = build_fingerprint(ORIGINAL.as_bytes()).unwrap();
    assert!(compute_delta(fingerprint.as_bytes(), b"ok").is_err());
}

// ============================================================================
// Fixture Vectors
// ============================================================================

#[test]
fn test_fixture_changed_end() {
    let fingerprint = [47, 34, 62, 47, 12, 34, 78, 34, 26];
    let delta = Delta::classify(&fingerprint, &[47, 34, 62, 47, 12, 34, 78, 34, 80]);
    assert_eq!(delta.changed, vec![80]);
    assert!(delta.new.is_empty());
    assert!(delta.deleted.is_empty());
}

#[test]
fn test_fixture_deleted_tail() {
    let fingerprint = [47, 34, 62, 47, 12, 34, 78, 34, 26];
    let delta = Delta::classify(&fingerprint, &[47, 34, 62, 47, 12, 34, 78]);
    assert_eq!(delta.deleted, vec![34, 26]);
    assert!(delta.changed.is_empty());
    assert!(delta.new.is_empty());
}

// ============================================================================
// Properties
// ============================================================================

fn text() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 3..400)
}

proptest! {
    #[test]
    fn prop_identity_delta_is_empty(data in text()) {
        let fingerprint = build_fingerprint(&data).unwrap();
        let delta = compute_delta(fingerprint.as_bytes(), &data).unwrap();
        prop_assert!(delta.is_unchanged());
        prop_assert_eq!(delta.chunks, delta.fingerprint);
    }

    #[test]
    fn prop_append_only_growth(data in text(), tail in proptest::collection::vec(any::<u8>(), 1..200)) {
        let chunker = Chunker::default();
        let before = chunker.chunk_bytes(&data).unwrap();
        let grown: Vec<u8> = data.iter().chain(&tail).copied().collect();
        let after = chunker.chunk_bytes(&grown).unwrap();

        prop_assume!(before.window_size() == after.window_size());
        prop_assume!(after.len() > before.len());
        prop_assert!(after.digests.starts_with(&before.digests));

        let delta = Delta::classify(&before.digests, &after.digests);
        prop_assert_eq!(&delta.new[..], &after.digests[before.len()..]);
        prop_assert!(delta.changed.is_empty());
        prop_assert!(delta.deleted.is_empty());
    }

    #[test]
    fn prop_truncation(data in text(), keep in 3usize..400) {
        let chunker = Chunker::default();
        let before = chunker.chunk_bytes(&data).unwrap();
        let cut = &data[..keep.min(data.len())];
        let after = chunker.chunk_bytes(cut).unwrap();

        prop_assume!(before.window_size() == after.window_size());
        prop_assume!(after.len() < before.len());
        prop_assert!(before.digests.starts_with(&after.digests));

        let delta = Delta::classify(&before.digests, &after.digests);
        prop_assert_eq!(&delta.deleted[..], &before.digests[after.len()..]);
        prop_assert!(delta.changed.is_empty());
        prop_assert!(delta.new.is_empty());
    }

    #[test]
    fn prop_equal_length_mutation(data in text(), at in any::<prop::sample::Index>(), byte in any::<u8>()) {
        let chunker = Chunker::default();
        let before = chunker.chunk_bytes(&data).unwrap();
        let mut mutated = data.clone();
        mutated[at.index(data.len())] = byte;
        let after = chunker.chunk_bytes(&mutated).unwrap();

        prop_assume!(after.len() == before.len());

        let expected: Vec<u8> = after
            .digests
            .iter()
            .zip(&before.digests)
            .filter(|(c, f)| c != f)
            .map(|(&c, _)| c)
            .collect();
        let delta = Delta::classify(&before.digests, &after.digests);
        prop_assert_eq!(delta.changed, expected);
        prop_assert!(delta.new.is_empty());
        prop_assert!(delta.deleted.is_empty());
    }
}

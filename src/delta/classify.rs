//! Length-dependent classification of chunk digests.
//!
//! The policy is selected by comparing the number of new chunk digests `C`
//! with the number of stored fingerprint digests `F`:
//!
//! - **Equal**: every `C[i] != F[i]` is *changed*.
//! - **Shorter**: as equal for the common prefix, then every `F` digest past
//!   the end of `C` is *deleted*.
//! - **Longer**: `C[i]` is *new* when `i < len(F)` and `C[i]` does not occur
//!   in `F[..=i]`. If that marks nothing, every `C` digest past the end of
//!   `F` is *new* instead.
//!
//! Digests are compared by value only. Buckets keep duplicates and preserve
//! the order in which digests were visited.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

/// Result of comparing fresh chunk digests against a stored fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delta {
    /// The stored fingerprint.
    pub fingerprint: Vec<u8>,

    /// The digests computed from the new source.
    pub chunks: Vec<u8>,

    /// Digests classified as inserted.
    pub new: Vec<u8>,

    /// Digests classified as changed in place.
    pub changed: Vec<u8>,

    /// Fingerprint digests with no counterpart in the new source.
    pub deleted: Vec<u8>,
}

impl Delta {
    /// Classifies `chunks` against `fingerprint`.
    pub fn classify(fingerprint: &[u8], chunks: &[u8]) -> Self {
        let mut delta = Self {
            fingerprint: fingerprint.to_vec(),
            chunks: chunks.to_vec(),
            ..Self::default()
        };

        let branch = match chunks.len().cmp(&fingerprint.len()) {
            Ordering::Equal => {
                delta.changed = changed_in_place(fingerprint, chunks);
                "equal"
            }
            Ordering::Less => {
                delta.changed = changed_in_place(fingerprint, chunks);
                delta.deleted = fingerprint[chunks.len()..].to_vec();
                "shorter"
            }
            Ordering::Greater => {
                delta.new = inserted(fingerprint, chunks);
                "longer"
            }
        };

        debug!(
            branch,
            fingerprint = fingerprint.len(),
            chunks = chunks.len(),
            new = delta.new.len(),
            changed = delta.changed.len(),
            deleted = delta.deleted.len(),
            "classified delta"
        );

        delta
    }

    /// Returns true if no digest was classified.
    pub fn is_unchanged(&self) -> bool {
        self.new.is_empty() && self.changed.is_empty() && self.deleted.is_empty()
    }
}

/// Digests of `chunks` differing from `fingerprint` at the same index.
fn changed_in_place(fingerprint: &[u8], chunks: &[u8]) -> Vec<u8> {
    chunks
        .iter()
        .zip(fingerprint)
        .filter(|(c, f)| c != f)
        .map(|(&c, _)| c)
        .collect()
}

/// Digests of `chunks` classified as inserted, for `chunks` longer than
/// `fingerprint`.
fn inserted(fingerprint: &[u8], chunks: &[u8]) -> Vec<u8> {
    // Scanning F from the start stops at the first match, or marks C[i] new
    // on reaching index i. Positions at or past len(F) are never marked.
    let new: Vec<u8> = chunks
        .iter()
        .enumerate()
        .filter(|&(i, c)| i < fingerprint.len() && !fingerprint[..=i].contains(c))
        .map(|(_, &c)| c)
        .collect();

    if new.is_empty() {
        return chunks[fingerprint.len()..].to_vec();
    }
    new
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fingerprint {:?}", self.fingerprint)?;
        writeln!(f, "chunks      {:?}", self.chunks)?;
        writeln!(f, "new         {:?}", self.new)?;
        writeln!(f, "changed     {:?}", self.changed)?;
        write!(f, "deleted     {:?}", self.deleted)
    }
}

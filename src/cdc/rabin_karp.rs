//! Rabin-Karp rolling hash.
//!
//! The hash of a window `b[0..w]` is the polynomial
//! `b[0]*A^(w-1) + b[1]*A^(w-2) + ... + b[w-1]` reduced modulo a prime `P`.
//! Sliding the window one byte removes the outgoing term with the
//! precomputed coefficient `A^(w-1) mod P` and appends the incoming byte,
//! so each step is O(1).
//!
//! All intermediate values are reduced modulo `P` before multiplying, which
//! keeps them in `u64` for any `u32` constants while producing the same
//! residue as the unreduced integer arithmetic.

/// Computes `base^exp mod modulus` by square-and-multiply.
pub fn pow_mod(base: u32, exp: usize, modulus: u32) -> u32 {
    let m = u64::from(modulus);
    let mut result = 1 % m;
    let mut base = u64::from(base) % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u32
}

/// Rolling polynomial hash over a fixed-size window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    hash: u64,
    coefficient: u64,
    alphabet: u64,
    prime: u64,
}

impl RollingHash {
    /// Creates a hash over `window` using Horner's rule.
    ///
    /// The window length fixes the outgoing coefficient for all later rolls.
    /// An empty window yields a zero hash that never rolls meaningfully;
    /// callers guarantee a non-empty window.
    pub fn new(window: &[u8], alphabet: u32, prime: u32) -> Self {
        let coefficient = u64::from(pow_mod(alphabet, window.len().saturating_sub(1), prime));
        let prime = u64::from(prime);
        let alphabet = u64::from(alphabet) % prime;
        let hash = window
            .iter()
            .fold(0u64, |acc, &b| (alphabet * acc + u64::from(b)) % prime);

        Self {
            hash,
            coefficient,
            alphabet,
            prime,
        }
    }

    /// Slides the window by one byte.
    #[inline]
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let removed = u64::from(outgoing) % self.prime * self.coefficient % self.prime;
        let remaining = (self.hash + self.prime - removed) % self.prime;
        self.hash = (self.alphabet * remaining + u64::from(incoming)) % self.prime;
    }

    /// Returns the current hash value, always `< prime`.
    #[inline]
    pub fn value(&self) -> u32 {
        self.hash as u32
    }

    /// Returns the hash truncated to its low 8 bits.
    #[inline]
    pub fn digest(&self) -> u8 {
        self.value() as u8
    }
}

/// Boundary predicate for a window position.
///
/// The boundary fingerprint depends on the final byte of the window only:
/// `(alphabet * last) mod prime`. A position is a boundary when
/// `(fingerprint mod divisor) & mask == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryTest {
    alphabet: u64,
    prime: u64,
    divisor: u64,
    mask: u64,
}

impl BoundaryTest {
    /// Creates a test whose mask has the low `boundary_bits` bits set.
    pub fn new(alphabet: u32, prime: u32, divisor: u32, boundary_bits: u32) -> Self {
        Self {
            alphabet: u64::from(alphabet),
            prime: u64::from(prime),
            divisor: u64::from(divisor),
            mask: (1u64 << boundary_bits) - 1,
        }
    }

    /// Returns the boundary fingerprint for a window ending in `last`.
    #[inline]
    pub fn fingerprint(&self, last: u8) -> u64 {
        self.alphabet * u64::from(last) % self.prime
    }

    /// Returns true if a window ending in `last` closes a chunk.
    #[inline]
    pub fn is_boundary(&self, last: u8) -> bool {
        (self.fingerprint(last) % self.divisor) & self.mask == 0
    }
}

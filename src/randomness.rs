//! Randomness containers: the per-slot blinding matrices r (m x 2), s (n x
//! 2), and the per-equation randomisation matrix T (2 x 2). All three are
//! single-use secrets, destroyed (zeroised) after [`crate::commit::commit`]
//! / [`crate::prove::prove`] return.

use ark_std::rand::{CryptoRng, RngCore};
use ark_std::UniformRand;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::group::Scalar;
use crate::instance::{Instance, Slot};

/// Commitment randomness for X (r, m x 2) and Y (s, n x 2).
///
/// Public slots MUST carry `(0, 0)`; hidden slots MUST carry freshly
/// sampled scalars uniform in `[0, r)`. [`CommitRandomness::for_instance`]
/// enforces this automatically so a caller can never hand a public slot
/// nonzero randomness by mistake (the footgun called out in the spec's
/// design notes).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CommitRandomness {
    pub r: Vec<[Scalar; 2]>,
    pub s: Vec<[Scalar; 2]>,
}

impl CommitRandomness {
    /// Derives r/s from the instance's public/hidden slot layout: zero
    /// randomness on public slots, fresh uniform randomness on hidden ones.
    pub fn for_instance<R: RngCore + CryptoRng>(instance: &Instance, rng: &mut R) -> Self {
        let r = instance
            .a
            .iter()
            .map(|slot| match slot {
                Slot::Public(_) => [Scalar::from(0u64), Scalar::from(0u64)],
                Slot::Hidden => [Scalar::rand(rng), Scalar::rand(rng)],
            })
            .collect();
        let s = instance
            .b
            .iter()
            .map(|slot| match slot {
                Slot::Public(_) => [Scalar::from(0u64), Scalar::from(0u64)],
                Slot::Hidden => [Scalar::rand(rng), Scalar::rand(rng)],
            })
            .collect();
        CommitRandomness { r, s }
    }
}

/// The per-equation 2x2 prover randomisation matrix T, one per Gamma
/// equation in the instance.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ProverRandomness {
    pub t: Vec<[[Scalar; 2]; 2]>,
}

impl ProverRandomness {
    /// Samples one fresh 2x2 T matrix per equation.
    pub fn for_equations<R: RngCore + CryptoRng>(num_equations: usize, rng: &mut R) -> Self {
        let t = (0..num_equations)
            .map(|_| {
                [
                    [Scalar::rand(rng), Scalar::rand(rng)],
                    [Scalar::rand(rng), Scalar::rand(rng)],
                ]
            })
            .collect();
        ProverRandomness { t }
    }
}

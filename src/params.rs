//! Setup (component C3): builds the common reference string (CRS) U1 in
//! V1^2, U2 in V2^2 from a 2x2x2 scalar tensor, enforcing the degeneracy
//! invariants from the spec.

use ark_ec::PrimeGroup;
use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::{CryptoRng, RngCore};
use ark_std::UniformRand;
use zeroize::Zeroize;

use crate::error::{GsError, Result};
use crate::group::{mul_signed, SignedScalar, Scalar, G1, G2};
use crate::vector_space::{V1Elem, V2Elem};

/// The raw scalar tensor rho in Z_r^{2x2x2} that parameterizes the CRS.
/// `tensor[0]` feeds U1 (the G1 side), `tensor[1]` feeds U2 (the G2 side).
///
/// Kept as signed scalars (not yet reduced into `Scalar`) since callers may
/// hand-construct small tensors the same way the literal test scenarios do;
/// `sample_params` instead draws uniform field elements directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct ScalarTensor(pub [[[SignedScalar; 2]; 2]; 2]);

/// The common reference string: U1 in V1^2, U2 in V2^2.
///
/// Immutable once constructed and safe to share across threads and across
/// any number of [`crate::commit`]/[`crate::prove`]/[`crate::verify`] calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    #[cfg_attr(feature = "serde", serde(with = "crate::hex_serde"))]
    pub u1: [V1Elem; 2],
    #[cfg_attr(feature = "serde", serde(with = "crate::hex_serde"))]
    pub u2: [V2Elem; 2],
}

/// Checks the CRS degeneracy invariant for one side (0 = G1/u1, 1 = G2/u2):
///
/// NOT (tensor[side][0][0] = 0 AND tensor[side][1][0] = 0 AND
///      tensor[side][0][1] = tensor[side][1][1])
///
/// This predicate is adopted verbatim from prior work (CKLM); the source
/// material this crate is grounded on carries a comment questioning whether
/// it is the exact intended condition. It is reproduced as stated rather
/// than "fixed" silently — see DESIGN.md.
fn is_degenerate(tensor: &ScalarTensor, side: usize) -> bool {
    let t = &tensor.0[side];
    t[0][0] == SignedScalar::ZERO && t[1][0] == SignedScalar::ZERO && t[0][1] == t[1][1]
}

/// Builds the CRS from a scalar tensor, scalar-multiplying the fixed
/// generators G1/G2 componentwise: `u1[i][j] = rho[0][i][j] * G1`,
/// `u2[i][j] = rho[1][i][j] * G2`.
pub fn build_params(tensor: &ScalarTensor) -> Result<Params> {
    if is_degenerate(tensor, 0) {
        return Err(GsError::InvalidParameters { row: 0 });
    }
    if is_degenerate(tensor, 1) {
        return Err(GsError::InvalidParameters { row: 1 });
    }

    let g1 = G1::generator();
    let g2 = G2::generator();

    let mut u1 = [V1Elem::zero(); 2];
    let mut u2 = [V2Elem::zero(); 2];
    for i in 0..2 {
        for j in 0..2 {
            u1[i][j] = mul_signed(g1, tensor.0[0][i][j]);
            u2[i][j] = mul_signed(g2, tensor.0[1][i][j]);
        }
    }

    Ok(Params { u1, u2 })
}

/// Same construction, taking already-reduced field elements directly (the
/// form `sample_params` uses internally) rather than going through the
/// signed-integer tensor. Exercises the "parameter linearity" property:
/// `build_params(rho) == build_params_from_field(G1 * rho[0], G2 * rho[1])`.
pub fn build_params_from_field(u1_coeffs: [[Scalar; 2]; 2], u2_coeffs: [[Scalar; 2]; 2]) -> Params {
    let g1 = G1::generator();
    let g2 = G2::generator();
    let mut u1 = [V1Elem::zero(); 2];
    let mut u2 = [V2Elem::zero(); 2];
    for i in 0..2 {
        for j in 0..2 {
            u1[i][j] = g1 * u1_coeffs[i][j];
            u2[i][j] = g2 * u2_coeffs[i][j];
        }
    }
    Params { u1, u2 }
}

/// Samples a fresh CRS: 8 scalars uniform in [0, r), assembled into a
/// tensor and delegated to [`build_params`]. Degeneracy is vanishingly
/// unlikely for a uniform draw; on the rare hit this resamples rather than
/// failing the caller.
pub fn sample_params<R: RngCore + CryptoRng>(rng: &mut R) -> Params {
    loop {
        let mut coeffs = [[[Scalar::from(0u64); 2]; 2]; 2];
        for side in coeffs.iter_mut() {
            for row in side.iter_mut() {
                for cell in row.iter_mut() {
                    *cell = Scalar::rand(rng);
                }
            }
        }
        let params = build_params_from_field(coeffs[0], coeffs[1]);

        // Re-derive the tensor's degeneracy check directly on the field
        // elements actually sampled (the same predicate as is_degenerate,
        // just evaluated before multiplying by the generator).
        let degenerate = |side: [[Scalar; 2]; 2]| {
            side[0][0].is_zero() && side[1][0].is_zero() && side[0][1] == side[1][1]
        };
        if !degenerate(coeffs[0]) && !degenerate(coeffs[1]) {
            return params;
        }
        tracing::debug!(
            target: "groth_sahai::params",
            "sample_params hit a degenerate tensor, resampling"
        );
    }
}

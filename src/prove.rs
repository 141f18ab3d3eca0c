//! Prove (second half of component C4): produces, for each pairing-product
//! equation in the instance, a proof (theta in V1^2, phi in V2^2).

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::Zero;
use tracing::instrument;

use crate::commit::Com;
use crate::group::{Scalar, G1, G2};
use crate::instance::Instance;
use crate::params::Params;
use crate::randomness::{CommitRandomness, ProverRandomness};
use crate::vector_space::{V1Elem, V2Elem};

const LOG_TARGET: &str = "groth_sahai::prove";

/// A single equation's proof: two V1 elements (theta) and two V2 elements
/// (phi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proof {
    #[cfg_attr(feature = "serde", serde(with = "crate::hex_serde"))]
    pub theta: [V1Elem; 2],
    #[cfg_attr(feature = "serde", serde(with = "crate::hex_serde"))]
    pub phi: [V2Elem; 2],
}

/// Produces one [`Proof`] per Gamma matrix in `instance.gamma_t`, in the
/// same order.
///
/// Never fails: this is a total function of its inputs. Shape conformity
/// (`len(r) == m`, `len(s) == n`, `len(X) == m`, `len(Y) == n`,
/// `len(t) == len(gamma_t)`, each Gamma of shape n x m) is the caller's
/// responsibility and is only debug-asserted, not checked in release builds.
#[instrument(target = LOG_TARGET, skip_all, fields(equations = instance.gamma_t.len()))]
pub fn prove(
    instance: &Instance,
    params: &Params,
    com: &Com,
    x: &[G1],
    y: &[G2],
    randomness: &CommitRandomness,
    prover_randomness: &ProverRandomness,
) -> Vec<Proof> {
    debug_assert_eq!(randomness.r.len(), instance.m, "len(r) must equal m");
    debug_assert_eq!(randomness.s.len(), instance.n, "len(s) must equal n");
    debug_assert_eq!(com.com_c.len(), instance.m, "len(com_c) must equal m");
    debug_assert_eq!(com.com_d.len(), instance.n, "len(com_d) must equal n");
    debug_assert_eq!(x.len(), instance.m, "len(X) must equal m");
    debug_assert_eq!(y.len(), instance.n, "len(Y) must equal n");
    debug_assert_eq!(
        prover_randomness.t.len(),
        instance.gamma_t.len(),
        "len(t) must equal len(gammaT)"
    );
    debug_assert!(instance.check_shape().is_ok(), "instance must be well-shaped");

    let proofs: Vec<Proof> = instance
        .gamma_t
        .iter()
        .zip(prover_randomness.t.iter())
        .map(|(gamma, t)| prove_one(instance, params, com, x, gamma, randomness, t))
        .collect();

    tracing::debug!(target: LOG_TARGET, "produced {} proofs", instance.gamma_t.len());

    proofs
}

fn prove_one(
    instance: &Instance,
    params: &Params,
    com: &Com,
    x: &[G1],
    gamma: &[Vec<crate::group::SignedScalar>],
    randomness: &CommitRandomness,
    t: &[[Scalar; 2]; 2],
) -> Proof {
    let mut theta = [V1Elem::zero(); 2];
    for a in 0..2 {
        // T U_1
        for v in 0..2 {
            theta[a][v] = params.u1[0][v] * t[a][0] + params.u1[1][v] * t[a][1];
        }
        // s^T Gamma^T iota_1(X), only the second coordinate carries the message.
        let mut acc = G1::zero();
        for (j, row) in gamma.iter().enumerate().take(instance.n) {
            for k in 0..instance.m {
                let coeff = row[k].to_field() * randomness.s[j][a];
                acc += x[k] * coeff;
            }
        }
        theta[a][1] += acc;
    }

    let mut phi = [V2Elem::zero(); 2];
    for v in 0..2 {
        for a in 0..2 {
            // r^T Gamma D
            let mut acc = G2::zero();
            for j in 0..instance.m {
                for (k, row) in gamma.iter().enumerate().take(instance.n) {
                    let coeff = row[j].to_field() * randomness.r[j][a];
                    acc += com.com_d[k][v] * coeff;
                }
            }
            // -T^T U_2
            let minus_t_u2 = -(params.u2[0][v] * t[0][a]) - (params.u2[1][v] * t[1][a]);
            phi[a][v] = acc + minus_t_u2;
        }
    }

    Proof { theta, phi }
}

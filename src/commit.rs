//! Commit (first half of component C4): produces commitments
//! C in V1^m, D in V2^n to the witness vectors X, Y.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use tracing::instrument;

use crate::error::{GsError, Result};
use crate::group::{G1, G2};
use crate::instance::Instance;
use crate::params::Params;
use crate::randomness::CommitRandomness;
use crate::vector_space::{V1Elem, V2Elem};

const LOG_TARGET: &str = "groth_sahai::commit";

/// Commitments to X (com_c, in V1^m) and Y (com_d, in V2^n).
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Com {
    #[cfg_attr(feature = "serde", serde(with = "crate::hex_serde"))]
    pub com_c: Vec<V1Elem>,
    #[cfg_attr(feature = "serde", serde(with = "crate::hex_serde"))]
    pub com_d: Vec<V2Elem>,
}

/// `com_c[k] = r[k][0] * u1[0] + r[k][1] * u1[1] + iota_1(X[k])`, and
/// symmetrically for `com_d`/Y/s/u2. The message is only ever added into
/// the second coordinate (`iota_1(x) = (Z1, x)`), never the first.
///
/// The caller-supplied public-slot contract (public X[k]/Y[k] must equal
/// `instance.a[k]`/`instance.b[k]` with zero randomness) is *not* enforced
/// here — `commit` trusts its inputs and is checked structurally by
/// [`crate::verify::verify`] instead, exactly as the spec describes. Use
/// [`commit_auto`] if you want the randomness derived defensively from the
/// instance rather than supplied by hand.
#[instrument(target = LOG_TARGET, skip_all, fields(m = instance.m, n = instance.n))]
pub fn commit(
    instance: &Instance,
    params: &Params,
    x: &[G1],
    y: &[G2],
    randomness: &CommitRandomness,
) -> Result<Com> {
    check_lengths(instance, x, y, randomness)?;

    let com_c = (0..instance.m)
        .map(|k| {
            let r = randomness.r[k];
            let mut elem = V1Elem::zero();
            for v in 0..2 {
                elem[v] = params.u1[0][v] * r[0] + params.u1[1][v] * r[1];
            }
            elem[1] += x[k];
            elem
        })
        .collect();

    let com_d = (0..instance.n)
        .map(|k| {
            let s = randomness.s[k];
            let mut elem = V2Elem::zero();
            for v in 0..2 {
                elem[v] = params.u2[0][v] * s[0] + params.u2[1][v] * s[1];
            }
            elem[1] += y[k];
            elem
        })
        .collect();

    tracing::debug!(target: LOG_TARGET, "committed {} X slots, {} Y slots", instance.m, instance.n);

    Ok(Com { com_c, com_d })
}

/// Convenience wrapper: derives r/s from the instance's public/hidden
/// layout via [`CommitRandomness::for_instance`] and commits. Removes the
/// footgun where a caller supplies nonzero randomness on a public slot,
/// which `verify` would then reject structurally (spec, Design Notes).
pub fn commit_auto<R: ark_std::rand::RngCore + ark_std::rand::CryptoRng>(
    instance: &Instance,
    params: &Params,
    x: &[G1],
    y: &[G2],
    rng: &mut R,
) -> Result<(Com, CommitRandomness)> {
    let randomness = CommitRandomness::for_instance(instance, rng);
    let com = commit(instance, params, x, y, &randomness)?;
    Ok((com, randomness))
}

fn check_lengths(
    instance: &Instance,
    x: &[G1],
    y: &[G2],
    randomness: &CommitRandomness,
) -> Result<()> {
    if x.len() != instance.m {
        return Err(GsError::ShapeMismatch {
            what: "len(X)",
            expected: instance.m,
            actual: x.len(),
        });
    }
    if y.len() != instance.n {
        return Err(GsError::ShapeMismatch {
            what: "len(Y)",
            expected: instance.n,
            actual: y.len(),
        });
    }
    if randomness.r.len() != instance.m {
        return Err(GsError::ShapeMismatch {
            what: "len(r)",
            expected: instance.m,
            actual: randomness.r.len(),
        });
    }
    if randomness.s.len() != instance.n {
        return Err(GsError::ShapeMismatch {
            what: "len(s)",
            expected: instance.n,
            actual: randomness.s.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{mul_signed, Scalar, SignedScalar as S, G1 as G1Point, G2 as G2Point};
    use crate::instance::Slot;
    use crate::params::{build_params, ScalarTensor};
    use ark_ec::PrimeGroup;
    use ark_std::{test_rng, Zero};

    fn toy_params() -> Params {
        build_params(&ScalarTensor([
            [[S(1), S(2)], [S(3), S(4)]],
            [[S(5), S(6)], [S(7), S(8)]],
        ]))
        .unwrap()
    }

    #[test]
    fn public_slot_commits_to_z_and_a() {
        let params = toy_params();
        let g1 = G1Point::generator();
        let a_point = mul_signed(g1, S(10));

        let instance = Instance {
            m: 1,
            n: 0,
            gamma_t: vec![],
            a: vec![Slot::Public(a_point)],
            b: vec![],
        };
        let randomness = CommitRandomness {
            r: vec![[Scalar::from(0u64), Scalar::from(0u64)]],
            s: vec![],
        };
        let com = commit(&instance, &params, &[a_point], &[], &randomness).unwrap();
        assert_eq!(com.com_c[0][0], G1Point::zero());
        assert_eq!(com.com_c[0][1], a_point);
    }

    #[test]
    fn commit_is_deterministic_given_randomness() {
        let params = toy_params();
        let mut rng = test_rng();
        let g2 = G2Point::generator();
        let instance = Instance {
            m: 0,
            n: 1,
            gamma_t: vec![],
            a: vec![],
            b: vec![Slot::Hidden],
        };
        let (com1, randomness) = commit_auto(&instance, &params, &[], &[g2], &mut rng).unwrap();
        let com2 = commit(&instance, &params, &[], &[g2], &randomness).unwrap();
        assert_eq!(com1, com2);
    }

    #[test]
    fn rejects_witness_length_mismatch() {
        let params = toy_params();
        let instance = Instance {
            m: 2,
            n: 0,
            gamma_t: vec![],
            a: vec![Slot::Hidden, Slot::Hidden],
            b: vec![],
        };
        let randomness = CommitRandomness {
            r: vec![[Scalar::from(0u64); 2], [Scalar::from(0u64); 2]],
            s: vec![],
        };
        let err = commit(&instance, &params, &[G1Point::generator()], &[], &randomness).unwrap_err();
        assert!(matches!(err, GsError::ShapeMismatch { what: "len(X)", .. }));
    }
}

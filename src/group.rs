//! Group adapter (component C1): the small capability surface the
//! Groth-Sahai core needs from a bilinear group. Everything here is a thin
//! wrapper over `ark-ec`/`ark-ff`'s BLS12-381 instantiation; the rest of the
//! crate never touches curve arithmetic directly.
//!
//! Out of scope, and deliberately not reimplemented here: the group laws on
//! G1/G2, the Miller loop and final exponentiation behind [`pairing`], field
//! extension arithmetic up to F_p^12, and secure randomness. All of that is
//! `ark-ec`/`ark-ff`'s job.

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
use ark_ec::{pairing::PairingOutput, pairing::Pairing as ArkPairing, CurveGroup, Group};
use ark_std::Zero;

/// The pairing engine this crate is instantiated over.
pub type EnginePairing = Bls12_381;
/// Scalar field Z_r, r the (prime) order of G1/G2/GT.
pub type Scalar = Fr;
/// G1 in projective (additive) coordinates.
pub type G1 = G1Projective;
/// G2 in projective (additive) coordinates.
pub type G2 = G2Projective;
/// G_T, the multiplicative pairing target group, represented additively by
/// `ark-ec` as [`PairingOutput`].
pub type Gt = PairingOutput<Bls12_381>;

/// A signed scalar for Gamma- and T-matrix entries.
///
/// The spec treats these as small signed integers and defers reduction to
/// the group adapter (the "Signed-scalar convention" design note offers two
/// equivalent choices: a signed-multiply primitive, or reduction to `k mod r`
/// at the boundary). This crate takes the former: `SignedScalar` carries the
/// sign explicitly, so `mul(P, -k) = neg(mul(P, k))` holds by construction
/// rather than relying on modular arithmetic to work out the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, zeroize::Zeroize)]
pub struct SignedScalar(pub i64);

impl SignedScalar {
    pub const ZERO: SignedScalar = SignedScalar(0);

    /// Reduces to the canonical scalar field element `self mod r`.
    pub fn to_field(self) -> Scalar {
        if self.0 >= 0 {
            Scalar::from(self.0 as u64)
        } else {
            -Scalar::from(self.0.unsigned_abs())
        }
    }
}

impl From<i64> for SignedScalar {
    fn from(v: i64) -> Self {
        SignedScalar(v)
    }
}

impl From<i32> for SignedScalar {
    fn from(v: i32) -> Self {
        SignedScalar(v as i64)
    }
}

impl std::ops::Neg for SignedScalar {
    type Output = SignedScalar;
    fn neg(self) -> SignedScalar {
        SignedScalar(-self.0)
    }
}

impl std::ops::Mul for SignedScalar {
    type Output = SignedScalar;
    fn mul(self, rhs: SignedScalar) -> SignedScalar {
        SignedScalar(self.0 * rhs.0)
    }
}

impl std::ops::Add for SignedScalar {
    type Output = SignedScalar;
    fn add(self, rhs: SignedScalar) -> SignedScalar {
        SignedScalar(self.0 + rhs.0)
    }
}

/// Scalar-multiplies `point` by a signed integer, honoring the adapter
/// contract `mul(P, 0) = identity`, `mul(P, -n) = neg(mul(P, n))`.
pub fn mul_signed<G: Group<ScalarField = Scalar>>(point: G, n: SignedScalar) -> G {
    match n.0.signum() {
        0 => G::zero(),
        1 => point * Scalar::from(n.0 as u64),
        _ => -(point * Scalar::from(n.0.unsigned_abs())),
    }
}

/// Evaluates the bilinear pairing e: G2 x G1 -> GT with the G2 argument
/// first, matching this adapter's declared signature (spec 4.1, 4.5, 6).
pub fn pairing(g2: G2, g1: G1) -> Gt {
    Bls12_381::pairing(g1.into_affine(), g2.into_affine())
}

/// The product `prod_i e(g2s[i], g1s[i])` in G_T, computed as a single
/// multi-Miller-loop followed by one final exponentiation rather than
/// `len` independent pairings multiplied together (spec 9, Open Questions).
pub fn multi_pairing(g2s: &[G2], g1s: &[G1]) -> Gt {
    debug_assert_eq!(g2s.len(), g1s.len());
    let g1_affine: Vec<_> = g1s.iter().map(CurveGroup::into_affine).collect();
    let g2_affine: Vec<_> = g2s.iter().map(CurveGroup::into_affine).collect();
    Bls12_381::multi_pairing(g1_affine, g2_affine)
}

/// The identity of G_T, 1_{G_T}.
pub fn gt_one() -> Gt {
    Gt::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::PrimeGroup;

    #[test]
    fn mul_signed_sign_flip_contract() {
        let g = G1::generator();
        for n in [0i64, 1, 2, 7, -1, -2, -7] {
            let lhs = mul_signed(g, SignedScalar(-n));
            let rhs = -mul_signed(g, SignedScalar(n));
            assert_eq!(lhs, rhs, "mul(P, -{n}) != neg(mul(P, {n}))");
        }
        assert_eq!(mul_signed(g, SignedScalar::ZERO), G1::zero());
    }

    #[test]
    fn pairing_is_bilinear() {
        let g1 = G1::generator();
        let g2 = G2::generator();
        let a = SignedScalar(3);
        let b = SignedScalar(5);
        let lhs = pairing(mul_signed(g2, b), mul_signed(g1, a));
        let rhs = pairing(g2, g1) * (a.to_field() * b.to_field());
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn multi_pairing_matches_running_product() {
        let g1 = G1::generator();
        let g2 = G2::generator();
        let p1s = [g1, mul_signed(g1, SignedScalar(2)), mul_signed(g1, SignedScalar(-3))];
        let p2s = [g2, mul_signed(g2, SignedScalar(4)), mul_signed(g2, SignedScalar(5))];

        let mut running = gt_one();
        for (q, p) in p2s.iter().zip(p1s.iter()) {
            running += pairing(*q, *p);
        }

        assert_eq!(multi_pairing(&p2s, &p1s), running);
    }
}

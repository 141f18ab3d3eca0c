//! Vector-space types (component C2): V1 = G1^2 and V2 = G2^2, the
//! commitment codomains of the Groth-Sahai scheme, plus their scalar
//! "ambient ring" needed to build the CRS tensor.
//!
//! The inner pair is a fixed-size array rather than a `Vec`, so the length
//! invariant from the spec ("the inner sequence always has length exactly
//! 2") is enforced by the type system instead of a runtime check.

use ark_ec::Group;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::Zero;
use std::ops::{Add, Index, IndexMut};

use crate::group::{mul_signed, SignedScalar, G1, G2};

/// An element of V1 = G1^2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct V1Elem(pub [G1; 2]);

/// An element of V2 = G2^2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct V2Elem(pub [G2; 2]);

macro_rules! impl_vector_space {
    ($name:ident, $point:ty) => {
        impl $name {
            /// The identity element (Z, Z).
            pub fn zero() -> Self {
                $name([<$point>::zero(), <$point>::zero()])
            }

            /// Embeds a bare group element via the canonical injection
            /// iota(x) = (Z, x), absorbing the message into the second
            /// coordinate only.
            pub fn embed(x: $point) -> Self {
                $name([<$point>::zero(), x])
            }

            /// Componentwise scalar multiplication by a signed scalar.
            pub fn mul_signed(self, n: SignedScalar) -> Self {
                $name([mul_signed(self.0[0], n), mul_signed(self.0[1], n)])
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;
            fn neg(self) -> $name {
                $name([-self.0[0], -self.0[1]])
            }
        }

        impl Index<usize> for $name {
            type Output = $point;
            fn index(&self, i: usize) -> &$point {
                &self.0[i]
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, i: usize) -> &mut $point {
                &mut self.0[i]
            }
        }
    };
}

impl_vector_space!(V1Elem, G1);
impl_vector_space!(V2Elem, G2);

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::PrimeGroup;

    #[test]
    fn embed_only_touches_second_coordinate() {
        let x = G1::generator();
        let e = V1Elem::embed(x);
        assert_eq!(e[0], G1::zero());
        assert_eq!(e[1], x);
    }

    #[test]
    fn addition_is_componentwise() {
        let a = V1Elem([G1::generator(), G1::zero()]);
        let b = V1Elem([G1::zero(), G1::generator()]);
        let sum = a + b;
        assert_eq!(sum[0], G1::generator());
        assert_eq!(sum[1], G1::generator());
    }

    #[test]
    fn mul_signed_is_componentwise_and_sign_respecting() {
        let g = G1::generator();
        let e = V1Elem([g, g]);
        let doubled = e.mul_signed(SignedScalar(2));
        assert_eq!(doubled[0], g + g);
        let negated = e.mul_signed(SignedScalar(-1));
        assert_eq!(negated[0], -g);
    }
}

//! The language description (Instance): sizes, the Gamma matrices of the
//! pairing-product equations, and which X/Y slots are public vs hidden.

use crate::error::{GsError, Result};
use crate::group::{SignedScalar, G1, G2};

/// A row-major matrix of signed scalars, used both for Gamma (n x m per
/// equation) and T (2 x 2 per equation).
pub type Matrix = Vec<Vec<SignedScalar>>;

/// Whether an X- or Y-slot is committed in the clear (`Public`) or hidden
/// under fresh randomness (`Hidden`).
///
/// The source this crate is grounded on encodes "hidden" as a pair whose
/// second element is a -1 sentinel; this sum type makes that encoding
/// unrepresentable instead of relying on callers to check a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<P> {
    Hidden,
    Public(P),
}

impl<P> Slot<P> {
    pub fn is_public(&self) -> bool {
        matches!(self, Slot::Public(_))
    }

    pub fn public(&self) -> Option<&P> {
        match self {
            Slot::Public(p) => Some(p),
            Slot::Hidden => None,
        }
    }
}

/// The language description: sizes of X and Y, the conjunction of
/// pairing-product equations, and the public/hidden status of each slot.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Size of the witness vector X in G1^m.
    pub m: usize,
    /// Size of the witness vector Y in G2^n.
    pub n: usize,
    /// One Gamma matrix (shape n x m) per pairing-product equation.
    pub gamma_t: Vec<Matrix>,
    /// Length m: `Public(A_k)` pins X[k] = A_k in the clear.
    pub a: Vec<Slot<G1>>,
    /// Length n: `Public(B_k)` pins Y[k] = B_k in the clear.
    pub b: Vec<Slot<G2>>,
}

impl Instance {
    /// Checks that `a`, `b`, and every Gamma matrix agree with (m, n).
    /// Programmer-error detector: well-formed callers never trigger it.
    pub fn check_shape(&self) -> Result<()> {
        if self.a.len() != self.m {
            return Err(GsError::ShapeMismatch {
                what: "len(instance.a)",
                expected: self.m,
                actual: self.a.len(),
            });
        }
        if self.b.len() != self.n {
            return Err(GsError::ShapeMismatch {
                what: "len(instance.b)",
                expected: self.n,
                actual: self.b.len(),
            });
        }
        for gamma in &self.gamma_t {
            if gamma.len() != self.n {
                return Err(GsError::ShapeMismatch {
                    what: "Gamma rows",
                    expected: self.n,
                    actual: gamma.len(),
                });
            }
            for row in gamma {
                if row.len() != self.m {
                    return Err(GsError::ShapeMismatch {
                        what: "Gamma columns",
                        expected: self.m,
                        actual: row.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

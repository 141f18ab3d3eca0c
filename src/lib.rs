//! Groth-Sahai non-interactive witness-indistinguishable proofs over
//! BLS12-381.
//!
//! Five components make up the core: [`group`] (C1, the bilinear-group
//! capability surface), [`vector_space`] (C2, V1/V2), [`params`] (C3,
//! setup/CRS), [`commit`] and [`prove`] (C4, commit and prove), and
//! [`verify`] (C5). [`instance`] describes the language being proven
//! membership in; [`randomness`] holds the single-use secret matrices.

pub mod commit;
pub mod error;
pub mod group;
#[cfg(feature = "serde")]
pub mod hex_serde;
pub mod instance;
pub mod params;
pub mod prove;
pub mod randomness;
pub mod vector_space;
pub mod verify;

pub use commit::{commit, commit_auto, Com};
pub use error::{GsError, Result};
pub use group::{gt_one, mul_signed, multi_pairing, pairing, EnginePairing, Gt, Scalar, SignedScalar, G1, G2};
pub use instance::{Instance, Matrix, Slot};
pub use params::{build_params, build_params_from_field, sample_params, Params, ScalarTensor};
pub use prove::{prove, Proof};
pub use randomness::{CommitRandomness, ProverRandomness};
pub use vector_space::{V1Elem, V2Elem};
pub use verify::verify;

//! Error types for Groth-Sahai parameter construction and commitment bookkeeping.

use thiserror::Error;

/// Errors surfaced by the setup and commitment layer.
///
/// `Verify` deliberately does not use this type: it never distinguishes
/// reasons for rejection to its caller (see [`crate::verify`]), to avoid
/// turning verification into a side channel. This enum only covers
/// construction-time and caller-shape errors, which are safe to report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GsError {
    /// The scalar tensor passed to [`crate::params::build_params`] produces a
    /// degenerate commitment subspace (see the CRS invariants in the spec).
    #[error("CRS scalar tensor is degenerate: row {row} collapses to a (0, a) subspace")]
    InvalidParameters {
        /// Which of the two rows (0 = the G1 side, 1 = the G2 side) failed the check.
        row: usize,
    },

    /// A randomness matrix, witness vector, or Gamma matrix disagrees with the
    /// instance's declared (m, n) dimensions. This is a programmer error:
    /// well-formed callers never trigger it.
    #[error("shape mismatch: expected {expected}, got {actual} ({what})")]
    ShapeMismatch {
        /// What was being checked, e.g. "len(r)" or "Gamma rows".
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, GsError>;

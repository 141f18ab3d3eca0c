//! Verify (component C5): structural public-slot check followed by the
//! fourfold pairing-product check. Never raises; malformed inputs are
//! treated as rejections, and the reason for a rejection is never encoded
//! in the return type (only logged internally, at debug level).

use ark_std::Zero;
use tracing::instrument;

use crate::commit::Com;
use crate::group::{gt_one, multi_pairing, G1, G2};
use crate::instance::{Instance, Slot};
use crate::params::Params;
use crate::prove::Proof;

const LOG_TARGET: &str = "groth_sahai::verify";

/// Verifies `proofs` (one per `instance.gamma_t` entry, same order) against
/// `com` under `params`. Returns `true` iff every structural check and every
/// one of the `4 * len(gamma_t)` pairing-product checks holds.
#[instrument(target = LOG_TARGET, skip_all, fields(m = instance.m, n = instance.n, equations = proofs.len()))]
pub fn verify(instance: &Instance, params: &Params, com: &Com, proofs: &[Proof]) -> bool {
    if com.com_c.len() != instance.m || com.com_d.len() != instance.n {
        tracing::debug!(target: LOG_TARGET, "rejected: commitment length mismatch");
        return false;
    }
    if proofs.len() != instance.gamma_t.len() {
        tracing::debug!(target: LOG_TARGET, "rejected: proof count mismatch");
        return false;
    }
    if instance.a.len() != instance.m || instance.b.len() != instance.n {
        tracing::debug!(target: LOG_TARGET, "rejected: instance slot-list length mismatch");
        return false;
    }

    if !structural_check(instance, com) {
        tracing::debug!(target: LOG_TARGET, "rejected: structural public-slot check failed");
        return false;
    }

    for (i, (gamma, proof)) in instance.gamma_t.iter().zip(proofs.iter()).enumerate() {
        if gamma.len() != instance.n || gamma.iter().any(|row| row.len() != instance.m) {
            tracing::debug!(target: LOG_TARGET, equation = i, "rejected: Gamma shape mismatch");
            return false;
        }
        if !pairing_product_check(instance, params, com, gamma, proof) {
            tracing::debug!(target: LOG_TARGET, equation = i, "rejected: pairing product check failed");
            return false;
        }
    }

    true
}

fn structural_check(instance: &Instance, com: &Com) -> bool {
    for (k, slot) in instance.a.iter().enumerate() {
        if let Slot::Public(a_k) = slot {
            if com.com_c[k][0] != G1::zero() || com.com_c[k][1] != *a_k {
                return false;
            }
        }
    }
    for (k, slot) in instance.b.iter().enumerate() {
        if let Slot::Public(b_k) = slot {
            if com.com_d[k][0] != G2::zero() || com.com_d[k][1] != *b_k {
                return false;
            }
        }
    }
    true
}

fn pairing_product_check(
    instance: &Instance,
    params: &Params,
    com: &Com,
    gamma: &[Vec<crate::group::SignedScalar>],
    proof: &Proof,
) -> bool {
    for v1 in 0..2 {
        for v2 in 0..2 {
            let mut p1 = Vec::with_capacity(instance.m + 4);
            let mut p2 = Vec::with_capacity(instance.m + 4);

            for i in 0..instance.m {
                p1.push(com.com_c[i][v1]);
                let mut acc = G2::zero();
                for (j, row) in gamma.iter().enumerate().take(instance.n) {
                    acc += com.com_d[j][v2] * row[i].to_field();
                }
                p2.push(acc);
            }
            for a in 0..2 {
                p1.push(-params.u1[a][v1]);
                p2.push(proof.phi[a][v2]);
            }
            for a in 0..2 {
                p1.push(proof.theta[a][v1]);
                p2.push(-params.u2[a][v2]);
            }

            if multi_pairing(&p2, &p1) != gt_one() {
                return false;
            }
        }
    }
    true
}

//! Exercises the `tracing` output emitted during a full commit/prove/verify
//! cycle, using the same `tracing-subscriber` test-writer setup the teacher
//! crate's test modules use to surface debug-level traces under `cargo
//! test`.

use ark_ec::PrimeGroup;
use ark_std::test_rng;
use tracing_subscriber::{filter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

use groth_sahai::{
    build_params, commit, mul_signed, prove, verify, CommitRandomness, Instance, ProverRandomness,
    ScalarTensor, Slot, SignedScalar as S, G1, G2,
};

const TEST_TARGET: &str = "groth_sahai";

fn setup_test_tracing() -> tracing::subscriber::DefaultGuard {
    let filter = filter::Targets::new().with_target(TEST_TARGET, tracing::Level::DEBUG);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
                .with_test_writer(),
        )
        .with(filter)
        .set_default()
}

// S1 again, just to have a real accepting run whose commit/prove/verify
// debug traces land in the test's captured stdout.
#[test]
fn commit_prove_verify_emit_debug_traces() {
    let _guard = setup_test_tracing();

    let params = build_params(&ScalarTensor([
        [[S(1), S(2)], [S(3), S(4)]],
        [[S(5), S(6)], [S(7), S(8)]],
    ]))
    .unwrap();
    let g1 = G1::generator();
    let g2 = G2::generator();
    let x = [mul_signed(g1, S(10)), mul_signed(g1, S(4))];
    let y = [mul_signed(g2, S(2)), mul_signed(g2, S(5))];
    let instance = Instance {
        m: 2,
        n: 2,
        gamma_t: vec![vec![vec![S(1), S(0)], vec![S(0), S(-1)]]],
        a: vec![Slot::Public(x[0]), Slot::Hidden],
        b: vec![Slot::Public(y[0]), Slot::Hidden],
    };

    let mut rng = test_rng();
    let randomness = CommitRandomness::for_instance(&instance, &mut rng);
    let com = commit(&instance, &params, &x, &y, &randomness).unwrap();
    let prover_randomness = ProverRandomness::for_equations(1, &mut rng);
    let proofs = prove(&instance, &params, &com, &x, &y, &randomness, &prover_randomness);

    assert!(verify(&instance, &params, &com, &proofs));
}

//! Exercises the `serde` feature's hex-string encoding of the curve-bearing
//! containers (`Params`, `Com`, `Proof`) end to end through JSON.

#![cfg(feature = "serde")]

use ark_ec::PrimeGroup;
use ark_std::test_rng;

use groth_sahai::{
    build_params, commit, mul_signed, prove, Com, CommitRandomness, Instance, Params,
    ProverRandomness, ScalarTensor, Slot, SignedScalar as S, G1, G2,
};

fn toy_params() -> Params {
    build_params(&ScalarTensor([
        [[S(1), S(2)], [S(3), S(4)]],
        [[S(5), S(6)], [S(7), S(8)]],
    ]))
    .unwrap()
}

#[test]
fn params_round_trip_through_hex_json() {
    let params = toy_params();
    let json = serde_json::to_string(&params).expect("serialize");
    let back: Params = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(params, back);
}

#[test]
fn com_and_proof_round_trip_through_hex_json() {
    let params = toy_params();
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

    let com_json = serde_json::to_string(&com).expect("serialize com");
    let com_back: Com = serde_json::from_str(&com_json).expect("deserialize com");
    assert_eq!(com, com_back);

    let proof_json = serde_json::to_string(&proofs[0]).expect("serialize proof");
    let proof_back: groth_sahai::Proof = serde_json::from_str(&proof_json).expect("deserialize proof");
    assert_eq!(proofs[0], proof_back);
}

//! Replays the recorded test vectors under `tests/vectors/` through both
//! decision procedures.

use hornsat::{brute_force, decide_unsat, marker_algorithm, HornFormula, TestVector};
use std::{fs, path::PathBuf};

fn vectors(dir: &str) -> Vec<(PathBuf, TestVector)> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/vectors")
        .join(dir);
    let mut out = Vec::new();
    for entry in fs::read_dir(&dir).expect("Missing vector directory") {
        let path = entry.expect("Unreadable directory entry").path();
        let vector = TestVector::load(&path).expect("Unreadable test vector");
        out.push((path, vector));
    }
    assert!(!out.is_empty(), "No vectors found in {}", dir.display());
    out
}

#[test]
fn unsat_vectors() {
    for (path, vector) in vectors("unsat") {
        let expected = vector.unsat.expect("unsat vectors carry an `unsat` field");
        let k = vector.clause_set();
        assert_eq!(decide_unsat(&k), expected, "Failed on {}", path.display());
        // The recorded expectation itself is double-checked exhaustively
        assert_eq!(
            brute_force::satisfiable(&k),
            !expected,
            "Stale expectation in {}",
            path.display()
        );
    }
}

#[test]
fn horn_sat_vectors() {
    for (path, vector) in vectors("horn_sat") {
        let expected = vector
            .horn_sat
            .expect("horn_sat vectors carry a `horn_sat` field");
        let k = vector.clause_set();
        let psi = HornFormula::try_from(k.clone()).expect("Vector is not a Horn formula");
        let model = marker_algorithm(&psi);
        assert_eq!(model.is_some(), expected, "Failed on {}", path.display());
        if let Some(model) = model {
            assert!(
                brute_force::is_satisfied(&k, &model),
                "Model does not satisfy {}",
                path.display()
            );
        }
    }
}

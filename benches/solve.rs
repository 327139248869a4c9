use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hornsat::{decide_unsat, marker_algorithm, Clause, ClauseSet, HornFormula, Literal, Variable};

/// Pigeonhole principle instance: n + 1 pigeons into n holes, unsatisfiable.
fn pigeonhole(n: usize) -> ClauseSet {
    let var = |pigeon: usize, hole: usize| Variable::new(format!("p{pigeon}_{hole}"));
    let mut clauses = Vec::new();
    for pigeon in 0..=n {
        let somewhere: Vec<Literal> = (0..n)
            .map(|hole| Literal {
                variable: var(pigeon, hole),
                positive: true,
            })
            .collect();
        clauses.push(Clause::from_literals(&somewhere));
    }
    for hole in 0..n {
        for a in 0..=n {
            for b in (a + 1)..=n {
                clauses.push(Clause::from_literals(&[
                    Literal {
                        variable: var(a, hole),
                        positive: false,
                    },
                    Literal {
                        variable: var(b, hole),
                        positive: false,
                    },
                ]));
            }
        }
    }
    ClauseSet::from_clauses(clauses)
}

/// Implication chain `x1`, `x1 → x2`, …, with the goal `xn → 0`.
fn horn_chain(n: usize) -> HornFormula {
    let var = |i: usize| Variable::new(format!("x{i}"));
    let mut clauses = vec![Clause::from_literals(&[Literal {
        variable: var(1),
        positive: true,
    }])];
    for i in 1..n {
        clauses.push(Clause::from_literals(&[
            Literal {
                variable: var(i),
                positive: false,
            },
            Literal {
                variable: var(i + 1),
                positive: true,
            },
        ]));
    }
    clauses.push(Clause::from_literals(&[Literal {
        variable: var(n),
        positive: false,
    }]));
    HornFormula::try_from(ClauseSet::from_clauses(clauses)).unwrap()
}

fn resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    for n in [2, 3] {
        let k = pigeonhole(n);
        group.bench_with_input(BenchmarkId::new("pigeonhole", n), &k, |b, k| {
            b.iter(|| decide_unsat(k))
        });
    }
}

fn marker(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker");
    for n in [64, 256] {
        let psi = horn_chain(n);
        group.bench_with_input(BenchmarkId::new("chain", n), &psi, |b, psi| {
            b.iter(|| marker_algorithm(psi))
        });
    }
}

criterion_group!(benches, resolution, marker);
criterion_main!(benches);

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use hornsat::{brute_force, decide_unsat, marker_algorithm, HornFormula, TestVector};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
struct Args {
    /// Decision procedure: `resolution`, `marker`, or `brute_force`
    algorithm: String,
    /// Path to a JSON file with a `clause_set` of literal tokens
    input: PathBuf,
}

#[derive(Debug, Serialize)]
struct Outcome {
    unsat: bool,
    /// The minimal model as variable names; only the marker algorithm
    /// produces one
    #[serde(skip_serializing_if = "Option::is_none")]
    minimal: Option<Vec<String>>,
}

fn decide(algorithm: &str, input: &Path) -> Result<Outcome> {
    let k = TestVector::load(input)?.clause_set();
    log::info!("Loaded {} clauses from {}", k.len(), input.display());
    match algorithm {
        "resolution" => Ok(Outcome {
            unsat: decide_unsat(&k),
            minimal: None,
        }),
        "marker" => {
            let psi = HornFormula::try_from(k)?;
            let model = marker_algorithm(&psi);
            Ok(Outcome {
                unsat: model.is_none(),
                minimal: model.map(|model| {
                    model
                        .into_iter()
                        .map(|variable| variable.name().to_string())
                        .collect()
                }),
            })
        }
        "brute_force" => Ok(Outcome {
            unsat: !brute_force::satisfiable(&k),
            minimal: None,
        }),
        _ => bail!("Unknown algorithm: {}", algorithm),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let outcome = decide(&args.algorithm, &args.input)?;
    let status = if outcome.unsat {
        "UNSAT".bold().red()
    } else {
        "SAT".bold().green()
    };
    eprintln!("{:>12} {}", status, args.input.display());
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}

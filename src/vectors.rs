//! Recorded problem instances with their expected outcomes, stored as JSON.
//!
//! A vector file carries the clause set as nested literal tokens plus the
//! expected answer of one or both procedures:
//!
//! ```json
//! { "clause_set": [["X", "Y"], ["-X"], ["-Y"]], "unsat": true }
//! ```

use crate::ClauseSet;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    /// Clauses as literal tokens: a variable name with an optional `-` prefix
    pub clause_set: Vec<Vec<String>>,
    /// Expected answer of resolution refutation, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsat: Option<bool>,
    /// Expected satisfiability under the marker algorithm, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horn_sat: Option<bool>,
}

impl TestVector {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open test vector at {}", path.display()))?;
        let vector = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Malformed test vector at {}", path.display()))?;
        Ok(vector)
    }

    pub fn clause_set(&self) -> ClauseSet {
        ClauseSet::from_tokens(&self.clause_set)
    }
}

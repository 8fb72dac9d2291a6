//! Configuration for hufftext

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Count assigned to baseline symbols the training corpus never used.
    pub coverage_floor: u64,
    /// Symbols the minimum-coverage pass guarantees a code for.
    pub baseline_alphabet: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        // Printable ASCII plus newline keeps ordinary text encodable even
        // when the training corpus is sparse.
        let mut baseline: String = (' '..='~').collect();
        baseline.push('\n');
        Self {
            coverage_floor: 1,
            baseline_alphabet: baseline,
        }
    }
}

//! Symbol-frequency model trained from sample text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Accumulated symbol frequencies plus a count of termination events.
///
/// The end marker has no `char` identity: it lives in its own counter,
/// so no data symbol can ever be mistaken for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolModel {
    counts: HashMap<char, u64>,
    end_events: u64,
}

impl SymbolModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every symbol in `text`, then records exactly one
    /// termination event for the call.
    pub fn train(&mut self, text: &str) {
        let mut trained = 0u64;
        for symbol in text.chars() {
            *self.counts.entry(symbol).or_insert(0) += 1;
            trained += 1;
        }
        self.end_events += 1;
        debug!(trained, distinct = self.counts.len(), "trained sample");
    }

    /// Sets every baseline symbol whose count is zero to `floor`,
    /// leaving symbols with nonzero counts untouched. Afterwards any
    /// text over the baseline alphabet can be assigned a code.
    pub fn ensure_minimum_coverage<I>(&mut self, baseline: I, floor: u64)
    where
        I: IntoIterator<Item = char>,
    {
        let mut filled = 0usize;
        for symbol in baseline {
            let count = self.counts.entry(symbol).or_insert(0);
            if *count == 0 {
                *count = floor;
                filled += 1;
            }
        }
        debug!(filled, floor, "applied minimum coverage");
    }

    pub fn frequencies(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    pub fn end_events(&self) -> u64 {
        self.end_events
    }

    /// Total number of training events: all symbol counts plus one end
    /// event per `train` call.
    pub fn total_weight(&self) -> u64 {
        self.counts.values().sum::<u64>() + self.end_events
    }

    pub fn is_empty(&self) -> bool {
        self.total_weight() == 0
    }
}

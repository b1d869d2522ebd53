use serde::{Deserialize, Serialize};

/// Bin loads produced by one packing run, in the order the bins were opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing {
    capacity: u64,
    loads: Vec<u64>,
}

impl Packing {
    pub fn new(capacity: u64, loads: Vec<u64>) -> Self {
        Self { capacity, loads }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn loads(&self) -> &[u64] {
        &self.loads
    }

    pub fn bin_count(&self) -> usize {
        self.loads.len()
    }

    pub fn total_weight(&self) -> u64 {
        self.loads.iter().fold(0u64, |acc, load| acc.saturating_add(*load))
    }

    /// Zero-based indices of bins whose load exceeds the capacity.
    pub fn overfull_bins(&self) -> Vec<usize> {
        self.loads
            .iter()
            .enumerate()
            .filter(|(_, load)| **load > self.capacity)
            .map(|(index, _)| index)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingReport {
    pub capacity: u64,
    pub item_count: usize,
    pub bin_count: usize,
    pub bin_loads: Vec<u64>,
    pub total_weight: u64,
    /// `ceil(total_weight / capacity)`; absent for a zero capacity.
    pub lower_bound: Option<u64>,
    pub oversized_items: usize,
}

impl PackingReport {
    pub fn from_packing(packing: &Packing, weights: &[u64]) -> Self {
        let total_weight = packing.total_weight();
        let capacity = packing.capacity();
        let lower_bound = (capacity > 0).then(|| total_weight.div_ceil(capacity));

        Self {
            capacity,
            item_count: weights.len(),
            bin_count: packing.bin_count(),
            bin_loads: packing.loads().to_vec(),
            total_weight,
            lower_bound,
            oversized_items: weights.iter().filter(|w| **w > capacity).count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OversizePolicy {
    /// Fail with an error naming the first item heavier than the capacity.
    #[default]
    Reject,
    /// Give each oversized item a bin of its own, exceeding the capacity.
    Accept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

use crate::domain::model::{OversizePolicy, Packing};
use crate::domain::ports::Packer;
use crate::utils::error::{PackerError, Result};

/// Number of bins First-Fit opens for `weights` in the given order.
///
/// Total over every input: an item heavier than `capacity` never fits an
/// existing bin and ends up alone in a bin it overfills.
pub fn first_fit(weights: &[u64], capacity: u64) -> usize {
    first_fit_loads(weights, capacity).len()
}

/// Bin loads First-Fit produces, in the order the bins were opened.
pub fn first_fit_loads(weights: &[u64], capacity: u64) -> Vec<u64> {
    let mut bins: Vec<u64> = Vec::new();

    for &weight in weights {
        match bins.iter().position(|load| fits(*load, weight, capacity)) {
            Some(index) => bins[index] += weight,
            None => bins.push(weight),
        }
    }

    bins
}

fn fits(load: u64, weight: u64, capacity: u64) -> bool {
    load.checked_add(weight).is_some_and(|total| total <= capacity)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitPacker {
    policy: OversizePolicy,
}

impl FirstFitPacker {
    pub fn new(policy: OversizePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OversizePolicy {
        self.policy
    }

    fn check_oversized(&self, capacity: u64, weights: &[u64]) -> Result<()> {
        for (position, &weight) in weights.iter().enumerate() {
            if weight <= capacity {
                continue;
            }
            match self.policy {
                OversizePolicy::Reject => {
                    return Err(PackerError::ItemTooLarge {
                        index: position + 1,
                        weight,
                        capacity,
                    });
                }
                OversizePolicy::Accept => {
                    tracing::warn!(
                        "⚠️ Item {} (weight {}) exceeds capacity {}, packing it into its own bin",
                        position + 1,
                        weight,
                        capacity
                    );
                }
            }
        }
        Ok(())
    }
}

impl Packer for FirstFitPacker {
    fn pack(&self, capacity: u64, weights: &[u64]) -> Result<Packing> {
        self.check_oversized(capacity, weights)?;

        let loads = first_fit_loads(weights, capacity);
        tracing::debug!(
            "First-Fit packed {} items into {} bins",
            weights.len(),
            loads.len()
        );
        Ok(Packing::new(capacity, loads))
    }
}

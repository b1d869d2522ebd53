use crate::domain::model::PackingReport;
use crate::domain::ports::Packer;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

pub struct PackingEngine<P: Packer> {
    packer: P,
    monitor: RunMonitor,
}

impl<P: Packer> PackingEngine<P> {
    pub fn new(packer: P) -> Self {
        Self::new_with_monitoring(packer, false)
    }

    pub fn new_with_monitoring(packer: P, monitor_enabled: bool) -> Self {
        Self {
            packer,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self, capacity: u64, weights: &[u64]) -> Result<PackingReport> {
        tracing::info!(
            "📦 Packing {} items into bins of capacity {}",
            weights.len(),
            capacity
        );
        self.monitor.log_stats("Before packing");

        let packing = self.packer.pack(capacity, weights)?;
        tracing::debug!("Bin loads: {:?}", packing.loads());

        let overfull = packing.overfull_bins();
        if !overfull.is_empty() {
            tracing::warn!("⚠️ {} bins exceed capacity {}", overfull.len(), capacity);
        }

        self.monitor.log_stats("After packing");
        tracing::info!("✅ Packing finished with {} bins", packing.bin_count());

        Ok(PackingReport::from_packing(&packing, weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::first_fit::FirstFitPacker;
    use crate::domain::model::{OversizePolicy, Packing};
    use std::cell::Cell;

    struct CountingPacker {
        calls: Cell<usize>,
    }

    impl Packer for CountingPacker {
        fn pack(&self, capacity: u64, weights: &[u64]) -> Result<Packing> {
            self.calls.set(self.calls.get() + 1);
            Ok(Packing::new(capacity, weights.to_vec()))
        }
    }

    #[test]
    fn test_engine_builds_report() {
        let mut engine = PackingEngine::new(FirstFitPacker::default());
        let report = engine.run(10, &[4, 7, 3, 5, 2]).unwrap();

        assert_eq!(report.bin_count, 3);
        assert_eq!(report.bin_loads, vec![9, 7, 5]);
        assert_eq!(report.lower_bound, Some(3));
    }

    #[test]
    fn test_engine_delegates_to_packer() {
        let packer = CountingPacker {
            calls: Cell::new(0),
        };
        let mut engine = PackingEngine::new(packer);
        let report = engine.run(5, &[1, 2]).unwrap();

        assert_eq!(engine.packer.calls.get(), 1);
        assert_eq!(report.bin_loads, vec![1, 2]);
    }

    #[test]
    fn test_engine_counts_oversized_items() {
        let mut engine = PackingEngine::new(FirstFitPacker::new(OversizePolicy::Accept));
        let report = engine.run(10, &[12, 3]).unwrap();
        assert_eq!(report.oversized_items, 1);
        assert_eq!(report.bin_loads, vec![12, 3]);
    }

    #[test]
    fn test_engine_propagates_rejection() {
        let mut engine = PackingEngine::new_with_monitoring(FirstFitPacker::default(), false);
        assert!(engine.run(10, &[12]).is_err());
    }
}

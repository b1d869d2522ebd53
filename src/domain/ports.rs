use crate::domain::model::{OutputFormat, OversizePolicy, Packing};
use crate::utils::error::Result;

/// Packs an ordered sequence of weights into bins of a fixed capacity.
pub trait Packer {
    fn pack(&self, capacity: u64, weights: &[u64]) -> Result<Packing>;
}

/// Line-oriented terminal the interactive shell talks to.
pub trait Console {
    /// Writes `message` without a trailing newline and flushes it.
    fn prompt(&mut self, message: &str) -> Result<()>;
    /// Writes `message` followed by a newline.
    fn say(&mut self, message: &str) -> Result<()>;
    /// Next input line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;
}

pub trait ConfigProvider {
    fn oversize_policy(&self) -> OversizePolicy;
    fn output_format(&self) -> OutputFormat;
    fn show_bins(&self) -> bool;
    fn monitoring_enabled(&self) -> bool;
}

pub mod engine;
pub mod first_fit;

pub use crate::domain::model::{OutputFormat, OversizePolicy, Packing, PackingReport};
pub use crate::domain::ports::{ConfigProvider, Console, Packer};
pub use crate::utils::error::Result;

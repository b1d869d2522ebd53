// Domain layer: packing models and the ports the shell and engine talk through.

pub mod model;
pub mod ports;

// Domain layer: value types and the path resolution port. No I/O here.

pub mod model;
pub mod ports;

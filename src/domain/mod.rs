// Domain layer: value types and the finder seam. No dependencies beyond std/serde.

pub mod model;
pub mod ports;

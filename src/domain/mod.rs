// Domain layer: the student model, the source port and pure services.
// No dependencies beyond std/serde.

pub mod model;
pub mod ports;
pub mod services;

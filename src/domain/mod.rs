// Domain layer: core models and ports (interfaces). No dependencies on
// adapters or config; serde only where the model crosses a boundary.

pub mod model;
pub mod ports;

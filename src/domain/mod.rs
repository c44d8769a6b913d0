// Domain layer: the entity model and the repository port. No dependencies on
// concrete backends.

pub mod model;
pub mod ports;

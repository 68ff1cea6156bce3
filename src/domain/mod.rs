// Domain layer: directory records, query types and the ports the pipeline depends on.

pub mod model;
pub mod ports;

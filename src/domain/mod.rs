// Domain layer: records, page settings and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod site;

// Domain layer: result records and the parser seam. No I/O.

pub mod model;
pub mod ports;

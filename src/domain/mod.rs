// Domain layer: the program record and the ports the export layer writes through.

pub mod model;
pub mod ports;

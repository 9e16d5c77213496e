// Domain layer: numeral systems, operators and the codec port.

pub mod model;
pub mod ports;

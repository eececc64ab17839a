// Domain layer: the vowel set, the report model and the ports. No I/O here.

pub mod model;
pub mod ports;

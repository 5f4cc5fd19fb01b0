pub mod arith;
pub mod model;
pub mod ports;

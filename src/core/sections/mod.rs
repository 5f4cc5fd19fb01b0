pub mod constants;
pub mod conversions;
pub mod functions;
pub mod hello;
pub mod types;
pub mod variables;

pub mod errors;
pub mod math;
pub mod structs;
pub mod token;

pub mod spl;

pub use spl::*;

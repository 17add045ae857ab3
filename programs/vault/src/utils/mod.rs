pub mod helpers;
pub use helpers::*;

pub mod deposit;
pub use deposit::*;

pub mod withdraw;
pub use withdraw::*;
